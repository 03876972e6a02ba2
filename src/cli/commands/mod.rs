//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! The build command runs when no subcommand is given.

pub mod build;
pub mod completions;
pub mod config;

// Re-export argument types for use in mod.rs
pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
