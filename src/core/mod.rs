//! Core domain logic (CLI-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Document records and build reports
//! - **xdg**: XDG directory handling
//! - **extractor**: Directory scanning and `.docx` text extraction
//! - **export**: ASCII-only JSON rendering and data file output

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IndexError, Result};
pub use extractor::BuildPipeline;
