//! docx-index - static text index of Word documents
//!
//! Scans a directory for `.docx` packages, extracts their paragraph
//! text and writes the records to a static data file that a front-end
//! search/preview application loads.
//!
//! # Architecture
//!
//! - **core**: Domain logic (no CLI dependencies)
//!   - config, error, types, xdg
//!   - extractor (directory scan, docx text, collection pipeline)
//!   - export (ASCII-only JSON, script/JSON data file)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output formatting
//!
//! # Output
//!
//! ```text
//! const DOCX_DOCS = [{"id": "docx:A.docx", "title": "A", "body": "Hello\nWorld"}];
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{IndexError, Result};
pub use crate::core::extractor::BuildPipeline;
pub use crate::core::types::*;
