//! Document extraction module.
//!
//! Turns a directory of `.docx` packages into document records:
//!
//! - Top-level directory scanning with case-insensitive extension match
//! - Paragraph text extraction from `word/document.xml`
//! - Collection pipeline with a configurable malformed-XML policy

pub mod docx;
pub mod pipeline;
pub mod scanner;

pub use pipeline::BuildPipeline;
pub use scanner::DocumentScanner;
