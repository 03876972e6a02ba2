//! Core data types for docx-index.
//!
//! Defines the document record written to the data file and the
//! report describing one build run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One extracted document as written to the data file
///
/// Field order is the order the consumer sees in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Id prefix followed by the source filename
    pub id: String,

    /// Filename with its extension removed
    pub title: String,

    /// Non-empty paragraphs joined with '\n'
    pub body: String,
}

impl DocumentRecord {
    /// Build a record for `filename` using `id_prefix`
    pub fn new(id_prefix: &str, filename: &str, body: String) -> Self {
        Self {
            id: format!("{id_prefix}{filename}"),
            title: title_for(filename).to_string(),
            body,
        }
    }
}

/// Strip the final extension from a filename.
///
/// Leading dots never start an extension, so `.docx` stays `.docx`.
pub fn title_for(filename: &str) -> &str {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(idx) => &filename[..leading + idx],
        None => filename,
    }
}

/// Shape of the written data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// `const DOCX_DOCS = [...];` for direct script inclusion (default)
    #[default]
    Script,
    /// Plain JSON array
    Json,
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitFormat::Script => write!(f, "script"),
            EmitFormat::Json => write!(f, "json"),
        }
    }
}

/// What to do when a document's XML fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole build (default)
    #[default]
    Strict,
    /// Record the file as skipped and keep going
    Lenient,
}

impl ErrorPolicy {
    pub fn from_skip_malformed(skip_malformed: bool) -> Self {
        if skip_malformed {
            ErrorPolicy::Lenient
        } else {
            ErrorPolicy::Strict
        }
    }
}

/// Why a qualifying file produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// Document contained no non-whitespace paragraph text
    Empty,
    /// Not an archive, missing body entry, or unreadable
    Unreadable,
    /// Body entry was read but is not well-formed XML
    MalformedXml,
}

/// A qualifying file left out of the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub kind: SkipKind,
    pub reason: String,
}

/// Result of collecting documents from a directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    /// Records in filename order
    pub documents: Vec<DocumentRecord>,

    /// Number of qualifying files examined
    pub files_scanned: usize,

    /// Qualifying files that produced no record
    pub skipped: Vec<SkippedFile>,

    /// Collection duration in milliseconds
    pub duration_ms: u64,
}
