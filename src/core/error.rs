//! Error types and error handling for docx-index.
//!
//! Two layers exist. [`IndexError`] is the crate-wide error that
//! terminates a build. [`ExtractError`] describes why a single document
//! could not be read; the build pipeline decides whether it is fatal.

use thiserror::Error;

/// Result type alias for docx-index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for a build run
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Malformed document XML in {file}: {source}")]
    MalformedXml {
        file: String,
        #[source]
        source: xml::reader::Error,
    },

    #[error("Invalid data file: {0}")]
    InvalidDataFile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexError {
    /// Check if this error came from configuration loading or validation
    pub fn is_config_error(&self) -> bool {
        matches!(self, IndexError::ConfigError(_) | IndexError::TomlError(_))
    }
}

/// Failure while extracting text from one document package
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("not a readable document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document XML: {0}")]
    Xml(#[from] xml::reader::Error),
}
