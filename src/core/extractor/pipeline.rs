//! Document collection pipeline.
//!
//! Coordinates one build:
//! 1. Scan the input directory for document packages
//! 2. Extract text from each package, in filename order
//! 3. Build a record for every package with non-empty text
//!
//! Unreadable packages never stop the run. Malformed body XML stops it
//! unless the pipeline runs with [`ErrorPolicy::Lenient`].

use std::path::Path;
use std::time::Instant;

use crate::core::config::BuildConfig;
use crate::core::error::{ExtractError, IndexError, Result};
use crate::core::extractor::docx;
use crate::core::extractor::scanner::{DocumentScanner, ScannedFile};
use crate::core::types::{BuildReport, DocumentRecord, ErrorPolicy, SkipKind, SkippedFile};

/// Default prefix for record ids
pub const DEFAULT_ID_PREFIX: &str = "docx:";

/// Builds the ordered record collection for a directory
pub struct BuildPipeline {
    scanner: DocumentScanner,
    id_prefix: String,
    policy: ErrorPolicy,
}

impl Default for BuildPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX, ErrorPolicy::Strict)
    }
}

impl BuildPipeline {
    /// Create a pipeline for `.docx` packages
    ///
    /// # Arguments
    ///
    /// * `id_prefix` - Prepended to each filename to form the record id
    /// * `policy` - How malformed body XML is handled
    pub fn new(id_prefix: impl Into<String>, policy: ErrorPolicy) -> Self {
        Self {
            scanner: DocumentScanner::default(),
            id_prefix: id_prefix.into(),
            policy,
        }
    }

    /// Create a pipeline from the `[build]` configuration section
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(
            config.id_prefix.clone(),
            ErrorPolicy::from_skip_malformed(config.skip_malformed_xml),
        )
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Collect records for every qualifying file in `root`
    ///
    /// # Returns
    ///
    /// A report holding the records in filename order plus every
    /// qualifying file that was left out, or an error if the directory
    /// cannot be listed or (strict policy) a document is malformed.
    pub fn collect_documents(&self, root: &Path) -> Result<BuildReport> {
        let start = Instant::now();

        tracing::info!("Scanning {:?} for documents", root);
        let files = self.scanner.scan(root)?;
        tracing::info!("Found {} document files", files.len());

        let mut documents = Vec::new();
        let mut skipped = Vec::new();

        for file in &files {
            match docx::extract_text(&file.path) {
                Ok(body) if body.is_empty() => {
                    tracing::debug!("No paragraph text in {}", file.name);
                    skipped.push(skip(file, SkipKind::Empty, "no paragraph text".to_string()));
                }
                Ok(body) => {
                    tracing::debug!("Extracted {} ({} chars)", file.name, body.chars().count());
                    documents.push(DocumentRecord::new(&self.id_prefix, &file.name, body));
                }
                Err(ExtractError::Xml(source)) => match self.policy {
                    ErrorPolicy::Strict => {
                        return Err(IndexError::MalformedXml {
                            file: file.name.clone(),
                            source,
                        });
                    }
                    ErrorPolicy::Lenient => {
                        tracing::warn!("Skipping malformed document {}: {}", file.name, source);
                        skipped.push(skip(file, SkipKind::MalformedXml, source.to_string()));
                    }
                },
                Err(e) => {
                    tracing::info!("Skipping unreadable document {}: {}", file.name, e);
                    skipped.push(skip(file, SkipKind::Unreadable, e.to_string()));
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Collection complete: {} documents, {} skipped in {}ms",
            documents.len(),
            skipped.len(),
            duration_ms
        );

        Ok(BuildReport {
            documents,
            files_scanned: files.len(),
            skipped,
            duration_ms,
        })
    }
}

fn skip(file: &ScannedFile, kind: SkipKind, reason: String) -> SkippedFile {
    SkippedFile {
        file: file.name.clone(),
        kind,
        reason,
    }
}
