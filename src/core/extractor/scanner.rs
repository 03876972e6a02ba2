//! Directory scanner for document packages.
//!
//! Lists the top level of a directory, keeps files whose name ends in
//! the target extension (case-insensitively) and returns them sorted by
//! name. Enumeration failures propagate.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::Result;

/// Default extension of document packages
pub const DOCX_EXTENSION: &str = ".docx";

/// A qualifying file found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Bare filename (no directory part)
    pub name: String,

    /// Full path to the file
    pub path: PathBuf,
}

/// Finds document packages in a single directory
pub struct DocumentScanner {
    /// Lowercased suffix including the leading dot
    extension: String,
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new(DOCX_EXTENSION)
    }
}

impl DocumentScanner {
    /// Create a scanner for names ending in `extension` (e.g. ".docx")
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_lowercase(),
        }
    }

    /// Check whether a filename qualifies
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.extension)
    }

    /// Collect qualifying files in `root`, sorted by name
    ///
    /// Only the top level is listed. Entries that do not resolve to a
    /// regular file are skipped. Documents whose names are not valid
    /// UTF-8 are excluded with a warning.
    pub fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(io::Error::from)?;

            if !self.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            // Ids and titles are strings, so the document cannot be represented
            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => {
                    tracing::warn!(
                        "Excluding document {:?}: filename is not valid UTF-8, its text will not be indexed",
                        entry.path()
                    );
                    continue;
                }
            };

            // Follows symlinks; broken links and directories fall out here
            if !entry.path().is_file() {
                tracing::debug!("Skipping non-file entry: {:?}", entry.path());
                continue;
            }

            files.push(ScannedFile {
                path: entry.path().to_path_buf(),
                name,
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}
