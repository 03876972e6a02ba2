// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: each test crate uses a different subset
#[allow(unused_imports)]
pub use fixtures::{document_xml, paragraphs_xml, DocLibrary, WORDML_NS};
#[allow(unused_imports)]
pub use helpers::{config_for, ids, read_records};
