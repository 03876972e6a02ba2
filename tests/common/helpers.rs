// Test helper functions

use docx_index::core::config::Config;
use docx_index::core::export::parse_output;
use docx_index::core::types::DocumentRecord;
use std::path::Path;

/// Config that reads `input_dir` and writes `output_path`
#[allow(dead_code)]
pub fn config_for(input_dir: &Path, output_path: &Path) -> Config {
    let mut config = Config::default();
    config.build.input_dir = input_dir.to_path_buf();
    config.build.output_path = output_path.to_path_buf();
    config
}

/// Read a generated data file back into records
#[allow(dead_code)]
pub fn read_records(path: &Path) -> Vec<DocumentRecord> {
    let contents = std::fs::read_to_string(path).expect("Failed to read data file");
    parse_output(&contents).expect("Failed to parse data file")
}

/// Record ids in order
#[allow(dead_code)]
pub fn ids(records: &[DocumentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
