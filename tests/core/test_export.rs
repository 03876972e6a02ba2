// Data file tests
//
// Runs collection and export end to end and checks the written file.

use crate::common::{read_records, DocLibrary};
use docx_index::core::export::{render, write_output, DEFAULT_VARIABLE_NAME};
use docx_index::core::extractor::BuildPipeline;
use docx_index::core::types::EmitFormat;

#[test]
fn test_scenario_data_file() {
    let lib = DocLibrary::scenario();
    let out = lib.output_path("docx-data.js");

    let report = BuildPipeline::default()
        .collect_documents(lib.path())
        .unwrap();
    write_output(&out, &report.documents, EmitFormat::Script, DEFAULT_VARIABLE_NAME).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents,
        "const DOCX_DOCS = [{\"id\": \"docx:A.docx\", \"title\": \"A\", \"body\": \"Hello\\nWorld\"}];\n"
    );
}

#[test]
fn test_empty_directory_data_file() {
    let lib = DocLibrary::new();
    let out = lib.output_path("docx-data.js");

    let report = BuildPipeline::default()
        .collect_documents(lib.path())
        .unwrap();
    write_output(&out, &report.documents, EmitFormat::Script, DEFAULT_VARIABLE_NAME).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "const DOCX_DOCS = [];\n"
    );
}

#[test]
fn test_output_fully_replaced() {
    let lib = DocLibrary::new().with_docx("A.docx", &["short"]);
    let out = lib.output_path("docx-data.js");
    std::fs::write(&out, "x".repeat(10_000)).unwrap();

    let report = BuildPipeline::default()
        .collect_documents(lib.path())
        .unwrap();
    write_output(&out, &report.documents, EmitFormat::Script, DEFAULT_VARIABLE_NAME).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("const DOCX_DOCS = "));
    assert!(!contents.contains("xxx"));
}

#[test]
fn test_round_trip_reproduces_records() {
    let lib = DocLibrary::new()
        .with_docx("A.docx", &["Quotes \"inside\"", "Back\\slash", "Tabs\there"])
        .with_docx("B.docx", &["<tags> & ampersands"]);
    let out = lib.output_path("docx-data.js");

    let report = BuildPipeline::default()
        .collect_documents(lib.path())
        .unwrap();
    write_output(&out, &report.documents, EmitFormat::Script, DEFAULT_VARIABLE_NAME).unwrap();

    assert_eq!(read_records(&out), report.documents);
    assert_eq!(report.documents[1].body, "<tags> & ampersands");
}

#[test]
fn test_json_emit_round_trip() {
    let lib = DocLibrary::new().with_docx("A.docx", &["one", "two"]);
    let out = lib.output_path("docx-data.json");

    let report = BuildPipeline::default()
        .collect_documents(lib.path())
        .unwrap();
    write_output(&out, &report.documents, EmitFormat::Json, DEFAULT_VARIABLE_NAME).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let parsed: Vec<docx_index::DocumentRecord> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, report.documents);
}

#[test]
fn test_custom_variable_name() {
    let out = render(&[], EmitFormat::Script, "KB_DOCS").unwrap();
    assert_eq!(out, "const KB_DOCS = [];\n");
}

#[test]
fn test_missing_output_directory_is_error() {
    let lib = DocLibrary::new();
    let out = lib.path().join("no-such-dir").join("docx-data.js");

    let result = write_output(&out, &[], EmitFormat::Script, DEFAULT_VARIABLE_NAME);

    assert!(result.is_err());
}
