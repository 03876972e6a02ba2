// Test fixtures: real .docx packages written into temporary directories

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[allow(dead_code)]
pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

/// Escape text for use inside an XML element
#[allow(dead_code)]
pub fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap body markup in a w:document root
#[allow(dead_code)]
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{WORDML_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Build body XML with one single-run paragraph per entry
///
/// An empty entry becomes an empty `<w:p/>`.
#[allow(dead_code)]
pub fn paragraphs_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    xml_escape(p)
                )
            }
        })
        .collect();
    document_xml(&body)
}

/// Write a zip package with the given (entry name, contents) pairs
#[allow(dead_code)]
pub fn write_package(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create package");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        zip.start_file(*name, options)
            .expect("Failed to start zip entry");
        zip.write_all(contents.as_bytes())
            .expect("Failed to write zip entry");
    }

    zip.finish().expect("Failed to finish package");
}

/// Write a .docx whose body is `xml`
#[allow(dead_code)]
pub fn write_docx_xml(path: &Path, xml: &str) {
    write_package(
        path,
        &[("[Content_Types].xml", CONTENT_TYPES), ("word/document.xml", xml)],
    );
}

/// Directory of test documents
#[allow(dead_code)]
pub struct DocLibrary {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl DocLibrary {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The scenario directory: A.docx with text, corrupt B.docx, c.txt
    pub fn scenario() -> Self {
        Self::new()
            .with_docx("A.docx", &["Hello", "", "World"])
            .with_file("B.docx", b"PK? definitely not a zip archive")
            .with_file("c.txt", b"Hello from a text file")
    }

    /// Add a .docx with one paragraph per entry
    pub fn with_docx(self, name: &str, paragraphs: &[&str]) -> Self {
        write_docx_xml(&self.dir.path().join(name), &paragraphs_xml(paragraphs));
        self
    }

    /// Add a .docx with a hand-written document.xml
    pub fn with_docx_xml(self, name: &str, xml: &str) -> Self {
        write_docx_xml(&self.dir.path().join(name), xml);
        self
    }

    /// Add a zip package that has no word/document.xml
    pub fn with_package_without_body(self, name: &str) -> Self {
        write_package(
            &self.dir.path().join(name),
            &[("[Content_Types].xml", CONTENT_TYPES)],
        );
        self
    }

    /// Add an arbitrary file
    pub fn with_file(self, name: &str, contents: &[u8]) -> Self {
        fs::write(self.dir.path().join(name), contents).expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where tests put the generated data file (outside the input dir)
    pub fn output_path(&self, name: &str) -> PathBuf {
        let out_dir = self.dir.path().join("out");
        fs::create_dir_all(&out_dir).expect("Failed to create output dir");
        out_dir.join(name)
    }
}
