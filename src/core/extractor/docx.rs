//! Plain-text extraction from `.docx` packages.
//!
//! A `.docx` file is a zip archive whose main body lives in
//! `word/document.xml`. Text is gathered per `w:p` paragraph from the
//! `w:t` text nodes beneath it.

use std::fs::File;
use std::borrow::Cow;
use std::io::{BufReader, Read};
use std::path::Path;

use xml::reader::{EventReader, XmlEvent};
use zip::ZipArchive;

use crate::core::error::ExtractError;

/// WordprocessingML main namespace
pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Archive entry holding the document body
pub const DOCUMENT_ENTRY: &str = "word/document.xml";

const PARAGRAPH_TAG: &str = "p";
const TEXT_TAG: &str = "t";

/// Read the raw body XML out of a document package
///
/// The archive handle is dropped before returning on every path.
pub fn read_document_xml(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut entry = archive.by_name(DOCUMENT_ENTRY)?;

    let mut xml = Vec::new();
    entry.read_to_end(&mut xml)?;
    Ok(xml)
}

/// Apply XML line-end handling to raw entry bytes
///
/// `\r\n` and a lone `\r` both become `\n`. The pull parser leaves
/// literal carriage returns in text nodes; a `&#13;` reference is not
/// touched here and still decodes to `\r`.
pub fn normalize_line_endings(xml: &[u8]) -> Cow<'_, [u8]> {
    if !xml.contains(&b'\r') {
        return Cow::Borrowed(xml);
    }

    let mut out = Vec::with_capacity(xml.len());
    let mut bytes = xml.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' {
            out.push(b'\n');
            if bytes.peek() == Some(&b'\n') {
                bytes.next();
            }
        } else {
            out.push(byte);
        }
    }
    Cow::Owned(out)
}

/// Collect the raw text of every paragraph, in document order
///
/// Paragraphs are ordered by where they open. A paragraph nested inside
/// another (text boxes) gets its own slot, and its text is also part of
/// every enclosing paragraph. Only the text directly inside a `w:t`
/// before any child element counts. Nothing is trimmed here.
pub fn paragraphs(xml: &[u8]) -> Result<Vec<String>, xml::reader::Error> {
    let xml = normalize_line_endings(xml);

    let mut slots: Vec<String> = Vec::new();
    // Indices into `slots` of currently open paragraphs
    let mut open: Vec<usize> = Vec::new();
    // One entry per open element: true while it is a w:t still taking text
    let mut collecting: Vec<bool> = Vec::new();

    for event in EventReader::new(xml.as_ref()) {
        match event? {
            XmlEvent::StartElement { name, .. } => {
                if let Some(parent) = collecting.last_mut() {
                    *parent = false;
                }

                let in_wordml = name.namespace.as_deref() == Some(WORDML_NS);
                if in_wordml && name.local_name == PARAGRAPH_TAG {
                    open.push(slots.len());
                    slots.push(String::new());
                }
                collecting.push(in_wordml && name.local_name == TEXT_TAG);
            }
            XmlEvent::EndElement { name } => {
                collecting.pop();
                if name.namespace.as_deref() == Some(WORDML_NS)
                    && name.local_name == PARAGRAPH_TAG
                {
                    open.pop();
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                if collecting.last() == Some(&true) {
                    for &idx in &open {
                        slots[idx].push_str(&text);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(slots)
}

/// Turn body XML into newline-joined paragraph text
///
/// Each paragraph is trimmed and empty ones are dropped.
pub fn text_from_xml(xml: &[u8]) -> Result<String, xml::reader::Error> {
    let lines: Vec<String> = paragraphs(xml)?
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    Ok(lines.join("\n"))
}

/// Extract the text of one document
///
/// Which failures are fatal is decided by the caller; see
/// [`BuildPipeline`](crate::core::extractor::BuildPipeline).
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let xml = read_document_xml(path)?;
    Ok(text_from_xml(&xml)?)
}
