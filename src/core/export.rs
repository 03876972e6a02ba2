//! Data file rendering and persistence.
//!
//! Records are written as a JSON array in which every character outside
//! printable ASCII is escaped as `\uXXXX` (surrogate pairs above the
//! BMP). Separators use the spaced `", "` / `": "` form. The array is
//! either embedded in a `const NAME = ...;` statement or written as a
//! plain JSON document.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::core::error::{IndexError, Result};
use crate::core::types::{DocumentRecord, EmitFormat};

/// Default identifier bound by the script form
pub const DEFAULT_VARIABLE_NAME: &str = "DOCX_DOCS";

/// `serde_json` formatter producing ASCII-only, space-separated JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // Fragments never contain quotes, backslashes or C0 controls;
    // serde_json escapes those itself.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize any value as ASCII-only JSON
pub fn to_ascii_json<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut ser)?;

    let json =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(json)
}

/// Render the full data file contents
///
/// # Arguments
///
/// * `docs` - Records in output order
/// * `emit` - Script statement or plain JSON
/// * `variable` - Identifier assigned by the script form
pub fn render(docs: &[DocumentRecord], emit: EmitFormat, variable: &str) -> Result<String> {
    let array = to_ascii_json(docs)?;
    Ok(match emit {
        EmitFormat::Script => format!("const {variable} = {array};\n"),
        EmitFormat::Json => format!("{array}\n"),
    })
}

/// Render and write the data file, replacing any previous contents
pub fn write_output(
    path: &Path,
    docs: &[DocumentRecord],
    emit: EmitFormat,
    variable: &str,
) -> Result<()> {
    let contents = render(docs, emit, variable)?;
    fs::write(path, contents)?;

    tracing::info!("Wrote {} records to {:?} ({})", docs.len(), path, emit);
    Ok(())
}

/// Parse a data file produced by [`render`], in either form
pub fn parse_output(contents: &str) -> Result<Vec<DocumentRecord>> {
    let trimmed = contents.trim();

    let array = if trimmed.starts_with('[') {
        trimmed
    } else {
        let (_, rhs) = trimmed.split_once('=').ok_or_else(|| {
            IndexError::InvalidDataFile("neither a JSON array nor an assignment".to_string())
        })?;
        rhs.trim().trim_end_matches(';').trim_end()
    };

    Ok(serde_json::from_str(array)?)
}
