//! # nestedtext
//!
//! A parser and serializer for NestedText, a human-readable data format
//! whose only value types are strings, ordered lists, and ordered mappings
//! with string keys. There is no type coercion: every leaf is a string,
//! even one that looks like a number or a boolean.
//!
//! ## Quick start
//!
//! ```rust
//! use nestedtext::{parse_string, ParseOptions};
//!
//! let text = "name: example\ntags:\n  - alpha\n  - beta\n";
//! let value = parse_string(text, &ParseOptions::new()).unwrap().unwrap();
//! let map = value.as_mapping().unwrap();
//! assert_eq!(map.get("name").unwrap().as_str(), Some("example"));
//! assert_eq!(map.get("tags").unwrap().as_list().unwrap().len(), 2);
//! ```
//!
//! Serializing back is the mirror operation:
//!
//! ```rust
//! use nestedtext::{emit_string, parse_string, EmitOptions, ParseOptions};
//!
//! let original = "a: 1\nb:\n  - x\n  - y\n";
//! let value = parse_string(original, &ParseOptions::new()).unwrap().unwrap();
//! let rendered = emit_string(&value, &EmitOptions::new()).unwrap();
//! assert_eq!(rendered, original);
//! ```
//!
//! ## serde
//!
//! With the `serde` feature enabled, [`Value`] itself derives `Serialize`
//! and `Deserialize`, so it can be bridged to other formats (e.g.
//! `serde_json`) without going through NestedText's own text form. This is
//! distinct from decoding NestedText directly into arbitrary user-defined
//! structs: because there is no scalar type in the data model, such a
//! deserializer would have to invent type coercion this format deliberately
//! does not have.

mod classifier;
mod error;
mod key;
mod model;
mod options;
mod parser;
mod serializer;
mod stream;

pub use error::{Error, Result};
pub use model::{Mapping, Value};
pub use options::{DuplicateKeyPolicy, EmitOptions, ParseOptions, SortKeys};

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use stream::{ReaderLines, StrLines};

/// Parse a complete in-memory NestedText document.
///
/// Returns `Ok(None)` for an input with no non-ignorable lines at all —
/// distinct from an empty string or an empty container.
///
/// ```rust
/// use nestedtext::{parse_string, ParseOptions};
///
/// assert!(parse_string("", &ParseOptions::new()).unwrap().is_none());
/// ```
pub fn parse_string(text: &str, options: &ParseOptions) -> Result<Option<Value>> {
    tracing::debug!(bytes = text.len(), "parse_string");
    parser::parse_document(StrLines::new(text), options)
}

/// Parse a NestedText document from any buffered reader.
pub fn parse_stream<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Option<Value>> {
    tracing::debug!("parse_stream");
    parser::parse_document(ReaderLines::new(reader), options)
}

/// Open `path`, parse it as NestedText, and close the file on every exit
/// path (success, parse error, or I/O error).
pub fn parse_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Option<Value>> {
    let file = std::fs::File::open(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), "parse_file");
    parse_stream(BufReader::new(file), options)
}

/// Serialize `value` to an in-memory `String`.
///
/// ```rust
/// use nestedtext::{emit_string, EmitOptions, Value};
///
/// let value = Value::from("hello");
/// assert_eq!(emit_string(&value, &EmitOptions::new()).unwrap(), "> hello\n");
/// ```
pub fn emit_string(value: &Value, options: &EmitOptions) -> Result<String> {
    tracing::debug!(indent = options.indent, "emit_string");
    serializer::emit_string(value, options)
}

/// Serialize `value` as NestedText to any writer.
pub fn emit_stream<W: Write>(value: &Value, mut writer: W, options: &EmitOptions) -> Result<()> {
    tracing::debug!("emit_stream");
    let text = serializer::emit_string(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Open (creating or truncating) `path`, serialize `value` into it, and
/// close the file on every exit path.
pub fn emit_file<P: AsRef<Path>>(value: &Value, path: P, options: &EmitOptions) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), "emit_file");
    emit_stream(value, file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_emit_round_trips() {
        let text = "a: 1\nb:\n  - x\n  - y\n";
        let value = parse_string(text, &ParseOptions::new()).unwrap().unwrap();
        let rendered = emit_string(&value, &EmitOptions::new()).unwrap();
        assert_eq!(rendered, text);
    }

    #[test]
    fn parse_stream_matches_parse_string() {
        let text = "- a\n- b\n";
        let from_string = parse_string(text, &ParseOptions::new()).unwrap();
        let from_stream =
            parse_stream(std::io::Cursor::new(text.as_bytes()), &ParseOptions::new()).unwrap();
        assert_eq!(from_string, from_stream);
    }

    #[test]
    fn parse_file_and_emit_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.nt");
        let value = Value::from("hello world");
        emit_file(&value, &path, &EmitOptions::new()).unwrap();
        let parsed = parse_file(&path, &ParseOptions::new()).unwrap().unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn parse_file_missing_path_is_io_error() {
        let err = parse_file("/nonexistent/path/does-not-exist.nt", &ParseOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
