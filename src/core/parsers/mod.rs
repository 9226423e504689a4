//! Parsers for localization table files.
//!
//! A table file is decoded into its entries in source order. Duplicate keys
//! are kept; deciding what they mean is up to the loader.
//!
//! - `strings`: textual `.strings` files (`"key" = "value";`)
//! - `property_list`: XML and binary property lists

pub mod property_list;
pub mod strings;

use std::path::{Path, PathBuf};

use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const BINARY_PLIST_MAGIC: &[u8] = b"bplist";
const XML_PLIST_PREFIXES: &[&[u8]] = &[b"<?xml", b"<!DOCTYPE", b"<plist"];

/// One key-value pair as it appears in a table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsEntry {
    pub key: String,
    pub value: String,
    /// Line number (1-indexed), known for textual files only.
    pub line: Option<usize>,
}

impl StringsEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// A table file that does not decode to a flat string-to-string mapping.
#[derive(Debug, Error)]
#[error("{} is not a flat strings table: {reason}", .path.display())]
pub struct DataTypeError {
    pub path: PathBuf,
    pub reason: String,
}

impl DataTypeError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Serialization format of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Text,
    XmlPlist,
    BinaryPlist,
}

/// Detect the format of a table file from its first bytes.
pub fn detect_format(bytes: &[u8]) -> TableFormat {
    if bytes.starts_with(BINARY_PLIST_MAGIC) {
        return TableFormat::BinaryPlist;
    }

    let head = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes).trim_ascii_start();
    if XML_PLIST_PREFIXES.iter().any(|prefix| head.starts_with(prefix)) {
        TableFormat::XmlPlist
    } else {
        TableFormat::Text
    }
}

/// Decode a table file into its entries.
///
/// `path` is only used for error messages.
pub fn parse_strings(bytes: &[u8], path: &Path) -> Result<Vec<StringsEntry>, DataTypeError> {
    match detect_format(bytes) {
        TableFormat::BinaryPlist | TableFormat::XmlPlist => {
            property_list::parse_property_list(bytes, path)
        }
        TableFormat::Text => {
            let text = strings::decode_text(bytes, path)?;
            strings::parse_strings_text(&text, path)
        }
    }
}
