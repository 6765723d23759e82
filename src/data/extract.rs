//! Field extraction from the raw feed document.

use std::borrow::Cow;

use roxmltree::{Document, ParsingOptions};
use thiserror::Error;

use super::catalog::FieldCatalog;
use super::snapshot::{FieldValue, Reading, Snapshot};

/// The document is not well-formed markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse feed: {0}")]
pub struct ParseError(String);

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        ParseError(err.to_string())
    }
}

/// Extract a snapshot using the standard catalog.
pub fn extract(bytes: &[u8]) -> Result<Snapshot, ParseError> {
    extract_with(&FieldCatalog::standard(), bytes)
}

/// Extract every catalog field found anywhere in the document.
///
/// Elements are visited depth-first in document order. Unrecognized tags
/// are skipped. When a key occurs more than once the last occurrence wins.
pub fn extract_with(catalog: &FieldCatalog, bytes: &[u8]) -> Result<Snapshot, ParseError> {
    let text = decode(bytes);
    // Feeds may carry a DOCTYPE line
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(&text, options)?;

    let mut slots: Vec<Option<Reading>> = vec![None; catalog.len()];

    for node in doc.descendants().filter(|n| n.is_element()) {
        let tag = node.tag_name().name();
        let Some((index, field)) = catalog.iter().enumerate().find(|(_, f)| f.key == tag) else {
            tracing::trace!(tag, "skipping unrecognized element");
            continue;
        };

        let value = FieldValue::coerce(node.text());
        if let FieldValue::Text(ref raw) = value {
            tracing::debug!(key = field.key, raw = %raw, "non-numeric value kept as text");
        }

        slots[index] = Some(Reading {
            key: field.key,
            label: field.label,
            value,
        });
    }

    Ok(Snapshot::from_readings(slots.into_iter().flatten().collect()))
}

/// Decode as UTF-8, falling back to ISO-8859-1 for legacy feeds.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}
