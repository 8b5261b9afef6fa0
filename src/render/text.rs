//! Plain text rendering for word-processing documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// Emphasis is dropped, table rows become tab-separated lines and
/// non-empty blocks are separated by a blank line.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text())
}
