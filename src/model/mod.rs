//! Document model types for word-processing content.
//!
//! This module defines the read-only tree that bridges package parsing
//! and content rendering: body-level blocks (paragraphs, tables, section
//! breaks), their runs, and the package metadata.

mod document;
mod paragraph;
mod table;

pub(crate) use document::non_empty;
pub use document::{Block, Document, Metadata};
pub use paragraph::{ListInfo, Paragraph, TextRun, TextStyle};
pub use table::{Table, TableCell, TableRow};
