//! Document-level types.

use super::{Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed word-processing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Package-level properties (title, author, etc.), if the package has any
    pub metadata: Option<Metadata>,

    /// Body-level nodes in document order
    pub body: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the body.
    pub fn add_block(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Add a section break to the body.
    pub fn add_section_break(&mut self) {
        self.body.push(Block::SectionBreak);
    }

    /// Attach metadata to the document.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Check if the body has no nodes.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Number of body-level nodes.
    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Iterate over the body paragraphs (table cell paragraphs excluded).
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over the body tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::Table(t) => Some(t.plain_text()),
                _ => None,
            })
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A body-level node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// Section properties marking the end of a layout section
    SectionBreak,

    /// Any other body element; rendered as nothing
    Other {
        /// Element name as it appeared in the source (e.g. `w:sdt`)
        tag: String,
    },
}

impl Block {
    /// Create an `Other` block for an element name.
    pub fn other(tag: impl Into<String>) -> Self {
        Block::Other { tag: tag.into() }
    }
}

/// Document metadata from the package core properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author (creator)
    pub author: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Last person to modify the document
    pub last_modified_by: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Check if no field carries a value.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.title).is_none()
            && non_empty(&self.subject).is_none()
            && non_empty(&self.author).is_none()
            && non_empty(&self.keywords).is_none()
            && non_empty(&self.last_modified_by).is_none()
            && self.created.is_none()
            && self.modified.is_none()
    }
}

/// Borrow an optional string only when it is non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
