//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Option<Metadata>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Option<Metadata>, stats: ExtractionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            metadata: None,
            stats: ExtractionStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of headings emitted
    pub heading_count: u32,

    /// Number of checklist items emitted
    pub checklist_item_count: u32,

    /// Number of list items emitted
    pub list_item_count: u32,

    /// Number of plain paragraphs emitted
    pub paragraph_count: u32,

    /// Number of paragraphs dropped because they had no text
    pub empty_paragraph_count: u32,

    /// Number of tables emitted
    pub table_count: u32,

    /// Number of table rows emitted (header included)
    pub table_row_count: u32,

    /// Number of section breaks emitted
    pub section_break_count: u32,

    /// Number of unrecognised body elements skipped
    pub skipped_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment checklist item count.
    pub fn add_checklist_item(&mut self) {
        self.checklist_item_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment dropped paragraph count.
    pub fn add_empty_paragraph(&mut self) {
        self.empty_paragraph_count += 1;
    }

    /// Increment table count and add its rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment section break count.
    pub fn add_section_break(&mut self) {
        self.section_break_count += 1;
    }

    /// Increment skipped element count.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.heading_count += other.heading_count;
        self.checklist_item_count += other.checklist_item_count;
        self.list_item_count += other.list_item_count;
        self.paragraph_count += other.paragraph_count;
        self.empty_paragraph_count += other.empty_paragraph_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.section_break_count += other.section_break_count;
        self.skipped_count += other.skipped_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
