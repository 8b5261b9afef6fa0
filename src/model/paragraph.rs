//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style identifier (e.g. `Heading1`), if any
    pub style_id: Option<String>,

    /// Numbering reference if this paragraph belongs to a list
    pub list_info: Option<ListInfo>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph with a style identifier and plain text.
    pub fn styled(style_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_text(text).with_style(style_id)
    }

    /// Set the style identifier and return self.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Set the numbering reference and return self.
    pub fn with_list(mut self, list_info: ListInfo) -> Self {
        self.list_info = Some(list_info);
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this paragraph carries a numbering reference.
    pub fn is_list_item(&self) -> bool {
        self.list_info.is_some()
    }
}

/// A run of text with consistent styling.
///
/// A run holds its text as the ordered sequence of text segments it was
/// built from; emphasis is applied to each segment separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text segments in order
    pub segments: Vec<String>,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with a single segment and default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            style: TextStyle::default(),
        }
    }

    /// Create a run from several segments.
    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_style(TextStyle {
            bold: true,
            italic: false,
        })
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text).with_style(TextStyle {
            bold: false,
            italic: true,
        })
    }

    /// Create a bold and italic text run.
    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self::new(text).with_style(TextStyle {
            bold: true,
            italic: true,
        })
    }

    /// Set the style and return self.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Concatenated text of all segments.
    pub fn text(&self) -> String {
        self.segments.concat()
    }

    /// Check if this run has no text.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.is_empty())
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// Numbering reference of a list paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Numbering definition identifier
    pub num_id: String,

    /// Nesting level (0 = top level)
    pub level: u8,
}

impl ListInfo {
    /// Create a numbering reference.
    pub fn new(num_id: impl Into<String>, level: u8) -> Self {
        Self {
            num_id: num_id.into(),
            level,
        }
    }
}
