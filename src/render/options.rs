//! Rendering options and configuration.

/// Style identifier Word uses for checklist items unless configured otherwise.
pub const DEFAULT_CHECKLIST_STYLE: &str = "ChecklistItem";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Paragraph style identifier rendered as a `- [ ] ` checklist item
    pub checklist_style: String,

    /// Append the `## Document Metadata` block when metadata is present
    pub include_metadata: bool,

    /// How to treat body rows whose cell count differs from the header
    pub table_shape: TableShape,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checklist style identifier.
    pub fn with_checklist_style(mut self, style: impl Into<String>) -> Self {
        self.checklist_style = style.into();
        self
    }

    /// Enable or disable the metadata block.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set the table shape mode.
    pub fn with_table_shape(mut self, shape: TableShape) -> Self {
        self.table_shape = shape;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            checklist_style: DEFAULT_CHECKLIST_STYLE.to_string(),
            include_metadata: true,
            table_shape: TableShape::AsIs,
            collect_stats: false,
        }
    }
}

/// Row-width handling for tables whose rows disagree with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableShape {
    /// Render every row with exactly the cells it has
    #[default]
    AsIs,
    /// Pad body rows shorter than the header with empty cells
    Pad,
}
