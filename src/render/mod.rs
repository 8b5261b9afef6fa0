//! Rendering module for converting documents to various output formats.

mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{
    heading_level, to_markdown, to_markdown_with_stats, MarkdownRenderer, ParagraphKind,
    HEADING_STYLE_PREFIX, METADATA_HEADER,
};
pub use options::{RenderOptions, TableShape, DEFAULT_CHECKLIST_STYLE};
pub use result::{ExtractionStats, RenderResult};
pub use text::to_text;
