//! Markdown rendering for word-processing documents.
//!
//! The renderer walks the body once, front to back, appending to a single
//! output buffer. The output is not trimmed: trailing spaces in table rows
//! and the blank lines after paragraphs are part of the produced format.

use std::fmt::Write;

use crate::error::Result;
use crate::model::{non_empty, Block, Document, Metadata, Paragraph, Table, TableCell, TextRun};

use super::{ExtractionStats, RenderOptions, RenderResult, TableShape};

/// Style identifier prefix of heading paragraphs (`Heading1`, `Heading2`, ...).
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// Header line of the metadata block.
pub const METADATA_HEADER: &str = "## Document Metadata";

/// Marker emitted for a section break.
const SECTION_BREAK: &str = "\n---\n\n";

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// How a paragraph is rendered. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// `HeadingN` style with a positive level
    Heading(u32),
    /// The configured checklist style
    Checklist,
    /// Paragraph with a numbering reference
    ListItem,
    /// Anything else
    Plain,
}

/// Parse the level out of a `HeadingN` style identifier.
///
/// Returns `None` when the identifier lacks the prefix, the suffix is not a
/// number, or the number is zero or does not fit in a `u32`.
pub fn heading_level(style_id: &str) -> Option<u32> {
    let suffix = style_id.strip_prefix(HEADING_STYLE_PREFIX)?;
    suffix.trim().parse::<u32>().ok().filter(|level| *level > 0)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = String::new();

        for block in &doc.body {
            self.render_block(&mut output, block);
        }

        if self.options.include_metadata {
            render_metadata(&mut output, doc.metadata.as_ref());
        }

        output
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
            Block::SectionBreak => {
                if self.options.collect_stats {
                    self.stats.add_section_break();
                }
                output.push_str(SECTION_BREAK);
            }
            Block::Other { tag } => {
                log::debug!("skipping body element {}", tag);
                if self.options.collect_stats {
                    self.stats.add_skipped();
                }
            }
        }
    }

    /// Decide how a paragraph renders from its style and numbering.
    pub fn classify(&self, para: &Paragraph) -> ParagraphKind {
        let style = para.style_id.as_deref();

        if let Some(level) = style.and_then(heading_level) {
            return ParagraphKind::Heading(level);
        }
        if let Some(s) = style.filter(|s| s.starts_with(HEADING_STYLE_PREFIX)) {
            log::debug!("style {} has no usable heading level", s);
        }

        if style == Some(self.options.checklist_style.as_str()) {
            return ParagraphKind::Checklist;
        }

        if para.list_info.is_some() {
            return ParagraphKind::ListItem;
        }

        ParagraphKind::Plain
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        let text = Self::render_inline(para);

        match self.classify(para) {
            ParagraphKind::Heading(level) => {
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                output.push_str(&"#".repeat(level as usize));
                output.push(' ');
                output.push_str(&text);
                output.push('\n');
            }
            ParagraphKind::Checklist => {
                let text = text.trim();
                if text.is_empty() {
                    if self.options.collect_stats {
                        self.stats.add_empty_paragraph();
                    }
                    return;
                }
                if self.options.collect_stats {
                    self.stats.add_checklist_item();
                }
                // No trailing blank line.
                output.push_str("- [ ] ");
                output.push_str(text);
                output.push('\n');
            }
            ParagraphKind::ListItem => {
                if self.options.collect_stats {
                    self.stats.add_list_item();
                }
                output.push_str("- ");
                output.push_str(&text);
                output.push('\n');
            }
            ParagraphKind::Plain => {
                if text.trim().is_empty() {
                    if self.options.collect_stats {
                        self.stats.add_empty_paragraph();
                    }
                    return;
                }
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                output.push_str(&text);
                output.push_str("\n\n\n");
            }
        }
    }

    /// Render a paragraph's runs to a single string with emphasis markers.
    pub fn render_inline(para: &Paragraph) -> String {
        let mut output = String::new();
        for run in &para.runs {
            render_run(&mut output, run);
        }
        output
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        let Some(header) = table.header() else {
            return;
        };

        if self.options.collect_stats {
            self.stats.add_table(table.row_count());
        }

        let columns = header.cells.len();
        render_row(output, header.cells.iter().map(render_cell));

        output.push_str("| ");
        for _ in 0..columns {
            output.push_str("--- | ");
        }
        output.push('\n');

        for row in table.body() {
            let mut cells: Vec<String> = row.cells.iter().map(render_cell).collect();
            if self.options.table_shape == TableShape::Pad && cells.len() < columns {
                cells.resize(columns, String::new());
            }
            render_row(output, cells.into_iter());
        }

        output.push('\n');
    }
}

fn render_run(output: &mut String, run: &TextRun) {
    let marker = match (run.style.bold, run.style.italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => "",
    };

    for segment in &run.segments {
        output.push_str(marker);
        output.push_str(segment);
        output.push_str(marker);
    }
}

/// Cell text: all paragraphs concatenated, pipes escaped, then trimmed.
fn render_cell(cell: &TableCell) -> String {
    let text: String = cell.content.iter().map(MarkdownRenderer::render_inline).collect();
    text.replace('|', "\\|").trim().to_string()
}

fn render_row(output: &mut String, cells: impl Iterator<Item = String>) {
    output.push_str("| ");
    for cell in cells {
        output.push_str(&cell);
        output.push_str(" | ");
    }
    output.push('\n');
}

fn render_metadata(output: &mut String, metadata: Option<&Metadata>) {
    let Some(metadata) = metadata else {
        return;
    };

    output.push_str(METADATA_HEADER);
    output.push('\n');

    let fields = [
        ("Title", non_empty(&metadata.title)),
        ("Subject", non_empty(&metadata.subject)),
        ("Author", non_empty(&metadata.author)),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(output, "**{}**: {}", label, value);
        }
    }

    if let Some(created) = metadata.created {
        let _ = writeln!(output, "**Created**: {}", created.format(CREATED_FORMAT));
    }

    output.push('\n');
}
