//! # docx2md
//!
//! Convert Word (DOCX) documents to Markdown.
//!
//! The package is read into a document tree of paragraphs, tables and
//! section breaks, which is then rendered to Markdown, plain text or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx2md::{parse_file, render};
//!
//! fn main() -> docx2md::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("document.docx")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     print!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure preservation**: headings, checklists, list items, tables
//! - **Inline emphasis**: bold, italic and bold-italic runs
//! - **Document metadata**: title, subject, author and creation time
//! - **Parallel batches**: uses Rayon to convert many files at once
//! - **Async output**: `convert_file_async` behind the `async` feature

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_batch, convert_batch_with_progress, convert_file, BatchItem, ConvertOptions,
};
#[cfg(feature = "async")]
pub use convert::convert_file_async;
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, PackageFormat};
pub use error::{Error, Result};
pub use model::{
    Block, Document, ListInfo, Metadata, Paragraph, Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{ExtractionStats, JsonFormat, RenderOptions, RenderResult, TableShape};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the DOCX file
///
/// # Example
///
/// ```no_run
/// use docx2md::parse_file;
///
/// let doc = parse_file("document.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use docx2md::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().with_metadata(false);
/// let doc = parse_file_with_options("document.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX package from bytes.
///
/// # Example
///
/// ```no_run
/// use docx2md::parse_bytes;
///
/// let data = std::fs::read("document.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX package from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX package from a reader.
///
/// # Example
///
/// ```no_run
/// use docx2md::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a DOCX package from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a DOCX file to Markdown.
///
/// # Example
///
/// ```no_run
/// use docx2md::to_markdown;
///
/// let markdown = to_markdown("document.docx").unwrap();
/// std::fs::write("document.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    let options = RenderOptions::default();
    render::to_markdown(&doc, &options)
}

/// Convert a DOCX file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use docx2md::{to_markdown_with_options, RenderOptions, TableShape};
///
/// let options = RenderOptions::new()
///     .with_metadata(false)
///     .with_table_shape(TableShape::Pad);
/// let markdown = to_markdown_with_options("document.docx", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Convert a DOCX file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use docx2md::Docx2Md;
///
/// let markdown = Docx2Md::new()
///     .lenient()
///     .with_checklist_style("TaskItem")
///     .parse("document.docx")?
///     .to_markdown()?;
/// # Ok::<(), docx2md::Error>(())
/// ```
pub struct Docx2Md {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Docx2Md {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Skip the core properties part and the metadata block.
    pub fn without_metadata(mut self) -> Self {
        self.parse_options = self.parse_options.with_metadata(false);
        self.render_options = self.render_options.with_metadata(false);
        self
    }

    /// Set the paragraph style rendered as a checklist item.
    pub fn with_checklist_style(mut self, style: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_checklist_style(style);
        self
    }

    /// Set the table shape mode.
    pub fn with_table_shape(mut self, shape: TableShape) -> Self {
        self.render_options = self.render_options.with_table_shape(shape);
        self
    }

    /// Set the per-part size limit in bytes.
    pub fn with_max_part_size(mut self, bytes: u64) -> Self {
        self.parse_options = self.parse_options.with_max_part_size(bytes);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<Docx2MdResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(Docx2MdResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX package from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<Docx2MdResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(Docx2MdResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Docx2Md {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct Docx2MdResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl Docx2MdResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with extraction statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = Docx2Md::new()
            .lenient()
            .with_checklist_style("TaskItem")
            .with_table_shape(TableShape::Pad);

        assert_eq!(builder.parse_options.error_mode, ErrorMode::Lenient);
        assert_eq!(builder.render_options.checklist_style, "TaskItem");
        assert_eq!(builder.render_options.table_shape, TableShape::Pad);
    }

    #[test]
    fn test_builder_default() {
        let builder = Docx2Md::default();
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Strict);
        assert!(builder.render_options.include_metadata);
        assert_eq!(builder.render_options.checklist_style, "ChecklistItem");
    }

    #[test]
    fn test_builder_without_metadata() {
        let builder = Docx2Md::new().without_metadata();
        assert!(!builder.parse_options.read_metadata);
        assert!(!builder.render_options.include_metadata);
    }

    #[test]
    fn test_builder_max_part_size() {
        let builder = Docx2Md::new().with_max_part_size(4096);
        assert_eq!(builder.parse_options.max_part_size, 4096);
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(matches!(parse_bytes(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        assert!(matches!(parse_bytes(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_truncated_zip() {
        // Valid magic but no central directory
        let data = b"PK\x03\x04\x14\x00\x00\x00\x00\x00";
        assert!(parse_bytes(data).is_err());
    }

    #[test]
    fn test_builder_parse_invalid_bytes() {
        let result = Docx2Md::new().parse_bytes(b"not a docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_result_renders_document() {
        let mut document = Document::new();
        document.add_paragraph(Paragraph::styled("Heading1", "Title"));
        let result = Docx2MdResult {
            document,
            render_options: RenderOptions::default(),
        };

        assert_eq!(result.to_markdown().unwrap(), "# Title\n");
        assert_eq!(result.plain_text(), "Title");
        assert_eq!(result.to_markdown_with_stats().unwrap().stats.heading_count, 1);
    }
}
