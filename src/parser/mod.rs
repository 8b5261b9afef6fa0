//! DOCX parsing module.
//!
//! Reads the zip package, resolves the main document and core properties
//! parts, and maps their XML onto the [`crate::model`] tree.

mod core_props;
mod document_part;
mod docx_parser;
mod options;
pub mod package;
pub mod xml;

pub use core_props::parse_timestamp;
pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions, DEFAULT_MAX_PART_SIZE};
pub use package::DocxPackage;
