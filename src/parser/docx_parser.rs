//! DOCX package parser.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata};

use super::core_props::parse_core_properties;
use super::document_part::parse_body;
use super::options::{ErrorMode, ParseOptions};
use super::package::DocxPackage;
use super::xml::parse_element_tree;

/// DOCX document parser.
///
/// The package is held in memory; each call to [`DocxParser::parse`]
/// builds a fresh, independent [`Document`].
pub struct DocxParser {
    data: Vec<u8>,
    main_part: String,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_vec(data, options)
    }

    /// Parse a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::from_vec(data.to_vec(), options)
    }

    /// Parse a DOCX package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data, options)
    }

    fn from_vec(data: Vec<u8>, options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(&data)?;

        let main_part = {
            let mut package =
                DocxPackage::new(Cursor::new(data.as_slice()), options.max_part_size)?;
            let main_part = package.main_document_part()?;
            if !package.has_part(&main_part) {
                return Err(Error::MissingPart(main_part));
            }
            main_part
        };

        Ok(Self {
            data,
            main_part,
            options,
        })
    }

    /// Name of the main document part inside the package.
    pub fn main_part(&self) -> &str {
        &self.main_part
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let mut package =
            DocxPackage::new(Cursor::new(self.data.as_slice()), self.options.max_part_size)?;

        let data = package
            .read_part(&self.main_part)?
            .ok_or_else(|| Error::MissingPart(self.main_part.clone()))?;
        let root = parse_element_tree(&self.main_part, &data)?;
        let body = parse_body(&root, &self.main_part)?;
        log::debug!("{}: {} body elements", self.main_part, body.len());

        let metadata = if self.options.read_metadata {
            self.read_metadata(&mut package)?
        } else {
            None
        };

        Ok(Document { metadata, body })
    }

    fn read_metadata(&self, package: &mut DocxPackage<Cursor<&[u8]>>) -> Result<Option<Metadata>> {
        match Self::read_core_properties(package) {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("ignoring unreadable core properties: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn read_core_properties(package: &mut DocxPackage<Cursor<&[u8]>>) -> Result<Option<Metadata>> {
        let part = package.core_properties_part()?;
        let Some(data) = package.read_part(&part)? else {
            log::debug!("package has no core properties part");
            return Ok(Some(Metadata::default()));
        };
        let root = parse_element_tree(&part, &data)?;
        Ok(Some(parse_core_properties(&root)))
    }
}
