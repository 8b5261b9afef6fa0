//! Access to the parts of a DOCX zip package.

use std::io::{Read, Seek};

use zip::result::ZipError;
use zip::ZipArchive;

use super::xml::parse_element_tree;
use crate::error::{Error, Result};

/// Package-level relationships part.
pub const ROOT_RELATIONSHIPS: &str = "_rels/.rels";

/// Conventional location of the main document part.
pub const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// Conventional location of the core properties part.
pub const DEFAULT_CORE_PART: &str = "docProps/core.xml";

const OFFICE_DOCUMENT_REL: &str = "/officeDocument";
const CORE_PROPERTIES_REL: &str = "/core-properties";

/// An opened DOCX package.
pub struct DocxPackage<R: Read + Seek> {
    archive: ZipArchive<R>,
    max_part_size: u64,
}

impl<R: Read + Seek> DocxPackage<R> {
    /// Open a package from a seekable reader.
    pub fn new(reader: R, max_part_size: u64) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self {
            archive,
            max_part_size,
        })
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Check whether a part exists.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// Read a part's bytes, or `None` if the package has no such part.
    pub fn read_part(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let limit = self.max_part_size;
        if file.size() > limit {
            return Err(Error::PartTooLarge {
                part: name.to_string(),
                size: file.size(),
                limit,
            });
        }

        // The declared size can lie; cap what is actually inflated.
        let mut data = Vec::with_capacity(file.size() as usize);
        file.take(limit.saturating_add(1)).read_to_end(&mut data)?;
        if data.len() as u64 > limit {
            return Err(Error::PartTooLarge {
                part: name.to_string(),
                size: data.len() as u64,
                limit,
            });
        }

        Ok(Some(data))
    }

    /// Name of the main document part.
    pub fn main_document_part(&mut self) -> Result<String> {
        self.resolve_relationship(OFFICE_DOCUMENT_REL, DEFAULT_MAIN_PART)
    }

    /// Name of the core properties part.
    pub fn core_properties_part(&mut self) -> Result<String> {
        self.resolve_relationship(CORE_PROPERTIES_REL, DEFAULT_CORE_PART)
    }

    /// Find the target of the first package relationship whose type ends
    /// with `type_suffix`, falling back to `default` when there is none.
    fn resolve_relationship(&mut self, type_suffix: &str, default: &str) -> Result<String> {
        let Some(data) = self.read_part(ROOT_RELATIONSHIPS)? else {
            log::debug!("{} not found, using {}", ROOT_RELATIONSHIPS, default);
            return Ok(default.to_string());
        };

        let rels = parse_element_tree(ROOT_RELATIONSHIPS, &data)?;
        let target = rels
            .children_named("Relationship")
            .filter(|rel| rel.attr("TargetMode") != Some("External"))
            .find(|rel| {
                rel.attr("Type")
                    .map(|t| t.ends_with(type_suffix))
                    .unwrap_or(false)
            })
            .and_then(|rel| rel.attr("Target"))
            .map(|target| target.trim_start_matches('/').to_string());

        Ok(target.unwrap_or_else(|| default.to_string()))
    }
}
