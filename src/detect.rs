//! DOCX package detection and validation.

use crate::error::{Error, Result};
use crate::parser::{DocxPackage, DEFAULT_MAX_PART_SIZE};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Zip package information read from the first local file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageFormat {
    /// Zip "version needed to extract" (e.g. 20 for 2.0)
    pub version_needed: u16,
}

impl std::fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ZIP package {}.{}",
            self.version_needed / 10,
            self.version_needed % 10
        )
    }
}

/// Zip local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const HEADER_LEN: usize = 6; // magic + version needed

/// Detect the package format from a file path.
///
/// # Example
/// ```no_run
/// use docx2md::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PackageFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the package format from bytes.
///
/// # Returns
/// * `Ok(PackageFormat)` if the data starts with a zip local file header
/// * `Err(Error::UnknownFormat)` otherwise, including empty archives
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PackageFormat> {
    if data.len() < HEADER_LEN || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_needed = u16::from_le_bytes([data[4], data[5]]);
    Ok(PackageFormat { version_needed })
}

/// Check if bytes start like a zip package.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check if a file is a zip package with a main document part.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if detect_format_from_path(path).is_err() {
        return false;
    }

    let Ok(file) = File::open(path) else {
        return false;
    };
    let Ok(mut package) = DocxPackage::new(BufReader::new(file), DEFAULT_MAX_PART_SIZE) else {
        return false;
    };
    match package.main_document_part() {
        Ok(part) => package.has_part(&part),
        Err(_) => false,
    }
}
