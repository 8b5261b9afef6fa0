//! Error types for docx2md library.

use std::io;
use thiserror::Error;

/// Result type alias for docx2md operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a zip package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The zip container could not be read.
    #[error("Package error: {0}")]
    Zip(String),

    /// A package part is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// A package part is XML but does not have the expected structure.
    #[error("Invalid part {part}: {reason}")]
    InvalidPart {
        /// Part name inside the package
        part: String,
        /// What was wrong with it
        reason: String,
    },

    /// A package part exceeds the configured size limit.
    #[error("Part {part} is too large ({size} bytes, limit {limit})")]
    PartTooLarge {
        /// Part name inside the package
        part: String,
        /// Uncompressed size of the part
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
