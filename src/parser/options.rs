//! Parsing options and configuration.

/// Default uncompressed size limit for a single package part (256 MiB).
pub const DEFAULT_MAX_PART_SIZE: u64 = 256 * 1024 * 1024;

/// Options for parsing DOCX packages.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether to read the core properties part into `Document::metadata`
    pub read_metadata: bool,

    /// Maximum uncompressed size of any part read from the package
    pub max_part_size: u64,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (recover from malformed optional parts).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable reading package metadata.
    pub fn with_metadata(mut self, read: bool) -> Self {
        self.read_metadata = read;
        self
    }

    /// Set the per-part size limit in bytes.
    pub fn with_max_part_size(mut self, bytes: u64) -> Self {
        self.max_part_size = bytes;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            read_metadata: true,
            max_part_size: DEFAULT_MAX_PART_SIZE,
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Treat malformed optional parts as absent and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .with_metadata(false)
            .with_max_part_size(1024);

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.read_metadata);
        assert_eq!(options.max_part_size, 1024);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.read_metadata);
        assert_eq!(options.max_part_size, DEFAULT_MAX_PART_SIZE);
    }
}
