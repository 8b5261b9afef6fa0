//! File-level conversion: single documents and parallel batches.
//!
//! # Example
//!
//! ```no_run
//! use docx2md::convert::{convert_batch, ConvertOptions};
//!
//! let inputs = vec!["a.docx", "b.docx"];
//! for item in convert_batch(&inputs, "out", &ConvertOptions::default()) {
//!     match &item.result {
//!         Ok(stats) => println!("{} ({} words)", item.output.display(), stats.word_count),
//!         Err(e) => eprintln!("{}: {}", item.input.display(), e),
//!     }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{self, ExtractionStats, RenderOptions, RenderResult};

/// Extension given to converted files.
pub const OUTPUT_EXTENSION: &str = "md";

/// Options for file conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Outcome of converting one input of a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// Source document
    pub input: PathBuf,

    /// Markdown file the input was (or would have been) written to
    pub output: PathBuf,

    /// Statistics of the written output, or why conversion failed
    pub result: Result<ExtractionStats>,
}

impl BatchItem {
    /// Check if this input converted successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Convert a document to Markdown and write it to `output`.
///
/// Nothing is written when parsing or rendering fails.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<RenderResult> {
    let input = input.as_ref();
    let output = output.as_ref();

    let result = render_file(input, options)?;
    fs::write(output, &result.content)?;
    log::info!("{} -> {}", input.display(), output.display());

    Ok(result)
}

/// Convert many documents in parallel into `output_dir`.
///
/// Each input is written to `<output_dir>/<stem>.md`. A failing input is
/// reported in its [`BatchItem`] and does not stop the others. Items are
/// returned in input order.
pub fn convert_batch<P, Q>(inputs: &[P], output_dir: Q, options: &ConvertOptions) -> Vec<BatchItem>
where
    P: AsRef<Path> + Sync,
    Q: AsRef<Path>,
{
    convert_batch_with_progress(inputs, output_dir, options, |_| {})
}

/// Like [`convert_batch`], calling `on_done` as each input finishes.
///
/// `on_done` runs on worker threads in completion order.
pub fn convert_batch_with_progress<P, Q, F>(
    inputs: &[P],
    output_dir: Q,
    options: &ConvertOptions,
    on_done: F,
) -> Vec<BatchItem>
where
    P: AsRef<Path> + Sync,
    Q: AsRef<Path>,
    F: Fn(&BatchItem) + Sync,
{
    let output_dir = output_dir.as_ref();
    if let Err(e) = fs::create_dir_all(output_dir) {
        log::warn!("cannot create {}: {}", output_dir.display(), e);
    }

    inputs
        .par_iter()
        .map(|input| {
            let item = convert_one(input.as_ref(), output_dir, options);
            on_done(&item);
            item
        })
        .collect()
}

fn convert_one(input: &Path, output_dir: &Path, options: &ConvertOptions) -> BatchItem {
    let output = output_path(input, output_dir);
    let result = match &output {
        Some(output) => convert_file(input, output, options).map(|r| r.stats),
        None => Err(Error::Other(format!(
            "cannot derive an output name from {}",
            input.display()
        ))),
    };
    if let Err(e) = &result {
        log::warn!("{}: {}", input.display(), e);
    }

    BatchItem {
        input: input.to_path_buf(),
        output: output.unwrap_or_else(|| output_dir.to_path_buf()),
        result,
    }
}

/// Convert a document to Markdown, reading and writing with `tokio::fs`.
#[cfg(feature = "async")]
pub async fn convert_file_async<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<RenderResult> {
    let data = tokio::fs::read(input.as_ref()).await?;
    let parser = DocxParser::from_bytes_with_options(&data, options.parse.clone())?;
    let document = parser.parse()?;
    let result = render::to_markdown_with_stats(&document, &options.render)?;

    tokio::fs::write(output.as_ref(), &result.content).await?;
    Ok(result)
}

/// `<output_dir>/<stem>.md` for an input path.
pub fn output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let mut name = input.file_stem()?.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Some(output_dir.join(name))
}

fn render_file(input: &Path, options: &ConvertOptions) -> Result<RenderResult> {
    let parser = DocxParser::open_with_options(input, options.parse.clone())?;
    let document = parser.parse()?;
    render::to_markdown_with_stats(&document, &options.render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let out = output_path(Path::new("docs/report.v2.docx"), Path::new("out"));
        assert_eq!(out, Some(PathBuf::from("out/report.v2.md")));
        assert_eq!(output_path(Path::new(".."), Path::new("out")), None);
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().lenient())
            .with_render_options(RenderOptions::new().with_metadata(false));

        assert_eq!(options.parse.error_mode, crate::parser::ErrorMode::Lenient);
        assert!(!options.render.include_metadata);
    }

    #[test]
    fn test_convert_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.md");

        let result = convert_file(dir.path().join("missing.docx"), &output, &ConvertOptions::new());
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!output.exists());
    }
}
