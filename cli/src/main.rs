//! docx2md CLI - Word document to Markdown converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docx2md::{
    convert_batch_with_progress, convert_file, parse_file_with_options, ConvertOptions,
    JsonFormat, Metadata, ParseOptions, RenderOptions, TableShape,
};

#[derive(Parser)]
#[command(name = "docx2md")]
#[command(version)]
#[command(about = "Convert Word documents to Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output Markdown file (defaults to the input with a .md extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Paragraph style rendered as a checklist item
        #[arg(long, value_name = "STYLE", default_value = docx2md::render::DEFAULT_CHECKLIST_STYLE)]
        checklist_style: String,

        /// Omit the document metadata block
        #[arg(long)]
        no_metadata: bool,

        /// Pad short table rows to the header width
        #[arg(long)]
        pad_tables: bool,

        /// Fail on unreadable document properties instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print metadata and statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert several DOCX files into a directory
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Omit the document metadata block
        #[arg(long)]
        no_metadata: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Markdown {
            input,
            output,
            checklist_style,
            no_metadata,
            pad_tables,
            strict,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            checklist_style,
            no_metadata,
            pad_tables,
            strict,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Batch {
            inputs,
            output,
            no_metadata,
        }) => cmd_batch(&inputs, &output, no_metadata),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: docx2md <FILE> [OUTPUT]".yellow());
                println!("       docx2md --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("md"));

    let options = ConvertOptions::new().with_parse_options(ParseOptions::new().lenient());
    convert_file(input, &output, &options)?;
    println!("{} {}", "Conversion complete:".green(), output.display());

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    checklist_style: String,
    no_metadata: bool,
    pad_tables: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if strict {
        ParseOptions::new()
    } else {
        ParseOptions::new().lenient()
    };
    let doc = parse_file_with_options(input, options.with_metadata(!no_metadata))?;

    let shape = if pad_tables {
        TableShape::Pad
    } else {
        TableShape::AsIs
    };
    let render_options = RenderOptions::new()
        .with_checklist_style(checklist_style)
        .with_metadata(!no_metadata)
        .with_table_shape(shape);

    let markdown = docx2md::render::to_markdown(&doc, &render_options)?;
    write_output(output, &markdown)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, ParseOptions::new().lenient())?;
    let text = docx2md::render::to_text(&doc)?;
    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = docx2md::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docx2md::render::to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = docx2md::detect_format_from_path(input)?;
    let options = ParseOptions::new().lenient();
    let doc = parse_file_with_options(input, options)?;
    let result = docx2md::render::to_markdown_with_stats(&doc, &RenderOptions::default())?;

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "format": format.to_string(),
            "metadata": result.metadata,
            "stats": result.stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    match doc.metadata {
        Some(ref metadata) => {
            for (label, value) in metadata_fields(metadata) {
                println!("{}: {}", label.bold(), value);
            }
        }
        None => println!("{}: {}", "Metadata".bold(), "none".dimmed()),
    }

    let stats = &result.stats;
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Checklist items".bold(), stats.checklist_item_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Section breaks".bold(), stats.section_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

/// Metadata fields worth printing, skipping absent and empty values.
fn metadata_fields(metadata: &Metadata) -> Vec<(&'static str, String)> {
    let text_fields = [
        ("Title", &metadata.title),
        ("Subject", &metadata.subject),
        ("Author", &metadata.author),
        ("Keywords", &metadata.keywords),
        ("Last modified by", &metadata.last_modified_by),
    ];

    let mut fields: Vec<(&'static str, String)> = text_fields
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| (label, s.to_string()))
        })
        .collect();

    if let Some(created) = metadata.created {
        fields.push(("Created", created.to_string()));
    }
    if let Some(modified) = metadata.modified {
        fields.push(("Modified", modified.to_string()));
    }
    fields
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    no_metadata: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_parse_options(ParseOptions::new().lenient())
        .with_render_options(RenderOptions::new().with_metadata(!no_metadata));

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let items = convert_batch_with_progress(inputs, output_dir, &options, |item| {
        pb.set_message(item.input.display().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let mut failed = 0;
    for item in &items {
        match &item.result {
            Ok(_) => println!("{} {}", "✓".green(), item.output.display()),
            Err(e) => {
                failed += 1;
                println!("{} {}: {}", "✗".red(), item.input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} converted, {} failed",
        "Done!".green().bold(),
        items.len() - failed,
        failed
    );

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, items.len()).into());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docx2md".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document to Markdown converter");
    println!();
    println!("License: MIT");
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_markdown_alias() {
        let cli = Cli::try_parse_from(["docx2md", "md", "in.docx", "--pad-tables", "--no-metadata"])
            .unwrap();
        match cli.command {
            Some(Commands::Markdown {
                input,
                checklist_style,
                no_metadata,
                pad_tables,
                strict,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("in.docx"));
                assert_eq!(checklist_style, "ChecklistItem");
                assert!(no_metadata);
                assert!(pad_tables);
                assert!(!strict);
            }
            _ => panic!("expected markdown command"),
        }
    }

    #[test]
    fn test_parse_default_conversion() {
        let cli = Cli::try_parse_from(["docx2md", "report.docx"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("report.docx")));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_batch_requires_inputs() {
        assert!(Cli::try_parse_from(["docx2md", "batch", "-o", "out"]).is_err());
    }

    #[test]
    fn test_metadata_fields_skip_empty_values() {
        let metadata = Metadata::new()
            .with_title("")
            .with_subject("Budget")
            .with_author("");

        assert_eq!(metadata_fields(&metadata), vec![("Subject", "Budget".to_string())]);
        assert!(metadata_fields(&Metadata::new()).is_empty());
    }

    #[test]
    fn test_convert_invalid_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.docx");
        fs::write(&input, "plain text").unwrap();

        assert!(cmd_convert(&input, None).is_err());
        assert!(!dir.path().join("notes.md").exists());
    }
}
