//! wordtext CLI - plain-text extraction from WordprocessingML
//!
//! Prints the paragraphs of a `document.xml` part, one per line.

use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use wordtext::{ExtractOptions, TextExtractor};

/// Extract plain text from a Word document.xml part
#[derive(Parser)]
#[command(
    name = "wordtext",
    author = "iyulab",
    version,
    about = "Extract paragraph text from document.xml",
    long_about = "wordtext - plain-text extraction from WordprocessingML.\n\n\
                  Reads an unpacked word/document.xml and prints one line per paragraph.\n\
                  Extraction failures are printed in place of the text."
)]
struct Cli {
    /// Input file path
    #[arg(default_value = "document.xml")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Match the strict OOXML namespace instead of the transitional one
    #[arg(long)]
    strict: bool,
}

/// Output format
#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Paragraphs joined by newlines
    Text,
    /// Paragraph list as JSON
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = if cli.strict {
        ExtractOptions::strict()
    } else {
        ExtractOptions::default()
    };

    let content = render(&TextExtractor::with_options(options), &cli.input, &cli.format)?;
    write_output(cli.output.as_ref(), &content)
}

/// Extract `input` and render it; extraction failures become the output.
fn render(
    extractor: &TextExtractor,
    input: &Path,
    format: &OutputFormat,
) -> Result<String, serde_json::Error> {
    let result = extractor.extract_file(input);
    if let Err(ref e) = result {
        warn!(path = %input.display(), error = %e, "extraction failed");
    }

    match format {
        OutputFormat::Text => Ok(match result {
            Ok(extraction) => extractor.render(&extraction),
            Err(e) => e.to_string(),
        }),
        OutputFormat::Json => match result {
            Ok(extraction) => serde_json::to_string_pretty(&extraction),
            Err(e) => serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() })),
        },
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, format!("{}\n", content))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_document(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("document.xml");
        let xml = format!(
            r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            wordtext::wordml::W_NS,
            body
        );
        fs::write(&path, xml).unwrap();
        path
    }

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_input() {
        let cli = Cli::try_parse_from(["wordtext"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("document.xml"));
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(cli.output.is_none());
        assert!(!cli.strict);
    }

    #[test]
    fn test_render_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_document(&dir, "<w:p><w:t>A</w:t></w:p><w:p><w:t>B</w:t></w:p>");
        let out = render(&TextExtractor::new(), &path, &OutputFormat::Text).unwrap();
        assert_eq!(out, "A\nB");
    }

    #[test]
    fn test_render_failure_as_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.xml");
        let out = render(&TextExtractor::new(), &path, &OutputFormat::Text).unwrap();
        assert!(out.starts_with("I/O error:"));
    }

    #[test]
    fn test_render_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_document(&dir, "<w:p><w:t>Hello</w:t></w:p><w:p/>");
        let out = render(&TextExtractor::new(), &path, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["paragraphs"], serde_json::json!(["Hello", ""]));
    }

    #[test]
    fn test_render_failure_as_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.xml");
        let out = render(&TextExtractor::new(), &path, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["error"].as_str().unwrap().starts_with("I/O error:"));
    }

    #[test]
    fn test_write_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out.txt");
        write_output(Some(&out), "A\nB").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "A\nB\n");
    }
}
