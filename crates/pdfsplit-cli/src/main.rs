//! pdfsplit command-line interface.
//!
//! ```text
//! pdfsplit <INPUT_DIR> <OUTPUT_DIR> <THREAD_COUNT> [--config FILE] [--format text|json] [-v|-q]
//! ```
//!
//! Exits with 1 on usage errors, an invalid configuration, or an input
//! directory that does not exist. Documents that fail to open are logged and
//! listed in the summary but do not change the exit code.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use pdfsplit::pdf::LopdfBackend;
use pdfsplit::{DirectoryReport, SplitConfig, process_directory};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Summary format written to stdout after the run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per document
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "pdfsplit", version)]
#[command(about = "Split every PDF in a directory into per-page text files", long_about = None)]
struct Cli {
    /// Directory containing the PDF documents
    input_dir: PathBuf,

    /// Directory receiving <document>/<page>/text_layer.txt (created if missing)
    output_dir: PathBuf,

    /// Number of extraction worker threads per document
    thread_count: usize,

    /// Configuration file (defaults to the nearest pdfsplit.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the error path but are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.thread_count)?;
    let backend = LopdfBackend::with_passwords(config.passwords.clone());

    let report = process_directory(&backend, &cli.input_dir, &cli.output_dir, &config)
        .with_context(|| format!("Failed to process {}", cli.input_dir.display()))?;

    print_report(&report, cli.format)
}

/// Load the configuration file, then let the positional thread count win.
fn resolve_config(path: Option<&Path>, thread_count: usize) -> Result<SplitConfig> {
    let mut config = match path {
        Some(path) => SplitConfig::from_toml_file(path)?,
        None => SplitConfig::discover()
            .context("Failed to load discovered configuration")?
            .unwrap_or_default(),
    };
    config.thread_count = thread_count;
    config.validate()?;
    Ok(config)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_report(report: &DirectoryReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for doc in &report.documents {
                if doc.opened {
                    println!(
                        "{}: {}/{} pages written ({} skipped, {} write failures)",
                        doc.document_name, doc.pages_written, doc.page_count, doc.pages_skipped, doc.write_failures
                    );
                } else {
                    println!("{}: failed to open", doc.document_name);
                }
            }
            println!(
                "{} document(s), {} failed to open, {} page(s) written",
                report.documents.len(),
                report.failed_documents(),
                report.pages_written()
            );
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "documents": report.documents,
                "failed_documents": report.failed_documents(),
                "pages_written": report.pages_written(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
            );
        }
    }
    Ok(())
}
