//! docx2txt CLI - plain text extraction from Word documents
//!
//! Writes the paragraphs of a .docx file, one per line, to a text file.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Extract plain text from a Word document
#[derive(Parser)]
#[command(
    name = "docx2txt",
    author = "iyulab",
    version,
    about = "Extract plain text from Word (.docx) documents",
    long_about = "docx2txt - Word document text extraction.\n\n\
                  Reads the paragraphs of a .docx file and writes them as UTF-8 text,\n\
                  one paragraph per line."
)]
struct Cli {
    /// Input .docx file
    input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = docx2txt::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the text to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !run(&cli) {
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "docx2txt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the extraction, reporting the outcome on the console.
fn run(cli: &Cli) -> bool {
    let pb = create_spinner("Extracting text...");

    if cli.stdout {
        let result = docx2txt::extract_text(&cli.input);
        pb.finish_and_clear();

        let printed = result.and_then(|text| {
            print_text(&mut io::stdout().lock(), &text).map_err(docx2txt::Error::from)
        });

        return match printed {
            Ok(()) => true,
            Err(e) => {
                report_error(&e);
                false
            }
        };
    }

    let report = docx2txt::convert(&cli.input, &cli.output);
    pb.finish_and_clear();

    match report.error() {
        None => {
            println!(
                "{} Successfully wrote content to {}",
                "✓".green().bold(),
                report.output().display()
            );
            true
        }
        Some(e) => {
            report_error(e);
            false
        }
    }
}

fn report_error(e: &docx2txt::Error) {
    eprintln!(
        "{}: {}: {}",
        "Error".red().bold(),
        e.kind().name().bold(),
        e
    );
}

/// Write the text exactly as the output file would hold it.
fn print_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
