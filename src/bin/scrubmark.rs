//! Scrub watermark characters from text, the clipboard, or files.
//!
//! Usage:
//!   scrubmark scan "some text"
//!   scrubmark strip < in.txt > out.txt
//!   scrubmark clipboard
//!   scrubmark file notes.txt

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrubmark::{ScrubError, WatermarkCatalog, clipboard, files, report, scanner};
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "scrubmark")]
#[command(about = "Detect and strip invisible Unicode watermark characters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report which watermark characters a text contains.
    Scan {
        /// Text to scan; reads stdin when omitted.
        text: Option<String>,
        /// Also report characters that only match the catalog ranges.
        #[arg(long)]
        all: bool,
        /// Emit the findings as a JSON array instead of report lines.
        #[arg(long)]
        json: bool,
        /// Print the text with occurrences and their neighbors highlighted.
        #[arg(long)]
        mark: bool,
    },
    /// Print the text with all watermark characters removed.
    Strip {
        /// Text to strip; reads stdin when omitted.
        text: Option<String>,
        /// Also place the result on the system clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Strip the clipboard in place and report what was removed.
    Clipboard,
    /// Strip a .txt or .json document in place and report what was removed.
    File {
        /// Path to the document.
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = WatermarkCatalog::global();

    match cli.command {
        Command::Scan {
            text,
            all,
            json,
            mark,
        } => run_scan(catalog, text, all, json, mark),
        Command::Strip { text, copy } => run_strip(catalog, text, copy),
        Command::Clipboard => run_clipboard(catalog),
        Command::File { path } => run_file(catalog, &path),
    }
}

/// Argument text when given, otherwise the whole of stdin. An empty buffer
/// is reported, never processed.
fn read_input(text: Option<String>) -> Result<String> {
    let buffer = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    if buffer.is_empty() {
        return Err(ScrubError::EmptySource.into());
    }
    Ok(buffer)
}

fn run_scan(
    catalog: &WatermarkCatalog,
    text: Option<String>,
    all: bool,
    json: bool,
    mark: bool,
) -> Result<()> {
    let text = read_input(text)?;
    let findings = if all {
        scanner::detect_all(catalog, &text)
    } else {
        scanner::detect(catalog, &text)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        println!("{}", report::render_report(&findings));
    }

    if mark {
        let positions = scanner::highlight_positions(catalog, &text);
        println!("{}", report::render_marked(&text, &positions));
    }
    Ok(())
}

fn run_strip(catalog: &WatermarkCatalog, text: Option<String>, copy: bool) -> Result<()> {
    let text = read_input(text)?;
    let cleaned = scanner::strip(catalog, &text);
    print!("{cleaned}");
    if copy {
        clipboard::copy_to_clipboard(&cleaned).context("copying result to clipboard")?;
    }
    Ok(())
}

fn run_clipboard(catalog: &WatermarkCatalog) -> Result<()> {
    let findings = clipboard::scrub_clipboard(catalog).context("scrubbing clipboard")?;
    if findings.is_empty() {
        println!("Clipboard scrubbed. No watermark characters found.");
    } else {
        println!("Clipboard scrubbed. Removed characters:");
        for finding in &findings {
            println!("{}", report::finding_line(finding));
        }
    }
    Ok(())
}

fn run_file(catalog: &WatermarkCatalog, path: &Path) -> Result<()> {
    let findings = files::scrub_file(catalog, path)
        .with_context(|| format!("scrubbing {}", path.display()))?;
    if findings.is_empty() {
        println!("Scrubbed {}. No watermark characters found.", path.display());
    } else {
        println!("Scrubbed {}. Removed characters:", path.display());
        for finding in &findings {
            println!("{}", report::finding_line(finding));
        }
    }
    Ok(())
}
