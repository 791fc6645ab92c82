//! mdwc: per-section word counts for markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdwc::report::{self, FileReport};
use mdwc::{config, document, input};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdwc")]
#[command(about = "Per-section word counts for markdown documents", long_about = None)]
struct Args {
    /// Files or directories to count (reads stdin if none are given)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Only report document totals
    #[arg(long)]
    total: bool,

    /// Load configuration from this file instead of mdwc.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let reports = if args.paths.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        vec![FileReport::new("<stdin>", document::analyse(&text))]
    } else {
        collect_reports(&args.paths, &cfg)?
    };

    if reports.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if args.json {
        println!("{}", report::render_json(&reports)?);
    } else {
        for file_report in &reports {
            print!("{}", report::render_text(file_report, &cfg, args.total));
        }
    }

    Ok(())
}

fn collect_reports(paths: &[PathBuf], cfg: &config::Config) -> io::Result<Vec<FileReport>> {
    let documents = input::find_documents(paths, &cfg.file_extensions)?;
    info!("Counting {} documents", documents.len());

    let mut reports = Vec::with_capacity(documents.len());
    for path in &documents {
        match input::read_document(path) {
            Ok(text) => {
                reports.push(FileReport::new(
                    path.display().to_string(),
                    document::analyse(&text),
                ));
            }
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
            }
        }
    }
    Ok(reports)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
