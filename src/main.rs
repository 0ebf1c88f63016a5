//! rst-outline: print the section outline of underline-titled documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgAction, Parser, ValueEnum};
use rst_outline::config::{self, Config};
use rst_outline::output::{self, OutputFormat};
use rst_outline::{input, Error};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser)]
#[command(name = "rst-outline")]
#[command(about = "Section outlines for underline-titled documents", long_about = None)]
struct Args {
    /// Files or directories to scan
    #[arg(value_name = "PATH", default_value = ".")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more to stderr (repeat for more detail)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Error> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let mut cfg = Config::load_from(&config_path)?;

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let format = match args.format {
        Some(format) => format,
        None => parse_format(&cfg.format, &config_path)?,
    };

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        warn!("no matching files found");
        return Ok(());
    }

    let mut outlines = Vec::with_capacity(documents.len());
    for doc in &documents {
        match input::extract_outline(doc) {
            Ok(outline) => outlines.push(outline),
            Err(e) => warn!("skipping {}: {e}", doc.display()),
        }
    }
    info!(
        documents = outlines.len(),
        sections = outlines.iter().map(rst_outline::Outline::len).sum::<usize>(),
        "scan complete"
    );

    print!("{}", output::render(&outlines, format)?);
    Ok(())
}

fn parse_format(name: &str, config_path: &Path) -> Result<OutputFormat, Error> {
    OutputFormat::from_str(name, true).map_err(|message| Error::Config {
        path: config_path.to_path_buf(),
        message,
    })
}
