//! PDF Tool
//!
//! An interactive tool for merging PDFs and removing pages.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use pdf_tool::layout::GridLayout;
use pdf_tool::logging::{self, LogDestination};
use pdf_tool::shell::{expand_globs, Shell, ShellOptions};
use pdf_tool::App;

/// PDF Tool - Merge PDFs and remove pages interactively
#[derive(Parser)]
#[command(name = "pdf-tool")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Type `help` at the prompt for the list of commands.

EXAMPLES:
    # Start with files already queued
    pdf-tool intro.pdf \"[0-9]*.pdf\"

    # Keep a debug log of the session
    pdf-tool --log-level debug --log-file pdf-tool.log")]
struct Cli {
    /// PDF files to queue at startup. Supports glob patterns like "*.pdf"
    files: Vec<String>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Number of queued files shown per row
    #[arg(long, default_value_t = 3)]
    queue_columns: usize,

    /// Number of pages shown per row
    #[arg(long, default_value_t = 4)]
    page_columns: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::initialize(cli.log_level.into(), LogDestination::from_log_file(cli.log_file));

    let mut app = App::new();
    if !cli.files.is_empty() {
        let files = expand_globs(&cli.files).context("Failed to queue startup files")?;
        app.add_files(files);
    }

    let options = ShellOptions {
        queue_grid: GridLayout::new(cli.queue_columns),
        page_grid: GridLayout::new(cli.page_columns),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(app, io::stdout(), options);
    shell
        .run(stdin.lock())
        .context("Lost connection to the terminal")?;

    Ok(())
}
