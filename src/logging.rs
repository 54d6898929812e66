//! Logger setup for the interactive tool
//!
//! Terminal output goes to stderr so it never interleaves with the shell's
//! own output on stdout.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the terminal (stderr)
    Terminal,
    /// Write to a file, truncating it
    File(PathBuf),
    /// Write to both the terminal and a file
    Both(PathBuf),
}

impl LogDestination {
    /// Terminal only, or terminal plus file when a path was given
    pub fn from_log_file(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => LogDestination::Both(path),
            None => LogDestination::Terminal,
        }
    }
}

/// Initialize the global logger
///
/// Does nothing if a logger is already installed. A log file that can't be
/// created is reported on stderr and skipped.
pub fn initialize(level: LevelFilter, destination: LogDestination) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    match &destination {
        LogDestination::Terminal => loggers.push(terminal_logger(level, config)),
        LogDestination::File(path) => {
            if let Some(file_logger) = create_file_logger(level, config, path) {
                loggers.push(file_logger);
            }
        }
        LogDestination::Both(path) => {
            loggers.push(terminal_logger(level, config.clone()));
            if let Some(file_logger) = create_file_logger(level, config, path) {
                loggers.push(file_logger);
            }
        }
    }

    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

/// Initializes a terminal logger for use in tests
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![terminal_logger(level, Config::default())]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
