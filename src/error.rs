//! Error types for the PDF tool library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF tool library
#[derive(Error, Debug)]
pub enum Error {
    /// The input is missing, unreadable, or not a valid PDF
    #[error("Cannot open PDF {}: {source}", .path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Concatenation failed; wraps the input or output failure that caused it
    #[error("Merge failed: {0}")]
    Merge(#[source] Box<Error>),

    /// The destination file could not be written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing the selected pages would leave a document with no pages
    #[error("Cannot write {}: every page was selected for removal", .0.display())]
    EmptyOutput(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Merging needs at least two inputs
    #[error("At least two PDFs are needed to merge, got {found}")]
    NotEnoughInputs { found: usize },

    /// No document is open for page removal
    #[error("No PDF is open for page removal")]
    NoActiveDocument,

    /// Page removal was requested with an empty selection
    #[error("No pages are selected for removal")]
    NothingSelected,

    /// Page index outside the open document
    #[error("Page index {index} is out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No PDF files found matching pattern: {0}")]
    NoFilesMatched(String),

    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a failure that happened while merging
    pub(crate) fn merge(cause: Error) -> Self {
        Error::Merge(Box::new(cause))
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: lopdf::Error) -> Self {
        Error::DocumentOpen {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}
