//! PDF Tool Library
//!
//! Session logic for an interactive PDF tool. This library provides
//! functionality to:
//! - Keep an ordered, de-duplicated queue of PDFs and merge them into one
//! - Open a PDF, mark pages, and save a copy without the marked pages
//! - Describe documents and pages (page counts, sizes, title/author)
//! - Drive all of the above from a line-oriented shell
//!
//! # Example
//!
//! ```no_run
//! use pdf_tool::App;
//! use std::path::Path;
//!
//! let mut app = App::new();
//! app.add_files(["1. intro.pdf", "2. advanced.pdf"]);
//! app.merge_queue(Path::new("merged.pdf")).expect("Failed to merge PDFs");
//!
//! app.open_for_removal(Path::new("merged.pdf")).expect("Failed to open");
//! app.toggle_page(0).expect("No such page");
//! app.apply_removal(Path::new("trimmed.pdf")).expect("Failed to save");
//! ```

pub mod app;
pub mod error;
pub mod layout;
pub mod logging;
pub mod pdf;
pub mod queue;
pub mod selection;
pub mod shell;

// Re-export commonly used items
pub use app::{App, View};
pub use error::{Error, Result};
pub use queue::PdfQueue;
pub use selection::PageSelection;
