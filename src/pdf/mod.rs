//! PDF manipulation module

pub mod io;
pub mod merge;
pub mod metadata;
pub mod pages;
pub mod remove;

// Re-export commonly used items
pub use io::{load_document, save_document};
pub use merge::{merge_pdfs, MergeOptions, MergeSummary};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
pub use pages::{page_summaries, PageSummary};
pub use remove::{remove_pages, RemovalSummary, RemovePagesOptions};
