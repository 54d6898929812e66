//! Removing pages from a PDF

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::pdf::io::{load_document, save_document};

/// Options for writing a copy of a PDF without some of its pages
#[derive(Debug, Clone)]
pub struct RemovePagesOptions {
    /// Source PDF
    pub input_path: PathBuf,
    /// Where the filtered copy is written
    pub output_path: PathBuf,
    /// Zero-based indices of the pages to leave out
    pub pages_to_remove: BTreeSet<usize>,
}

/// Outcome of a successful page removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalSummary {
    pub output_path: PathBuf,
    pub pages_removed: usize,
    pub pages_remaining: usize,
}

/// Write a copy of `input_path` without the pages listed in `pages_to_remove`
///
/// Remaining pages keep their original order. Indices past the end of the
/// document are ignored, and an empty set produces a plain copy. Removing
/// every page is refused with [`Error::EmptyOutput`] since a PDF without
/// pages is not a usable document.
pub fn remove_pages(options: &RemovePagesOptions) -> Result<RemovalSummary> {
    let mut doc = load_document(&options.input_path)?;

    let page_count = doc.get_pages().len();
    let doomed: Vec<u32> = options
        .pages_to_remove
        .iter()
        .filter(|&&index| index < page_count)
        .map(|&index| index as u32 + 1)
        .collect();

    if doomed.len() == page_count {
        return Err(Error::EmptyOutput(options.output_path.clone()));
    }

    if !doomed.is_empty() {
        // delete_pages takes 1-based page numbers
        doc.delete_pages(&doomed);
        doc.prune_objects();
        doc.renumber_objects();
    }

    doc.compress();
    save_document(&mut doc, &options.output_path)?;

    let summary = RemovalSummary {
        output_path: options.output_path.clone(),
        pages_removed: doomed.len(),
        pages_remaining: page_count - doomed.len(),
    };

    log::info!(
        "Removed {} of {} pages from {}, saved to {}",
        summary.pages_removed,
        page_count,
        options.input_path.display(),
        summary.output_path.display()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_from_missing_file_is_open_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output_path = temp_dir.path().join("out.pdf");

        let options = RemovePagesOptions {
            input_path: PathBuf::from("nonexistent.pdf"),
            output_path: output_path.clone(),
            pages_to_remove: BTreeSet::from([0]),
        };

        let result = remove_pages(&options);
        assert!(matches!(result, Err(Error::DocumentOpen { .. })));
        assert!(!output_path.exists());
    }
}
