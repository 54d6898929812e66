//! Page selection for the document open for page removal

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pdf::{load_document, page_summaries, PageSummary};

/// The document currently open for page removal
#[derive(Debug, Clone)]
struct RemovalTarget {
    path: PathBuf,
    pages: Vec<PageSummary>,
    selected: BTreeSet<usize>,
}

/// Tracks which pages of the open document are marked for removal
///
/// Only page summaries are kept; the document itself is loaded for the
/// duration of [`PageSelection::open`] and dropped before it returns.
#[derive(Debug, Default, Clone)]
pub struct PageSelection {
    target: Option<RemovalTarget>,
}

impl PageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` for page removal and return its page count
    ///
    /// Any previous target and its selection are replaced. If the file can't
    /// be opened the previous state is left as it was.
    pub fn open(&mut self, path: &Path) -> Result<usize> {
        let pages = {
            let doc = load_document(path)?;
            page_summaries(&doc)
        };
        let page_count = pages.len();

        self.target = Some(RemovalTarget {
            path: path.to_path_buf(),
            pages,
            selected: BTreeSet::new(),
        });

        log::debug!("Opened {} for page removal ({} pages)", path.display(), page_count);
        Ok(page_count)
    }

    /// Flip whether page `index` is marked; returns true if it is now marked
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let target = self.target.as_mut().ok_or(Error::NoActiveDocument)?;

        let page_count = target.pages.len();
        if index >= page_count {
            return Err(Error::PageOutOfRange { index, page_count });
        }

        if target.selected.remove(&index) {
            Ok(false)
        } else {
            target.selected.insert(index);
            Ok(true)
        }
    }

    /// Forget the open document and its selection
    pub fn close(&mut self) {
        if let Some(target) = self.target.take() {
            log::debug!("Closed {}", target.path.display());
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.target.as_ref().map(|t| t.path.as_path())
    }

    /// Page count of the open document, 0 when nothing is open
    pub fn page_count(&self) -> usize {
        self.target.as_ref().map_or(0, |t| t.pages.len())
    }

    pub fn pages(&self) -> &[PageSummary] {
        self.target
            .as_ref()
            .map(|t| t.pages.as_slice())
            .unwrap_or(&[])
    }

    /// Marked page indices, ascending
    pub fn selected(&self) -> BTreeSet<usize> {
        self.target
            .as_ref()
            .map(|t| t.selected.clone())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.target
            .as_ref()
            .is_some_and(|t| t.selected.contains(&index))
    }
}
