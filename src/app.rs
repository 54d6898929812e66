//! Application state and the command handlers the front end calls

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pdf::{
    merge_pdfs, remove_pages, MergeOptions, MergeSummary, RemovalSummary, RemovePagesOptions,
};
use crate::queue::PdfQueue;
use crate::selection::PageSelection;

/// Which grid the front end should be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Cards for the queued PDFs
    Queue,
    /// Page tiles of the document open for removal
    Pages,
}

/// Owns all session state
///
/// Each user action maps to one method. Methods validate their input and
/// return a result for the front end to report; none of them panic on bad
/// input and a failure never leaves the session unusable.
#[derive(Debug)]
pub struct App {
    queue: PdfQueue,
    selection: PageSelection,
    view: View,
    revision: u64,
}

impl Default for App {
    fn default() -> Self {
        Self {
            queue: PdfQueue::new(),
            selection: PageSelection::new(),
            view: View::Queue,
            revision: 0,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &PdfQueue {
        &self.queue
    }

    pub fn selection(&self) -> &PageSelection {
        &self.selection
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Changes whenever anything shown on screen may have changed
    pub fn refresh_marker(&self) -> u64 {
        self.queue.generation() + self.revision
    }

    fn show(&mut self, view: View) {
        self.view = view;
        self.revision += 1;
    }

    /// Queue files for merging; returns how many were new
    pub fn add_files<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.queue.add(paths)
    }

    pub fn remove_file(&mut self, path: &Path) -> bool {
        self.queue.remove(path)
    }

    pub fn clear_files(&mut self) {
        self.queue.clear();
    }

    /// Merge the queued files, in queue order, into `output`
    pub fn merge_queue(&mut self, output: &Path) -> Result<MergeSummary> {
        if self.queue.len() < 2 {
            log::warn!("Merge requested with {} queued file(s)", self.queue.len());
            return Err(Error::NotEnoughInputs {
                found: self.queue.len(),
            });
        }

        let options = MergeOptions {
            input_paths: self.queue.paths().to_vec(),
            output_path: output.to_path_buf(),
        };

        merge_pdfs(&options).inspect_err(|e| log::error!("{}", e))
    }

    /// Open a document for page removal; returns its page count
    pub fn open_for_removal(&mut self, path: &Path) -> Result<usize> {
        let page_count = self
            .selection
            .open(path)
            .inspect_err(|e| log::error!("{}", e))?;
        self.show(View::Pages);
        Ok(page_count)
    }

    /// Mark or unmark a page; returns true if it is now marked
    pub fn toggle_page(&mut self, index: usize) -> Result<bool> {
        let selected = self.selection.toggle(index)?;
        self.revision += 1;
        Ok(selected)
    }

    /// Write the open document without its marked pages to `output`
    ///
    /// With nothing open or nothing marked this is refused rather than
    /// silently ignored. On success the document is closed and the queue is
    /// shown again; on failure everything stays as it was so the user can
    /// try another destination.
    pub fn apply_removal(&mut self, output: &Path) -> Result<RemovalSummary> {
        let input_path = self
            .selection
            .path()
            .ok_or(Error::NoActiveDocument)?
            .to_path_buf();

        let pages_to_remove = self.selection.selected();
        if pages_to_remove.is_empty() {
            log::warn!("Page removal requested with no pages selected");
            return Err(Error::NothingSelected);
        }

        let options = RemovePagesOptions {
            input_path,
            output_path: output.to_path_buf(),
            pages_to_remove,
        };

        let summary = remove_pages(&options).inspect_err(|e| log::error!("{}", e))?;

        self.close_removal();
        Ok(summary)
    }

    /// Leave page removal and go back to the queue
    pub fn close_removal(&mut self) {
        self.selection.close();
        self.show(View::Queue);
    }
}
