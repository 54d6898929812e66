//! Ordered, de-duplicated list of PDFs waiting to be merged

use std::path::{Path, PathBuf};

/// PDFs queued for merging, in the order they were first added
///
/// A path appears at most once. Every mutation bumps [`PdfQueue::generation`]
/// so views built from the queue can tell when they are stale.
#[derive(Debug, Default, Clone)]
pub struct PdfQueue {
    paths: Vec<PathBuf>,
    generation: u64,
}

impl PdfQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every path not already queued, preserving order
    ///
    /// Files are not checked for being readable PDFs here; that happens when
    /// they are merged. Returns the number of paths actually appended.
    pub fn add<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            let path = path.into();
            if !self.contains(&path) {
                self.paths.push(path);
                added += 1;
            }
        }
        self.touch();
        log::debug!("Queued {} new PDF(s), {} total", added, self.paths.len());
        added
    }

    /// Remove a path if present; returns whether anything was removed
    pub fn remove(&mut self, path: &Path) -> bool {
        match self.paths.iter().position(|p| p == path) {
            Some(index) => {
                self.paths.remove(index);
                self.touch();
                log::debug!("Removed {} from queue", path.display());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.touch();
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Counter bumped on every mutation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn touch(&mut self) {
        self.generation += 1;
    }
}
