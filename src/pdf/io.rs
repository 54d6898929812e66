//! Loading source documents and writing results
//!
//! Outputs are written to a temporary file next to the destination and
//! renamed into place only once the whole document has been saved, so a
//! failed save never leaves a truncated PDF behind.

use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Load a PDF, reporting failures as [`Error::DocumentOpen`]
pub fn load_document(path: &Path) -> Result<Document> {
    let doc = Document::load(path).map_err(|e| Error::open(path, e))?;
    log::debug!("Loaded {} ({} objects)", path.display(), doc.objects.len());
    Ok(doc)
}

/// Save `doc` to `path` atomically
///
/// The temporary file is owned by a [`NamedTempFile`] and deleted when it is
/// dropped, so every early return below cleans up after itself.
pub fn save_document(doc: &mut Document, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::write(path, e))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        doc.save_to(&mut writer)
            .map_err(|e| Error::write(path, std::io::Error::other(e)))?;
        writer.flush().map_err(|e| Error::write(path, e))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| Error::write(path, e))?;
    temp.persist(path).map_err(|e| Error::write(path, e.error))?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
