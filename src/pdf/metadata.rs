//! PDF metadata extraction

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::Result;
use crate::pdf::io::load_document;

/// PDF metadata
#[derive(Debug, Clone)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

/// Read a text entry from the document Info dictionary
fn info_string(doc: &Document, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").and_then(Object::as_reference).ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let bytes = info.get(key).and_then(Object::as_str).ok()?;

    String::from_utf8(bytes.to_vec())
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Extract metadata from a PDF file
pub fn extract_metadata(path: &Path) -> Result<PdfMetadata> {
    let doc = load_document(path)?;

    Ok(PdfMetadata {
        page_count: doc.get_pages().len(),
        title: info_string(&doc, b"Title"),
        author: info_string(&doc, b"Author"),
    })
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    let doc = load_document(path)?;
    Ok(doc.get_pages().len())
}
