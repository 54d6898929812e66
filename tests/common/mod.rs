//! Shared helpers for integration tests
//!
//! Test PDFs are generated on the fly. Every page draws a marker string such
//! as `A-2` (document label, zero-based page index) so tests can check which
//! source page ended up where.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tempfile::TempDir;

/// Write a PDF with `pages` pages labelled `label` to `dir/name`
pub fn write_pdf(dir: &Path, name: &str, label: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::new();
    for index in 0..pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(marker(label, index))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    // MediaBox and Resources live on the page tree node, pages inherit them
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to save test PDF");
    path
}

pub fn marker(label: &str, index: usize) -> String {
    format!("{}-{}", label, index)
}

/// Markers of every page of the PDF at `path`, in page order
pub fn page_markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load PDF");
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let content = doc
                .get_page_content(page_id)
                .expect("Failed to read page content");
            extract_marker(&content)
        })
        .collect()
}

fn extract_marker(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    let start = text.find('(').expect("No string in page content") + 1;
    let end = text[start..].find(')').expect("Unterminated string") + start;
    text[start..end].to_string()
}

/// Markers for `indices` of a document labelled `label`
pub fn markers(label: &str, indices: impl IntoIterator<Item = usize>) -> Vec<String> {
    indices.into_iter().map(|i| marker(label, i)).collect()
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Files in `dir`, to check nothing was left behind
pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Bad directory entry").path())
        .collect();
    entries.sort();
    entries
}
