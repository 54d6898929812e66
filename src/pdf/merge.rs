//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::pdf::io::{load_document, save_document};
use crate::pdf::pages::{page_ids, push_down_inherited_attributes};

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Outcome of a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub output_path: PathBuf,
    pub documents: usize,
    pub pages: usize,
}

/// Merge multiple PDF files into a single PDF
///
/// Pages appear in input order, each document's pages in their own order.
/// At least two inputs are required; with fewer nothing is read or written.
/// Any other failure is reported as [`Error::Merge`] wrapping the cause, and
/// no file is left at the output path.
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// # Example
///
/// ```no_run
/// use pdf_tool::pdf::{MergeOptions, merge_pdfs};
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     input_paths: vec![
///         PathBuf::from("1. first.pdf"),
///         PathBuf::from("2. second.pdf"),
///     ],
///     output_path: PathBuf::from("merged.pdf"),
/// };
///
/// merge_pdfs(&options).expect("Failed to merge");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<MergeSummary> {
    if options.input_paths.len() < 2 {
        return Err(Error::NotEnoughInputs {
            found: options.input_paths.len(),
        });
    }

    let mut merged = build_merged_document(&options.input_paths).map_err(Error::merge)?;
    let pages = merged.get_pages().len();

    merged.compress();
    save_document(&mut merged, &options.output_path).map_err(Error::merge)?;

    log::info!(
        "Merged {} PDFs ({} pages) into {}",
        options.input_paths.len(),
        pages,
        options.output_path.display()
    );

    Ok(MergeSummary {
        output_path: options.output_path.clone(),
        documents: options.input_paths.len(),
        pages,
    })
}

/// Load every input and stitch their pages under one new page tree
fn build_merged_document(input_paths: &[PathBuf]) -> Result<Document> {
    let mut documents: Vec<Document> = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        documents.push(load_input(path)?);
    }

    // Define a starting max_id for merged document
    let mut max_id = 1;
    let mut all_pages: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        // Renumber objects in this document to avoid conflicts
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let pages = page_ids(&doc);

        // Pages are about to get a new parent
        for &page_id in &pages {
            push_down_inherited_attributes(&mut doc, page_id);
        }

        all_pages.extend(pages);
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);

    // new_object_id() must hand out ids above everything copied in
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = all_pages.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(all_pages.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged.objects.insert(pages_id, Object::Dictionary(pages_object));
    merged.trailer.set("Root", Object::Reference(catalog_id));

    for &page_id in &all_pages {
        if let Ok(Object::Dictionary(ref mut dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    // Old catalogs and page tree nodes are no longer reachable
    merged.prune_objects();

    Ok(merged)
}

fn load_input(path: &Path) -> Result<Document> {
    let doc = load_document(path)?;

    if doc.get_pages().is_empty() {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(doc)
}
