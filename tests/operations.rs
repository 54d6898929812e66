//! Integration tests for merging and page removal

mod common;

use std::collections::BTreeSet;

use common::{dir_entries, marker, markers, page_markers, temp_dir, write_pdf};
use lopdf::Document;
use pdf_tool::pdf::{
    count_pages, extract_metadata, merge_pdfs, page_summaries, remove_pages, MergeOptions,
    RemovePagesOptions,
};
use pdf_tool::Error;
use rstest::rstest;

#[test]
fn test_merge_concatenates_in_queue_order() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "A.pdf", "A", 2);
    let b = write_pdf(dir.path(), "B.pdf", "B", 1);
    let c = write_pdf(dir.path(), "C.pdf", "C", 3);
    let output_path = dir.path().join("merged.pdf");

    let options = MergeOptions {
        input_paths: vec![a, b, c],
        output_path: output_path.clone(),
    };

    let summary = merge_pdfs(&options).expect("Failed to merge PDFs");
    assert_eq!(summary.documents, 3);
    assert_eq!(summary.pages, 6);

    let mut expected = markers("A", 0..2);
    expected.extend(markers("B", 0..1));
    expected.extend(markers("C", 0..3));
    assert_eq!(page_markers(&output_path), expected);
}

#[test]
fn test_merge_keeps_inherited_page_size() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "A.pdf", "A", 1);
    let b = write_pdf(dir.path(), "B.pdf", "B", 1);
    let output_path = dir.path().join("merged.pdf");

    merge_pdfs(&MergeOptions {
        input_paths: vec![a, b],
        output_path: output_path.clone(),
    })
    .expect("Failed to merge PDFs");

    let doc = Document::load(&output_path).expect("Failed to load merged PDF");
    for page in page_summaries(&doc) {
        let size = page.size.expect("merged page lost its MediaBox");
        assert_eq!(size.paper_name(), Some("Letter"));
    }
}

#[test]
fn test_merge_same_file_twice() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "A.pdf", "A", 2);
    let output_path = dir.path().join("twice.pdf");

    merge_pdfs(&MergeOptions {
        input_paths: vec![a.clone(), a],
        output_path: output_path.clone(),
    })
    .expect("Failed to merge PDFs");

    let mut expected = markers("A", 0..2);
    expected.extend(markers("A", 0..2));
    assert_eq!(page_markers(&output_path), expected);
}

#[test]
fn test_merge_with_unreadable_input_writes_nothing() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "A.pdf", "A", 1);
    let broken = dir.path().join("broken.pdf");
    std::fs::write(&broken, b"%PDF-1.5\nnot really").unwrap();
    let output_path = dir.path().join("merged.pdf");

    let before = dir_entries(dir.path());
    let result = merge_pdfs(&MergeOptions {
        input_paths: vec![a, broken],
        output_path: output_path.clone(),
    });

    match result {
        Err(Error::Merge(cause)) => {
            assert!(
                matches!(*cause, Error::DocumentOpen { .. } | Error::EmptyPdf(_)),
                "unexpected cause: {}",
                cause
            )
        }
        other => panic!("expected a merge error, got {:?}", other),
    }
    assert!(!output_path.exists());
    assert_eq!(dir_entries(dir.path()), before);
}

#[test]
fn test_merge_into_missing_directory_wraps_write_error() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "A.pdf", "A", 1);
    let b = write_pdf(dir.path(), "B.pdf", "B", 1);
    let output_path = dir.path().join("missing").join("merged.pdf");

    let result = merge_pdfs(&MergeOptions {
        input_paths: vec![a, b],
        output_path: output_path.clone(),
    });

    match result {
        Err(Error::Merge(cause)) => assert!(matches!(*cause, Error::Write { .. })),
        other => panic!("expected a merge error, got {:?}", other),
    }
    assert!(!output_path.exists());
}

#[test]
fn test_merge_empty_input_list() {
    let dir = temp_dir();
    let output_path = dir.path().join("empty.pdf");

    let result = merge_pdfs(&MergeOptions {
        input_paths: vec![],
        output_path: output_path.clone(),
    });

    assert!(matches!(result, Err(Error::NotEnoughInputs { found: 0 })));
    assert!(!output_path.exists());
}

#[test]
fn test_remove_nothing_is_a_copy() {
    let dir = temp_dir();
    let input = write_pdf(dir.path(), "doc.pdf", "D", 4);
    let output_path = dir.path().join("copy.pdf");

    let summary = remove_pages(&RemovePagesOptions {
        input_path: input.clone(),
        output_path: output_path.clone(),
        pages_to_remove: BTreeSet::new(),
    })
    .expect("Failed to copy PDF");

    assert_eq!(summary.pages_removed, 0);
    assert_eq!(summary.pages_remaining, 4);
    assert_eq!(page_markers(&output_path), page_markers(&input));
}

#[test]
fn test_remove_every_page_is_refused() {
    let dir = temp_dir();
    let input = write_pdf(dir.path(), "doc.pdf", "D", 3);
    let output_path = dir.path().join("empty.pdf");

    let result = remove_pages(&RemovePagesOptions {
        input_path: input,
        output_path: output_path.clone(),
        pages_to_remove: BTreeSet::from([0, 1, 2]),
    });

    assert!(matches!(result, Err(Error::EmptyOutput(_))));
    assert!(!output_path.exists());
}

#[rstest]
#[case(vec![1, 3], vec![0, 2, 4])]
#[case(vec![0], vec![1, 2, 3, 4])]
#[case(vec![4], vec![0, 1, 2, 3])]
#[case(vec![0, 1, 2, 3], vec![4])]
#[case(vec![2, 9, 42], vec![0, 1, 3, 4])]
fn test_remove_keeps_remaining_pages_in_order(
    #[case] remove: Vec<usize>,
    #[case] kept: Vec<usize>,
) {
    let dir = temp_dir();
    let input = write_pdf(dir.path(), "doc.pdf", "D", 5);
    let output_path = dir.path().join("out.pdf");

    let summary = remove_pages(&RemovePagesOptions {
        input_path: input,
        output_path: output_path.clone(),
        pages_to_remove: remove.into_iter().collect(),
    })
    .expect("Failed to remove pages");

    assert_eq!(summary.pages_remaining, kept.len());
    assert_eq!(summary.pages_removed, 5 - kept.len());
    assert_eq!(count_pages(&output_path).unwrap(), kept.len());
    assert_eq!(page_markers(&output_path), markers("D", kept));
}

#[test]
fn test_remove_can_overwrite_its_input() {
    let dir = temp_dir();
    let input = write_pdf(dir.path(), "doc.pdf", "D", 3);

    remove_pages(&RemovePagesOptions {
        input_path: input.clone(),
        output_path: input.clone(),
        pages_to_remove: BTreeSet::from([1]),
    })
    .expect("Failed to remove pages in place");

    assert_eq!(page_markers(&input), vec![marker("D", 0), marker("D", 2)]);
    assert_eq!(dir_entries(dir.path()), vec![input]);
}

#[test]
fn test_extract_metadata_counts_pages() {
    let dir = temp_dir();
    let input = write_pdf(dir.path(), "doc.pdf", "D", 7);

    let metadata = extract_metadata(&input).expect("Failed to read metadata");
    assert_eq!(metadata.page_count, 7);
    assert_eq!(metadata.title, None);
}

#[test]
fn test_remove_from_garbage_file() {
    let dir = temp_dir();
    let input = dir.path().join("notes.pdf");
    std::fs::write(&input, b"just text").unwrap();

    let result = remove_pages(&RemovePagesOptions {
        input_path: input,
        output_path: dir.path().join("out.pdf"),
        pages_to_remove: BTreeSet::from([0]),
    });

    assert!(matches!(result, Err(Error::DocumentOpen { .. })));
}
