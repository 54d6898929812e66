//! Page tree helpers shared by merging, page removal and page listings

use lopdf::{Document, Object, ObjectId};

use crate::layout::PageDimensions;

/// Page attributes a page inherits from its ancestors when it doesn't set them
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against Parent cycles in malformed files
const MAX_TREE_DEPTH: usize = 64;

/// What the page picker shows for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSummary {
    /// Zero-based page index
    pub index: usize,
    /// Displayed size (MediaBox, adjusted for rotation), if the page has one
    pub size: Option<PageDimensions>,
    /// Rotation in degrees, normalised to 0, 90, 180 or 270
    pub rotation: i64,
}

/// Page object ids in document order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// Follow a reference to the object it points at
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}

fn as_number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

/// Look up `key` on a page, walking up the Parent chain of the page tree
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }

    None
}

/// Copy inherited attributes onto the page itself
///
/// Needed before a page is moved under a new parent, otherwise it loses
/// whatever it was inheriting from the old one.
pub(crate) fn push_down_inherited_attributes(doc: &mut Document, page_id: ObjectId) {
    let missing: Vec<(&[u8], Object)> = match doc.get_dictionary(page_id) {
        Ok(page) => INHERITABLE
            .iter()
            .filter(|key| !page.has(key))
            .filter_map(|key| {
                inherited_attribute(doc, page_id, key).map(|value| (*key, value.clone()))
            })
            .collect(),
        Err(_) => return,
    };

    if let Ok(Object::Dictionary(ref mut page)) = doc.get_object_mut(page_id) {
        for (key, value) in missing {
            page.set(key.to_vec(), value);
        }
    }
}

fn media_box(doc: &Document, page_id: ObjectId) -> Option<PageDimensions> {
    let rect = match resolve(doc, inherited_attribute(doc, page_id, b"MediaBox")?) {
        Object::Array(values) => values
            .iter()
            .map(|v| as_number(resolve(doc, v)))
            .collect::<Option<Vec<f64>>>()?,
        _ => return None,
    };

    match rect.as_slice() {
        [llx, lly, urx, ury] => Some(PageDimensions::from_points(urx - llx, ury - lly)),
        _ => None,
    }
}

fn rotation(doc: &Document, page_id: ObjectId) -> i64 {
    inherited_attribute(doc, page_id, b"Rotate")
        .and_then(|value| as_number(resolve(doc, value)))
        .map(|degrees| (degrees as i64).rem_euclid(360))
        .unwrap_or(0)
}

/// Summaries for every page of `doc`, in order
pub fn page_summaries(doc: &Document) -> Vec<PageSummary> {
    page_ids(doc)
        .into_iter()
        .enumerate()
        .map(|(index, page_id)| {
            let rotation = rotation(doc, page_id);
            let size = media_box(doc, page_id).map(|size| {
                if rotation % 180 == 90 {
                    size.rotated()
                } else {
                    size
                }
            });
            PageSummary {
                index,
                size,
                rotation,
            }
        })
        .collect()
}
