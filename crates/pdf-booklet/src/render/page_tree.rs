//! Page tree access and construction
//!
//! Pages are addressed by their position in `Document::get_pages()`, which
//! walks the tree in reading order.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{BookletError, Rect, Result, Rotation};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Guard against malformed trees whose Parent pointers loop
const MAX_TREE_DEPTH: usize = 64;

/// Object IDs of all pages, in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Object ID of the root `Pages` node
pub fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_dictionary(catalog_id)?;
    Ok(catalog.get(b"Pages")?.as_reference()?)
}

/// Append a page dictionary as the last page of the document.
///
/// The page becomes the last kid of the root `Pages` node; the node's
/// `Count` grows by one.
pub fn append_page(doc: &mut Document, mut page_dict: Dictionary) -> Result<ObjectId> {
    let pages_id = root_pages_id(doc)?;
    page_dict.set("Parent", Object::Reference(pages_id));
    let page_id = doc.add_object(page_dict);

    let pages_dict = doc.get_dictionary_mut(pages_id)?;
    let count = pages_dict
        .get(b"Count")
        .and_then(|obj| obj.as_i64())
        .unwrap_or(0);
    match pages_dict.get_mut(b"Kids") {
        Ok(Object::Array(kids)) => kids.push(Object::Reference(page_id)),
        _ => {
            return Err(BookletError::PageTree(
                "Pages Kids array not found".to_string(),
            ));
        }
    }
    pages_dict.set("Count", Object::Integer(count + 1));

    Ok(page_id)
}

/// Create pages tree and catalog, finalize document structure
pub fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

/// Look up a page attribute, following `Parent` links for inheritable keys
/// such as `MediaBox` and `Resources`.
pub fn inherited_attribute<'d>(
    doc: &'d Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'d Object>> {
    let mut node = doc.get_dictionary(page_id)?;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Ok(Some(value));
        }
        match node.get(b"Parent").and_then(|obj| obj.as_reference()) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }
    Err(BookletError::PageTree(format!(
        "Parent chain of page {:?} is deeper than {}",
        page_id, MAX_TREE_DEPTH
    )))
}

/// Get the page's MediaBox in points, defaulting to A4 when it is missing
pub fn page_media_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    Ok(inherited_box(doc, page_id, b"MediaBox")?.unwrap_or_else(default_page_box))
}

/// Visible area of the page: its CropBox clipped to the MediaBox, or the
/// MediaBox itself when there is no usable CropBox
pub fn page_crop_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    let media_box = page_media_box(doc, page_id)?;
    Ok(inherited_box(doc, page_id, b"CropBox")?
        .and_then(|crop_box| crop_box.intersection(&media_box))
        .unwrap_or(media_box))
}

/// Clockwise rotation the page is displayed with (`/Rotate`)
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> Result<Rotation> {
    let degrees = match inherited_attribute(doc, page_id, b"Rotate")? {
        Some(Object::Reference(id)) => doc.get_object(*id)?.as_i64().ok(),
        Some(obj) => obj.as_i64().ok(),
        None => None,
    };
    Ok(degrees.map_or(Rotation::None, Rotation::from_degrees))
}

/// Read an inheritable rectangle attribute such as `MediaBox` or `CropBox`
fn inherited_box(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Rect>> {
    let array = match inherited_attribute(doc, page_id, key)? {
        Some(Object::Reference(id)) => doc.get_object(*id)?.as_array().ok(),
        Some(obj) => obj.as_array().ok(),
        None => None,
    };

    let coords: Option<Vec<f32>> = array
        .filter(|arr| arr.len() == 4)
        .map(|arr| arr.iter().filter_map(extract_number).collect());

    Ok(match coords.as_deref() {
        Some(&[x0, y0, x1, y1]) => Some(Rect::new(
            x0.min(x1),
            y0.min(y1),
            (x1 - x0).abs(),
            (y1 - y0).abs(),
        )),
        _ => None,
    })
}

fn default_page_box() -> Rect {
    Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1)
}

/// MediaBox object for a rectangle
pub fn media_box_object(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_inherited_box() -> (Document, ObjectId) {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
        ]));
        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(vec![Object::Reference(page_id)])),
            ("Count", Object::Integer(1)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(300),
                    Object::Real(400.0),
                ]),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", catalog_id);
        (doc, page_id)
    }

    #[test]
    fn test_media_box_inherited_from_parent() {
        let (doc, page_id) = tree_with_inherited_box();
        let rect = page_media_box(&doc, page_id).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 300.0, 400.0));
    }

    #[test]
    fn test_crop_box_clipped_to_media_box() {
        let (mut doc, page_id) = tree_with_inherited_box();
        let page = doc.get_dictionary_mut(page_id).unwrap();
        page.set(
            "CropBox",
            Object::Array(vec![
                Object::Integer(50),
                Object::Integer(-10),
                Object::Integer(350),
                Object::Integer(200),
            ]),
        );

        let rect = page_crop_box(&doc, page_id).unwrap();
        assert_eq!(rect, Rect::new(50.0, 0.0, 250.0, 200.0));
    }

    #[test]
    fn test_crop_box_falls_back_to_media_box() {
        let (doc, page_id) = tree_with_inherited_box();
        assert_eq!(
            page_crop_box(&doc, page_id).unwrap(),
            Rect::new(0.0, 0.0, 300.0, 400.0)
        );
    }

    #[test]
    fn test_rotation_inherited_from_parent() {
        let (mut doc, page_id) = tree_with_inherited_box();
        assert_eq!(page_rotation(&doc, page_id).unwrap(), Rotation::None);

        let pages_id = root_pages_id(&doc).unwrap();
        let pages = doc.get_dictionary_mut(pages_id).unwrap();
        pages.set("Rotate", Object::Integer(-90));
        assert_eq!(page_rotation(&doc, page_id).unwrap(), Rotation::Clockwise270);
    }

    #[test]
    fn test_append_page_updates_count_and_order() {
        let (mut doc, first_id) = tree_with_inherited_box();
        let page = Dictionary::from_iter(vec![("Type", Object::Name(b"Page".to_vec()))]);
        let new_id = append_page(&mut doc, page).unwrap();

        assert_eq!(page_ids(&doc), vec![first_id, new_id]);
        let pages = doc.get_dictionary(root_pages_id(&doc).unwrap()).unwrap();
        assert_eq!(pages.get(b"Count").unwrap().as_i64().unwrap(), 2);
    }

    #[test]
    fn test_append_page_without_catalog_fails() {
        let mut doc = Document::with_version("1.7");
        assert!(append_page(&mut doc, Dictionary::new()).is_err());
    }
}
