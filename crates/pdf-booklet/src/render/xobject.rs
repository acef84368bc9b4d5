//! XObject creation for compositing
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output pages with transformations.

use crate::types::{Rect, Result, Rotation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::page_tree::{inherited_attribute, page_crop_box, page_rotation};

// =============================================================================
// Page Import
// =============================================================================

/// A source page embedded in the output document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportedPage {
    pub xobject_id: ObjectId,
    /// Visible area of the page in its own coordinates, also the form's BBox
    pub bbox: Rect,
    /// Rotation the page is displayed with
    pub rotation: Rotation,
}

/// Copies pages of one source document into an output document as Form
/// XObjects.
///
/// Every source object is copied at most once per importer, so pages that
/// share fonts or images keep sharing them in the output, and a page placed
/// on several sheets is embedded once.
pub struct PageImporter<'a> {
    source: &'a Document,
    objects: HashMap<ObjectId, ObjectId>,
    pages: HashMap<ObjectId, ImportedPage>,
}

impl<'a> PageImporter<'a> {
    pub fn new(source: &'a Document) -> Self {
        Self {
            source,
            objects: HashMap::new(),
            pages: HashMap::new(),
        }
    }

    /// Import a source page as a Form XObject clipped to the page's
    /// CropBox.
    pub fn import_page(
        &mut self,
        output: &mut Document,
        page_id: ObjectId,
    ) -> Result<ImportedPage> {
        if let Some(&imported) = self.pages.get(&page_id) {
            return Ok(imported);
        }

        let bbox = page_crop_box(self.source, page_id)?;
        let rotation = page_rotation(self.source, page_id)?;

        let page_dict = self.source.get_dictionary(page_id)?;
        let content_data = get_page_content(self.source, page_dict)?;

        let mut xobject_dict = Dictionary::new();
        xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
        xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
        xobject_dict.set(
            "BBox",
            Object::Array(vec![
                Object::Real(bbox.x),
                Object::Real(bbox.y),
                Object::Real(bbox.right()),
                Object::Real(bbox.top()),
            ]),
        );
        xobject_dict.set("FormType", Object::Integer(1));

        // Resources may live on an ancestor Pages node
        if let Some(resources) = inherited_attribute(self.source, page_id, b"Resources")? {
            let resources = resources.clone();
            xobject_dict.set(
                "Resources",
                copy_object_deep(output, self.source, &resources, &mut self.objects)?,
            );
        }

        let xobject_id = output.add_object(Stream::new(xobject_dict, content_data));
        let imported = ImportedPage {
            xobject_id,
            bbox,
            rotation,
        };
        self.pages.insert(page_id, imported);
        Ok(imported)
    }
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Get content from a single content stream reference.
///
/// The form is written without filters, so content that cannot be decoded
/// is an error.
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream.get_plain_content()?)
    } else {
        Ok(Vec::new())
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream.get_plain_content()?);
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before the referenced object is copied so that
/// reference cycles resolve to the same copy.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        // Never drag a page's tree back in through a back-pointer
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
