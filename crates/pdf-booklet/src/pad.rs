//! Padding a document to a whole number of sheets

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, MARKER_FONT_SIZE, MARKER_OFFSET, PAGES_PER_SHEET};
use crate::render::{append_page, media_box_object, page_ids, page_media_box};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Number of marker pages needed to bring `page_count` to a multiple of 4
pub fn padding_needed(page_count: usize) -> usize {
    (PAGES_PER_SHEET - page_count % PAGES_PER_SHEET) % PAGES_PER_SHEET
}

/// Append marker pages until the page count is a multiple of 4.
///
/// Marker pages take the size of the current last page and carry
/// `marker_text` in white, so they print blank without being empty.
/// Existing pages are left untouched. Returns the number of pages added.
pub fn pad_document(doc: &mut Document, marker_text: &str) -> Result<usize> {
    let ids = page_ids(doc);
    let missing = padding_needed(ids.len());
    if missing == 0 {
        return Ok(0);
    }

    let media_box = match ids.last() {
        Some(&last_id) => page_media_box(doc, last_id)?,
        None => Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1),
    };
    let font_id = doc.add_object(helvetica_font());

    for _ in 0..missing {
        append_marker_page(doc, &media_box, font_id, marker_text)?;
    }

    log::debug!("Appended {} marker page(s)", missing);
    Ok(missing)
}

/// Append one invisible-text page of the given size
fn append_marker_page(
    doc: &mut Document,
    media_box: &Rect,
    font_id: ObjectId,
    marker_text: &str,
) -> Result<ObjectId> {
    let content = format!(
        "BT /F1 {} Tf 1 1 1 rg {} {} Td ({}) Tj ET",
        MARKER_FONT_SIZE,
        media_box.x + MARKER_OFFSET,
        media_box.y + MARKER_OFFSET,
        escape_pdf_string(marker_text)
    );
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("MediaBox", media_box_object(media_box));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    append_page(doc, page_dict)
}

fn helvetica_font() -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font_dict
}

/// Escape a literal string for use inside `( )` in a content stream
fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ch if ch.is_ascii() && !ch.is_ascii_control() => escaped.push(ch),
            _ => escaped.push('?'),
        }
    }
    escaped
}
