//! Two-up compositing of imposed sheets
//!
//! Every sheet assignment becomes two output pages, front then back. Each
//! output page is split into a top and a bottom half and each half shows one
//! source page turned a quarter: clockwise on the front, counter-clockwise on
//! the back. A page's own `/Rotate` is applied before that turn.

use crate::constants::OUTPUT_PAGES_PER_SHEET;
use crate::imposition::SheetAssignment;
use crate::layout::{HalfPlacement, plan_sheet, placement_matrix};
use crate::render::{PageImporter, finalize_document, page_ids};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Compose the booklet document.
///
/// `source` must be the padded document the `sheets` were computed for.
/// The output has exactly two pages per sheet, each `sheet_width` ×
/// `sheet_height` points.
pub fn compose(
    source: &Document,
    sheets: &[SheetAssignment],
    (sheet_width, sheet_height): (f32, f32),
) -> Result<Document> {
    let source_page_ids = page_ids(source);
    let page_count = source_page_ids.len();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(sheets.len() * OUTPUT_PAGES_PER_SHEET);
    let mut importer = PageImporter::new(source);

    for (sheet_num, sheet) in sheets.iter().enumerate() {
        let [front_top, front_bottom, back_top, back_bottom] = plan_sheet(sheet, page_count)?;
        log::debug!(
            "Sheet {}: front {}/{}, back {}/{}",
            sheet_num,
            front_top.source_page,
            front_bottom.source_page,
            back_top.source_page,
            back_bottom.source_page
        );

        for side in [[front_top, front_bottom], [back_top, back_bottom]] {
            let page_id = render_side(
                &mut output,
                &mut importer,
                &source_page_ids,
                &side,
                (sheet_width, sheet_height),
                pages_tree_id,
            )?;
            page_refs.push(Object::Reference(page_id));
        }
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Render one side of a sheet to the output document
fn render_side(
    output: &mut Document,
    importer: &mut PageImporter<'_>,
    source_page_ids: &[ObjectId],
    placements: &[HalfPlacement],
    (sheet_width, sheet_height): (f32, f32),
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width),
            Object::Real(sheet_height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, placement) in placements.iter().enumerate() {
        // The selection window was validated by the planner; draw its first page
        let source_page_id = source_page_ids
            .get(placement.selection.start)
            .copied()
            .ok_or(BookletError::PageOutOfRange {
                index: placement.selection.start,
                page_count: source_page_ids.len(),
            })?;

        let xobject_name = format!("P{}", idx);
        let page = importer.import_page(output, source_page_id)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(page.xobject_id));

        // The page is drawn as displayed, then turned for its side of the sheet
        let rotation = page.rotation.then(placement.rotation);
        let region = placement.region(sheet_width, sheet_height);
        let m = placement_matrix(&page.bbox, rotation, &region);
        content_ops.push(format!(
            "q {} {} {} {} re W n {} {} {} {} {} {} cm /{} Do Q\n",
            region.x,
            region.y,
            region.width,
            region.height,
            m[0],
            m[1],
            m[2],
            m[3],
            m[4],
            m[5],
            xobject_name
        ));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}
