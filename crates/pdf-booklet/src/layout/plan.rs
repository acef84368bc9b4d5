//! Half-page placement planning
//!
//! Turns a sheet assignment into the four half-page placements drawn on the
//! front and back of the sheet, without touching any PDF objects.

use std::ops::Range;

use crate::imposition::SheetAssignment;
use crate::types::*;

/// One source page drawn into one half of an output page
#[derive(Debug, Clone, PartialEq)]
pub struct HalfPlacement {
    /// Which output page of the sheet
    pub side: SheetSide,
    /// Which half of that page
    pub half: Half,
    /// Index of the page that is drawn
    pub source_page: usize,
    /// Pages picked out of the source document for this half.
    ///
    /// Only `selection.start` is ever drawn. The window is two pages wide
    /// except for a front-bottom page that is the last page of the document.
    pub selection: Range<usize>,
    /// Rotation applied to the source page
    pub rotation: Rotation,
}

/// Top and bottom halves of an output page, in PDF user space
/// (origin bottom-left), returned as `(top, bottom)`.
pub fn half_regions(sheet_width: f32, sheet_height: f32) -> (Rect, Rect) {
    let half_height = sheet_height / 2.0;
    (
        Rect::new(0.0, half_height, sheet_width, half_height),
        Rect::new(0.0, 0.0, sheet_width, half_height),
    )
}

impl HalfPlacement {
    /// The region of a `sheet_width` × `sheet_height` page this half covers
    pub fn region(&self, sheet_width: f32, sheet_height: f32) -> Rect {
        let (top, bottom) = half_regions(sheet_width, sheet_height);
        match self.half {
            Half::Top => top,
            Half::Bottom => bottom,
        }
    }
}

/// Select the source window for a half-page.
///
/// A front-bottom page sitting at the last index gets a one-page window;
/// every other half takes a two-page window starting at `index`. A window
/// reaching past the document is an imposition bug and is reported as
/// [`BookletError::PageOutOfRange`].
pub fn selection_window(
    side: SheetSide,
    half: Half,
    index: usize,
    page_count: usize,
) -> Result<Range<usize>> {
    let single = side == SheetSide::Front && half == Half::Bottom && index + 1 >= page_count;
    let window = if single { index..index + 1 } else { index..index + 2 };

    if window.end > page_count {
        let index = if index < page_count { window.end - 1 } else { index };
        return Err(BookletError::PageOutOfRange { index, page_count });
    }
    Ok(window)
}

/// Plan the four half-page placements of one sheet.
///
/// Order: front top, front bottom, back top, back bottom.
pub fn plan_sheet(sheet: &SheetAssignment, page_count: usize) -> Result<[HalfPlacement; 4]> {
    let place = |side: SheetSide, half: Half, source_page: usize| -> Result<HalfPlacement> {
        Ok(HalfPlacement {
            side,
            half,
            source_page,
            selection: selection_window(side, half, source_page, page_count)?,
            rotation: side.rotation(),
        })
    };

    Ok([
        place(SheetSide::Front, Half::Top, sheet.front_top)?,
        place(SheetSide::Front, Half::Bottom, sheet.front_bottom)?,
        place(SheetSide::Back, Half::Top, sheet.back_top)?,
        place(SheetSide::Back, Half::Bottom, sheet.back_bottom)?,
    ])
}
