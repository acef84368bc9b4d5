//! Saddle-stitch page ordering
//!
//! Each sheet carries four pages. Working inward from both ends of the
//! document, the outermost sheet takes the last page and the first two
//! pages plus the second-to-last; the next sheet repeats on what is left.
//!
//! ```text
//! 8 pages, 2 sheets:
//!
//! sheet 0 front: top 1, bottom 8     sheet 0 back: top 2, bottom 7
//! sheet 1 front: top 3, bottom 6     sheet 1 back: top 4, bottom 5
//! ```

use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

/// Source page indices printed on one physical sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetAssignment {
    pub front_bottom: usize,
    pub front_top: usize,
    pub back_top: usize,
    pub back_bottom: usize,
}

impl SheetAssignment {
    pub const fn new(
        front_bottom: usize,
        front_top: usize,
        back_top: usize,
        back_bottom: usize,
    ) -> Self {
        Self {
            front_bottom,
            front_top,
            back_top,
            back_bottom,
        }
    }

    /// The four indices as `[front_bottom, front_top, back_top, back_bottom]`
    pub fn indices(&self) -> [usize; 4] {
        [
            self.front_bottom,
            self.front_top,
            self.back_top,
            self.back_bottom,
        ]
    }
}

impl From<(usize, usize, usize, usize)> for SheetAssignment {
    fn from((front_bottom, front_top, back_top, back_bottom): (usize, usize, usize, usize)) -> Self {
        Self::new(front_bottom, front_top, back_top, back_bottom)
    }
}

/// Compute the sheet assignments for a document of `page_count` pages.
///
/// `page_count` must be a multiple of 4; pad the document first.
/// Sheet 0 is the outermost sheet of the folded booklet.
pub fn impose(page_count: usize) -> Result<Vec<SheetAssignment>> {
    if page_count % PAGES_PER_SHEET != 0 {
        return Err(BookletError::PageCountNotMultipleOfFour(page_count));
    }

    let mut head = 0;
    let mut tail = page_count;
    let mut sheets = Vec::with_capacity(page_count / PAGES_PER_SHEET);

    while head < tail {
        sheets.push(SheetAssignment::new(tail - 1, head, head + 1, tail - 2));
        head += 2;
        tail -= 2;
    }

    Ok(sheets)
}

/// Page order seen when the printed sheets are nested (sheet 0 outermost),
/// folded and read front to back.
///
/// The first half of the booklet comes from the top halves, outermost sheet
/// first; the second half from the bottom halves, innermost sheet first.
pub fn reading_order(sheets: &[SheetAssignment]) -> Vec<usize> {
    let mut order = Vec::with_capacity(sheets.len() * PAGES_PER_SHEET);
    for sheet in sheets {
        order.push(sheet.front_top);
        order.push(sheet.back_top);
    }
    for sheet in sheets.iter().rev() {
        order.push(sheet.back_bottom);
        order.push(sheet.front_bottom);
    }
    order
}
