use crate::constants::{OUTPUT_PAGES_PER_SHEET, PAGES_PER_SHEET};
use crate::pad::padding_needed;
use crate::types::*;

/// Calculate statistics for a booklet made from `source_pages` pages
pub fn calculate_statistics(source_pages: usize) -> BookletStatistics {
    let blank_pages_added = padding_needed(source_pages);
    let padded_pages = source_pages + blank_pages_added;
    let sheets = padded_pages / PAGES_PER_SHEET;

    BookletStatistics {
        source_pages,
        padded_pages,
        blank_pages_added,
        sheets,
        output_pages: sheets * OUTPUT_PAGES_PER_SHEET,
    }
}
