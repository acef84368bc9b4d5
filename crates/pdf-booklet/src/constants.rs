//! Shared constants for booklet generation
//!
//! This module centralizes magic numbers and constants used throughout
//! the padding, imposition and compositing steps.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (A4: 210mm × 297mm)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 595.0;

/// Default page height in points (A4)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 842.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Imposition
// =============================================================================

/// Source pages carried by one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Output pages produced per sheet (front and back)
pub const OUTPUT_PAGES_PER_SHEET: usize = 2;

// =============================================================================
// Marker Pages
// =============================================================================

/// Text drawn in white on padding pages
pub const DEFAULT_MARKER_TEXT: &str = "intentionally left blank";

/// Font size for marker text (points)
pub const MARKER_FONT_SIZE: f32 = 10.0;

/// Offset of the marker text from the page's lower-left corner (points)
pub const MARKER_OFFSET: f32 = 72.0;

// =============================================================================
// File Naming
// =============================================================================

/// Suffix of the padded intermediate file stem
pub const DEFAULT_INTERMEDIATE_SUFFIX: &str = "_tmp";

/// Suffix of the booklet output file stem
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_booklet";

/// Extension of every file the pipeline writes
pub const PDF_EXTENSION: &str = "pdf";
