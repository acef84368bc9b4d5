use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Malformed page tree: {0}")]
    PageTree(String),
    #[error("Page count {0} is not a multiple of 4")]
    PageCountNotMultipleOfFour(usize),
    #[error("Page index {index} out of range for a document of {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Clockwise rotation applied to a source page when it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Rotation for a `/Rotate` value. Values that are not a multiple of
    /// 90 mean no rotation.
    pub fn from_degrees(degrees: i64) -> Self {
        match degrees.rem_euclid(360) {
            90 => Rotation::Clockwise90,
            180 => Rotation::Clockwise180,
            270 => Rotation::Clockwise270,
            _ => Rotation::None,
        }
    }

    /// This rotation followed by `other`
    pub fn then(self, other: Rotation) -> Self {
        Self::from_degrees(i64::from(self.degrees() + other.degrees()))
    }

    /// Whether the rotation swaps width and height
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

impl SheetSide {
    /// Source pages on the front are turned clockwise, on the back
    /// counter-clockwise, so both sides read correctly along the spine.
    pub fn rotation(self) -> Rotation {
        match self {
            SheetSide::Front => Rotation::Clockwise90,
            SheetSide::Back => Rotation::Clockwise270,
        }
    }
}

/// Half of an output page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap of two rectangles, if they share any area
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let top = self.top().min(other.top());
        (right > x && top > y).then(|| Rect::new(x, y, right - x, top - y))
    }
}

/// Statistics about a booklet run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Page count after padding (multiple of 4)
    pub padded_pages: usize,
    /// Number of marker pages appended
    pub blank_pages_added: usize,
    /// Number of physical sheets
    pub sheets: usize,
    /// Output page count (front and back of each sheet)
    pub output_pages: usize,
}
