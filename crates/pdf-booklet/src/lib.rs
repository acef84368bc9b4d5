pub mod booklet;
pub mod compose;
mod constants;
pub mod imposition;
pub mod layout;
mod options;
pub mod pad;
pub mod render;
mod stats;
mod types;

pub use booklet::{
    BookletPaths, generate_booklet, generate_booklet_from_document, load_pdf, save_pdf,
};
pub use compose::compose;
pub use constants::{DEFAULT_MARKER_TEXT, mm_to_pt};
pub use imposition::{SheetAssignment, impose, reading_order};
pub use options::*;
pub use pad::{pad_document, padding_needed};
pub use stats::calculate_statistics;
pub use types::*;
