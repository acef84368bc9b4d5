//! Layout calculation modules for compositing
//!
//! This module handles all the geometric calculations for the two-up sheets:
//! - Half-page planning (which source page goes where, with which rotation)
//! - Transformation matrices (rotation, fit and centring inside a half)

mod plan;
mod transform;

pub use plan::*;
pub use transform::*;
