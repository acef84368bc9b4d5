//! PDF object plumbing for booklet generation
//!
//! This module handles all PDF-specific operations:
//! - Walking and extending the page tree
//! - Creating XObjects from source pages
//! - Deep copying PDF objects between documents

mod page_tree;
mod xobject;

pub use page_tree::*;
pub use xobject::{ImportedPage, PageImporter, copy_object_deep};
