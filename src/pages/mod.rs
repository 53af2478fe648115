//! Page components for the gallery view.

mod expanded_row;
mod gallery;

pub use expanded_row::{ExpandedRow, ExpandedRowModal};
pub use gallery::{Gallery, GalleryPage, TableGallery};
