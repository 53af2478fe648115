//! Gallery View UI Components
//!
//! Dioxus components that render table rows as gallery cards.
//!
//! ## Component Tree
//!
//! ```text
//! GalleryViewItem                 one card per row
//! ├── ImageLazyLoad               cover image, opens the lightbox
//! ├── EditorFormatter (title)     FormatterMode::RowTitle
//! ├── EditorFormatter × fields    one per shown column
//! │   └── TextFormatter / NumberFormatter / ... / LinkFormatter
//! └── ImagePreviewLightbox        full-screen carousel
//! ```
//!
//! Every component reads the host through the [`GalleryContext`] provided
//! once with [`use_gallery_provider`].
//!
//! [`GalleryContext`]: gallery_core::GalleryContext

pub mod components;
pub mod context;

pub use components::*;
pub use context::{use_gallery, use_gallery_provider};
