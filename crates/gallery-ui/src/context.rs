//! Gallery context provider.
//!
//! Provides the [`GalleryContext`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_gallery_provider(|| GalleryContext::new(host, actions));
//!
//! // In child components
//! let gallery = use_gallery();
//! let row = gallery.host.get_row(&table, row_id);
//! ```

use dioxus::prelude::*;
use gallery_core::GalleryContext;

/// Hook to access the gallery context.
///
/// Panics if no ancestor provided one.
pub fn use_gallery() -> GalleryContext {
    use_context::<GalleryContext>()
}

/// Provide the gallery context to every descendant
pub fn use_gallery_provider(init: impl FnOnce() -> GalleryContext) -> GalleryContext {
    use_context_provider(init)
}
