//! Gallery components
//!
//! Cards, the per-cell formatter adapter with its formatter widgets, and the
//! image carousel.

mod button;
mod editor_formatter;
mod formatters;
mod gallery_item;
mod image_lazy_load;
mod lightbox;
mod table_tabs;

pub use button::*;
pub use editor_formatter::*;
pub use formatters::*;
pub use gallery_item::*;
pub use image_lazy_load::*;
pub use lightbox::*;
pub use table_tabs::*;
