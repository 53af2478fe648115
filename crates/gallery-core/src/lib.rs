//! Gallery View Core Library
//!
//! Renders table rows as cards: one image, one title, and a set of fields.
//! This crate holds everything below the widgets:
//!
//! - the table data model ([`types`]) in the host application's JSON shape,
//! - cell type dispatch ([`cell`]) and value display helpers ([`display`]),
//! - lazy collaborator resolution for creator / last-modifier cells
//!   ([`resolver`]),
//! - card layout selection ([`selection`]) and carousel state
//!   ([`lightbox`]),
//! - the host capability interface ([`host`]) and an in-memory host
//!   ([`memory`]) serving a JSON [`Base`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use gallery_core::{Base, CardLayout, MemoryHost};
//!
//! let base = Base::load("base.json".as_ref())?;
//! let table = base.table_by_name("Photos").unwrap();
//! let layout = CardLayout::resolve(&base.settings, &table.columns);
//! println!("title column: {:?}", layout.title.map(|c| c.name));
//! ```

pub mod base;
pub mod cell;
pub mod display;
pub mod error;
pub mod host;
pub mod lightbox;
pub mod locale;
pub mod memory;
pub mod resolver;
pub mod selection;
pub mod types;

// Re-exports
pub use base::Base;
pub use cell::{cell_content, CellContent, FormatterMode};
pub use error::{GalleryError, GalleryResult};
pub use host::{GalleryContext, GalleryHost, LinkMetaData, RowActions};
pub use lightbox::Lightbox;
pub use locale::{Locale, UNNAMED_RECORD};
pub use memory::MemoryHost;
pub use resolver::{
    is_valid_email, resolve_collaborator, CollaboratorResolver, RequestId, ResolveState,
    Resolution,
};
pub use selection::CardLayout;
pub use types::*;
