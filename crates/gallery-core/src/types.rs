//! Core types for Gallery View
//!
//! Mirrors the JSON shapes a table application exchanges with its views:
//! reserved row keys keep their leading underscore and the column type
//! field stays `type`.

pub mod collaborator;
pub mod column;
pub mod row;
pub mod settings;
pub mod table;

pub use collaborator::Collaborator;
pub use column::{CellType, Column, ColumnData, SelectOption, PRIMARY_COLUMN_KEY};
pub use row::{GalleryItem, Row, SystemField};
pub use settings::{ColumnSetting, Settings};
pub use table::{Link, Table, View};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
///
/// Table applications emit `"data": null` for columns without options.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
