//! Rows and gallery items

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::column::Column;
use super::table::Table;

/// Reserved row key holding the row id
pub const ROW_ID_KEY: &str = "_id";

/// Reserved system fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemField {
    /// Creation timestamp (`_ctime`)
    CTime,
    /// Last modification timestamp (`_mtime`)
    MTime,
    /// Email of the creator (`_creator`)
    Creator,
    /// Email of the last modifier (`_last_modifier`)
    LastModifier,
}

impl SystemField {
    /// Reserved key this field is stored under
    pub fn key(&self) -> &'static str {
        match self {
            SystemField::CTime => "_ctime",
            SystemField::MTime => "_mtime",
            SystemField::Creator => "_creator",
            SystemField::LastModifier => "_last_modifier",
        }
    }
}

/// Mapping from column key to value, plus reserved `_`-prefixed keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    /// Create an empty row with the given id
    pub fn new(id: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(ROW_ID_KEY.to_string(), Value::String(id.into()));
        Self(map)
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Row id, empty if the row carries none
    pub fn id(&self) -> &str {
        self.0.get(ROW_ID_KEY).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Non-empty string value of a system field
    pub fn system_value(&self, field: SystemField) -> Option<&str> {
        self.0
            .get(field.key())
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn ctime(&self) -> Option<&str> {
        self.system_value(SystemField::CTime)
    }

    pub fn mtime(&self) -> Option<&str> {
        self.system_value(SystemField::MTime)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// One row rendered as a card.
///
/// `fields` is a denormalized copy keyed by column *name* (reserved keys
/// keep their names), which is how gallery views receive their items. The
/// canonical row is re-fetched through the host by id when needed.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub fields: Row,
    pub table: Arc<Table>,
}

impl GalleryItem {
    /// Build the name-keyed copy of a key-keyed table row
    pub fn from_row(table: &Arc<Table>, row: &Row) -> Self {
        let mut fields = Map::new();
        for (key, value) in row.as_map() {
            if key.starts_with('_') {
                fields.insert(key.clone(), value.clone());
            }
        }
        for column in &table.columns {
            if let Some(value) = row.get(&column.key) {
                fields.insert(column.name.clone(), value.clone());
            }
        }
        Self {
            fields: Row::from_map(fields),
            table: Arc::clone(table),
        }
    }

    pub fn id(&self) -> &str {
        self.fields.id()
    }

    /// Image URLs stored under the column's name
    pub fn images(&self, column: &Column) -> Vec<String> {
        match self.fields.get(&column.name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Rebuild a key-keyed row from this copy.
    ///
    /// Used when the host cannot produce the canonical row.
    pub fn to_row(&self) -> Row {
        let mut map = Map::new();
        for (key, value) in self.fields.as_map() {
            if key.starts_with('_') {
                map.insert(key.clone(), value.clone());
            }
        }
        for column in &self.table.columns {
            if let Some(value) = self.fields.get(&column.name) {
                map.insert(column.key.clone(), value.clone());
            }
        }
        Row::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::column::CellType;
    use serde_json::json;

    fn table() -> Arc<Table> {
        Arc::new(Table {
            id: "t1".to_string(),
            name: "Photos".to_string(),
            columns: vec![
                Column::new("0000", "Name", CellType::Text),
                Column::new("img1", "Pictures", CellType::Image),
            ],
            rows: Vec::new(),
        })
    }

    #[test]
    fn test_system_values() {
        let row = Row::new("r1")
            .with("_creator", json!("a@x.com"))
            .with("_last_modifier", json!(""))
            .with("_ctime", json!("2024-01-02T03:04:05Z"));
        assert_eq!(row.id(), "r1");
        assert_eq!(row.system_value(SystemField::Creator), Some("a@x.com"));
        assert_eq!(row.system_value(SystemField::LastModifier), None);
        assert_eq!(row.ctime(), Some("2024-01-02T03:04:05Z"));
        assert_eq!(row.mtime(), None);
    }

    #[test]
    fn test_gallery_item_keys_by_name() {
        let table = table();
        let row = Row::new("r1")
            .with("0000", json!("Sunset"))
            .with("img1", json!(["a.png", "b.png"]));
        let item = GalleryItem::from_row(&table, &row);

        assert_eq!(item.id(), "r1");
        assert_eq!(item.fields.get("Name"), Some(&json!("Sunset")));
        assert_eq!(item.images(&table.columns[1]), vec!["a.png", "b.png"]);
        assert_eq!(item.to_row(), row);
    }

    #[test]
    fn test_images_missing_column() {
        let table = table();
        let item = GalleryItem::from_row(&table, &Row::new("r1"));
        assert!(item.images(&table.columns[1]).is_empty());
    }
}
