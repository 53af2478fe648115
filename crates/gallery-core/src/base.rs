//! Base fixtures
//!
//! A base is the JSON document an in-memory host serves: tables with their
//! rows, views, links, the collaborator list, a user directory for
//! user-info lookups, and the gallery settings.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GalleryError, GalleryResult};
use crate::types::{Collaborator, Link, Settings, Table, View};

/// Serialized base served by [`MemoryHost`](crate::memory::MemoryHost)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base {
    pub media_url: String,
    pub tables: Vec<Table>,
    pub views: Vec<View>,
    pub links: Vec<Link>,
    /// Collaborators of the base, matched before any lookup
    pub collaborators: Vec<Collaborator>,
    /// Directory answering user-info lookups
    pub users: Vec<Collaborator>,
    pub settings: Settings,
}

impl Base {
    pub fn from_json(json: &str) -> GalleryResult<Self> {
        let base: Base = serde_json::from_str(json)?;
        base.validate()?;
        Ok(base)
    }

    pub fn load(path: &Path) -> GalleryResult<Self> {
        debug!(?path, "Loading base");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Table ids and per-table column keys must be unique
    pub fn validate(&self) -> GalleryResult<()> {
        let mut table_ids = HashSet::new();
        for table in &self.tables {
            if !table_ids.insert(table.id.as_str()) {
                return Err(GalleryError::InvalidBase(format!(
                    "duplicate table id {}",
                    table.id
                )));
            }
            let mut keys = HashSet::new();
            for column in &table.columns {
                if !keys.insert(column.key.as_str()) {
                    return Err(GalleryError::InvalidBase(format!(
                        "duplicate column key {} in table {}",
                        column.key, table.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_by_id(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid() {
        let base = Base::from_json("{}").unwrap();
        assert!(base.tables.is_empty());
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let json = r#"{"tables":[{"_id":"t1","name":"A"},{"_id":"t1","name":"B"}]}"#;
        assert!(matches!(Base::from_json(json), Err(GalleryError::InvalidBase(_))));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let json = r#"{"tables":[{"_id":"t1","name":"A","columns":[
            {"key":"0000","name":"Name","type":"text"},
            {"key":"0000","name":"Other","type":"text"}]}]}"#;
        assert!(matches!(Base::from_json(json), Err(GalleryError::InvalidBase(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Base::from_json("{"), Err(GalleryError::Serialization(_))));
    }
}
