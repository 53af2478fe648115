//! In-memory host backed by a [`Base`]
//!
//! Serves a loaded base the way a table application would: rows by id,
//! links, and a user directory with optional simulated lookup latency.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::base::Base;
use crate::error::{GalleryError, GalleryResult};
use crate::host::GalleryHost;
use crate::types::{Collaborator, Row, Table};

/// [`GalleryHost`] over an in-memory base
#[derive(Debug)]
pub struct MemoryHost {
    base: RwLock<Base>,
    lookup_delay: Duration,
}

impl MemoryHost {
    pub fn new(base: Base) -> Self {
        Self {
            base: RwLock::new(base),
            lookup_delay: Duration::ZERO,
        }
    }

    pub fn load(path: &Path) -> GalleryResult<Self> {
        Ok(Self::new(Base::load(path)?))
    }

    /// Delay every user-info lookup, to exercise the resolving state
    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the base
    pub fn base(&self) -> Base {
        self.base.read().clone()
    }

    pub fn tables(&self) -> Vec<Table> {
        self.base.read().tables.clone()
    }

    pub fn table_by_name(&self, name: &str) -> Option<Table> {
        self.base.read().table_by_name(name).cloned()
    }

    /// Replace a row of a table, or append it
    pub fn upsert_row(&self, table_id: &str, row: Row) -> GalleryResult<()> {
        let mut base = self.base.write();
        let table = base
            .tables
            .iter_mut()
            .find(|t| t.id == table_id)
            .ok_or_else(|| GalleryError::TableNotFound(table_id.to_string()))?;
        match table.rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(existing) => *existing = row,
            None => table.rows.push(row),
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryHost for MemoryHost {
    fn get_row(&self, table: &Table, row_id: &str) -> Option<Row> {
        let base = self.base.read();
        base.table_by_id(&table.id)
            .and_then(|t| t.row(row_id))
            .cloned()
    }

    fn get_link_cell_value(
        &self,
        link_id: &str,
        table1_id: &str,
        _table2_id: &str,
        row_id: &str,
    ) -> Vec<String> {
        let base = self.base.read();
        base.link(link_id)
            .map(|link| link.linked_row_ids(table1_id, row_id))
            .unwrap_or_default()
    }

    fn get_rows_by_id(&self, table_id: &str, row_ids: &[String]) -> Vec<Row> {
        let base = self.base.read();
        let Some(table) = base.table_by_id(table_id) else {
            return Vec::new();
        };
        row_ids
            .iter()
            .filter_map(|id| table.row(id))
            .cloned()
            .collect()
    }

    fn get_table_by_id(&self, table_id: &str) -> Option<Table> {
        self.base.read().table_by_id(table_id).cloned()
    }

    async fn get_user_common_info(&self, email: &str) -> GalleryResult<Collaborator> {
        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }
        let found = {
            let base = self.base.read();
            base.users
                .iter()
                .chain(base.collaborators.iter())
                .find(|user| user.has_email(email))
                .cloned()
        };
        debug!(%email, found = found.is_some(), "User-info lookup");
        found.ok_or_else(|| GalleryError::UserNotFound(email.to_string()))
    }

    fn get_media_url(&self) -> String {
        self.base.read().media_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellType, Column, Link};
    use serde_json::json;
    use std::collections::HashMap;

    fn base() -> Base {
        Base {
            media_url: "https://cloud.example/media".to_string(),
            tables: vec![
                Table {
                    id: "t1".to_string(),
                    name: "Photos".to_string(),
                    columns: vec![Column::new("0000", "Name", CellType::Text)],
                    rows: vec![Row::new("r1").with("0000", json!("Sunset"))],
                },
                Table {
                    id: "t2".to_string(),
                    name: "Places".to_string(),
                    columns: vec![Column::new("0000", "Place", CellType::Text)],
                    rows: vec![
                        Row::new("p1").with("0000", json!("Lisbon")),
                        Row::new("p2").with("0000", json!("Porto")),
                    ],
                },
            ],
            links: vec![Link {
                id: "l1".to_string(),
                table1_id: "t1".to_string(),
                table2_id: "t2".to_string(),
                table1_table2_map: HashMap::from([(
                    "r1".to_string(),
                    vec!["p2".to_string(), "p1".to_string()],
                )]),
                table2_table1_map: HashMap::new(),
            }],
            users: vec![Collaborator::new("Dee", "dee@x.com", "dee.png")],
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_by_id_keeps_request_order() {
        let host = MemoryHost::new(base());
        let rows = host.get_rows_by_id("t2", &["p2".to_string(), "missing".to_string(), "p1".to_string()]);
        let ids: Vec<&str> = rows.iter().map(Row::id).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn test_link_cell_value() {
        let host = MemoryHost::new(base());
        assert_eq!(host.get_link_cell_value("l1", "t1", "t2", "r1"), vec!["p2", "p1"]);
        assert!(host.get_link_cell_value("nope", "t1", "t2", "r1").is_empty());
    }

    #[test]
    fn test_upsert_row() {
        let host = MemoryHost::new(base());
        let table = host.table_by_name("Photos").unwrap();
        host.upsert_row("t1", Row::new("r1").with("0000", json!("Dawn"))).unwrap();
        assert_eq!(host.get_row(&table, "r1").unwrap().get("0000"), Some(&json!("Dawn")));
        assert!(matches!(
            host.upsert_row("nope", Row::new("x")),
            Err(GalleryError::TableNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let host = MemoryHost::new(base());
        assert_eq!(host.get_user_common_info("dee@x.com").await.unwrap().name, "Dee");
        assert!(matches!(
            host.get_user_common_info("ghost@x.com").await,
            Err(GalleryError::UserNotFound(_))
        ));
    }
}
