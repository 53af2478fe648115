//! Host capabilities consumed by the gallery
//!
//! The host application owns the data. The gallery reaches it only through
//! [`GalleryHost`] (data access) and [`RowActions`] (user actions), bundled
//! with the collaborator list and locale into one [`GalleryContext`] that is
//! injected once at the top of the view tree.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::display::value_to_text;
use crate::error::GalleryResult;
use crate::locale::Locale;
use crate::types::{Collaborator, Column, Row, Table, PRIMARY_COLUMN_KEY};

/// Data access the host application provides
#[async_trait]
pub trait GalleryHost: Send + Sync {
    /// Canonical row of `table` by id
    fn get_row(&self, table: &Table, row_id: &str) -> Option<Row>;

    /// Row ids linked to `row_id` through `link_id`, reading from `table1_id`'s side
    fn get_link_cell_value(
        &self,
        link_id: &str,
        table1_id: &str,
        table2_id: &str,
        row_id: &str,
    ) -> Vec<String>;

    /// Rows of `table_id` with the given ids, in request order
    fn get_rows_by_id(&self, table_id: &str, row_ids: &[String]) -> Vec<Row>;

    fn get_table_by_id(&self, table_id: &str) -> Option<Table>;

    /// User directory lookup by email
    async fn get_user_common_info(&self, email: &str) -> GalleryResult<Collaborator>;

    /// Base URL for media assets (avatars, thumbnails)
    fn get_media_url(&self) -> String;
}

/// User actions the host handles
pub trait RowActions {
    /// Open the full record editor for `row`
    fn expand_row(&self, row: &Row, table: &Table);
}

/// Fixed adapter the link formatter resolves linked rows through
#[derive(Clone)]
pub struct LinkMetaData {
    host: Arc<dyn GalleryHost>,
}

impl LinkMetaData {
    pub fn new(host: Arc<dyn GalleryHost>) -> Self {
        Self { host }
    }

    pub fn get_linked_cell_value(
        &self,
        link_id: &str,
        table1_id: &str,
        table2_id: &str,
        row_id: &str,
    ) -> Vec<String> {
        self.host
            .get_link_cell_value(link_id, table1_id, table2_id, row_id)
    }

    pub fn get_linked_rows(&self, table_id: &str, row_ids: &[String]) -> Vec<Row> {
        self.host.get_rows_by_id(table_id, row_ids)
    }

    pub fn get_linked_table(&self, table_id: &str) -> Option<Table> {
        self.host.get_table_by_id(table_id)
    }

    /// Expanding a linked row is not available from a gallery card
    pub fn expand_linked_table_row(&self, _row: &Row, _table_id: &str) -> bool {
        false
    }

    /// Display text of every row linked from `row` through `column`
    pub fn linked_display_values(
        &self,
        column: &Column,
        row: &Row,
        current_table_id: &str,
    ) -> Vec<String> {
        let data = &column.data;
        let (Some(link_id), Some(table_id), Some(other_table_id)) = (
            data.link_id.as_deref(),
            data.table_id.as_deref(),
            data.other_table_id.as_deref(),
        ) else {
            debug!(column = %column.key, "Link column without link descriptor");
            return Vec::new();
        };

        let (this_side, other_side) = if table_id == current_table_id {
            (table_id, other_table_id)
        } else {
            (other_table_id, table_id)
        };

        let row_ids = self.get_linked_cell_value(link_id, this_side, other_side, row.id());
        if row_ids.is_empty() {
            return Vec::new();
        }

        // A display column the linked table no longer has falls back to its primary column
        let linked_table = self.get_linked_table(other_side);
        let display_key = match (data.display_column_key.as_deref(), linked_table) {
            (Some(key), Some(linked)) if linked.column_by_key(key).is_none() => {
                debug!(column = %column.key, display = %key, "Display column missing from linked table");
                PRIMARY_COLUMN_KEY
            }
            (Some(key), _) => key,
            (None, _) => PRIMARY_COLUMN_KEY,
        };
        self.get_linked_rows(other_side, &row_ids)
            .iter()
            .filter_map(|linked| linked.get(display_key))
            .map(value_to_text)
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl fmt::Debug for LinkMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkMetaData").finish_non_exhaustive()
    }
}

/// Everything a gallery view needs from its host, injected once
#[derive(Clone)]
pub struct GalleryContext {
    pub host: Arc<dyn GalleryHost>,
    pub actions: Rc<dyn RowActions>,
    /// Known collaborators, matched by email before any lookup
    pub collaborators: Vec<Collaborator>,
    pub locale: Locale,
}

impl GalleryContext {
    pub fn new(host: Arc<dyn GalleryHost>, actions: Rc<dyn RowActions>) -> Self {
        Self {
            host,
            actions,
            collaborators: Vec::new(),
            locale: Locale::default(),
        }
    }

    pub fn with_collaborators(mut self, collaborators: Vec<Collaborator>) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn link_meta(&self) -> LinkMetaData {
        LinkMetaData::new(Arc::clone(&self.host))
    }

    /// Localized string for `key`
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.locale.get(key)
    }

    /// Fetch the canonical row and hand it to the host's expand action
    pub fn expand_row(&self, table: &Table, row_id: &str) -> bool {
        match self.host.get_row(table, row_id) {
            Some(row) => {
                self.actions.expand_row(&row, table);
                true
            }
            None => {
                debug!(table = %table.id, row = %row_id, "Row to expand not found");
                false
            }
        }
    }
}

impl fmt::Debug for GalleryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryContext")
            .field("collaborators", &self.collaborators.len())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
