//! Tables, views and link descriptors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::column::{Column, PRIMARY_COLUMN_KEY};
use super::row::Row;

/// A table with its schema and rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    pub fn row(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == row_id)
    }

    pub fn column_by_key(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn primary_column(&self) -> Option<&Column> {
        self.column_by_key(PRIMARY_COLUMN_KEY)
    }
}

/// A view over a table; carries precomputed formula results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Row id → column key → computed value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_rows: Option<HashMap<String, Map<String, Value>>>,
}

impl View {
    /// Computed formula value for a cell
    pub fn formula_value(&self, row_id: &str, column_key: &str) -> Option<&Value> {
        self.formula_rows
            .as_ref()?
            .get(row_id)?
            .get(column_key)
    }
}

/// Row-to-row links between two tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id")]
    pub id: String,
    pub table1_id: String,
    pub table2_id: String,
    #[serde(default)]
    pub table1_table2_map: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub table2_table1_map: HashMap<String, Vec<String>>,
}

impl Link {
    /// Row ids linked to `row_id`, reading from the `from_table_id` side
    pub fn linked_row_ids(&self, from_table_id: &str, row_id: &str) -> Vec<String> {
        let map = if from_table_id == self.table1_id {
            &self.table1_table2_map
        } else {
            &self.table2_table1_map
        };
        map.get(row_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formula_value_lookup() {
        let view: View = serde_json::from_value(json!({
            "_id": "v1",
            "formula_rows": {"r1": {"f1": 42}}
        }))
        .unwrap();
        assert_eq!(view.formula_value("r1", "f1"), Some(&json!(42)));
        assert_eq!(view.formula_value("r1", "f2"), None);
        assert_eq!(view.formula_value("r2", "f1"), None);
        assert_eq!(View::default().formula_value("r1", "f1"), None);
    }

    #[test]
    fn test_link_sides() {
        let link = Link {
            id: "l1".to_string(),
            table1_id: "t1".to_string(),
            table2_id: "t2".to_string(),
            table1_table2_map: HashMap::from([("r1".to_string(), vec!["s1".to_string()])]),
            table2_table1_map: HashMap::from([("s1".to_string(), vec!["r1".to_string()])]),
        };
        assert_eq!(link.linked_row_ids("t1", "r1"), vec!["s1"]);
        assert_eq!(link.linked_row_ids("t2", "s1"), vec!["r1"]);
        assert!(link.linked_row_ids("t1", "missing").is_empty());
    }
}
