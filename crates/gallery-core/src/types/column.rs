//! Column schema descriptors

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::row::SystemField;

/// Key of the primary field every table carries.
pub const PRIMARY_COLUMN_KEY: &str = "0000";

/// Declared data kind of a column, selecting its rendering strategy.
///
/// Unrecognized type names are kept as [`CellType::Other`] so a base written
/// by a newer application still loads; those columns render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellType {
    Text,
    LongText,
    Number,
    Date,
    Checkbox,
    SingleSelect,
    MultipleSelect,
    Collaborator,
    Image,
    File,
    Geolocation,
    Formula,
    Link,
    Creator,
    LastModifier,
    CTime,
    MTime,
    Other(String),
}

impl CellType {
    /// Wire name of this type
    pub fn as_str(&self) -> &str {
        match self {
            CellType::Text => "text",
            CellType::LongText => "long-text",
            CellType::Number => "number",
            CellType::Date => "date",
            CellType::Checkbox => "checkbox",
            CellType::SingleSelect => "single-select",
            CellType::MultipleSelect => "multiple-select",
            CellType::Collaborator => "collaborator",
            CellType::Image => "image",
            CellType::File => "file",
            CellType::Geolocation => "geolocation",
            CellType::Formula => "formula",
            CellType::Link => "link",
            CellType::Creator => "creator",
            CellType::LastModifier => "last-modifier",
            CellType::CTime => "ctime",
            CellType::MTime => "mtime",
            CellType::Other(name) => name,
        }
    }

    /// System field whose value needs collaborator resolution, if any
    pub fn collaborator_field(&self) -> Option<SystemField> {
        match self {
            CellType::Creator => Some(SystemField::Creator),
            CellType::LastModifier => Some(SystemField::LastModifier),
            _ => None,
        }
    }
}

impl From<String> for CellType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "text" => CellType::Text,
            "long-text" => CellType::LongText,
            "number" => CellType::Number,
            "date" => CellType::Date,
            "checkbox" => CellType::Checkbox,
            "single-select" => CellType::SingleSelect,
            "multiple-select" => CellType::MultipleSelect,
            "collaborator" => CellType::Collaborator,
            "image" => CellType::Image,
            "file" => CellType::File,
            "geolocation" => CellType::Geolocation,
            "formula" => CellType::Formula,
            "link" => CellType::Link,
            "creator" => CellType::Creator,
            "last-modifier" => CellType::LastModifier,
            "ctime" => CellType::CTime,
            "mtime" => CellType::MTime,
            _ => CellType::Other(name),
        }
    }
}

impl From<&str> for CellType {
    fn from(name: &str) -> Self {
        CellType::from(name.to_string())
    }
}

impl From<CellType> for String {
    fn from(cell_type: CellType) -> Self {
        cell_type.as_str().to_string()
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a single/multiple select column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Type-specific column options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnData {
    /// Number or date format (`"percent"`, `"YYYY-MM-DD HH:mm"`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Choices of a select column
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub options: Vec<SelectOption>,
    /// Result kind of a formula column (`"number"`, `"date"`, `"bool"`, `"string"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
    /// Link descriptor id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    /// One side of the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// The other side of the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_table_id: Option<String>,
    /// Column of the linked table shown for each linked row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_column_key: Option<String>,
}

/// Schema descriptor for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: CellType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ColumnData,
}

impl Column {
    pub fn new(key: impl Into<String>, name: impl Into<String>, column_type: CellType) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            column_type,
            data: ColumnData::default(),
        }
    }

    pub fn with_data(mut self, data: ColumnData) -> Self {
        self.data = data;
        self
    }

    /// Whether this is the table's primary field
    pub fn is_primary(&self) -> bool {
        self.key == PRIMARY_COLUMN_KEY
    }
}
