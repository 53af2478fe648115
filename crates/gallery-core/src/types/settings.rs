//! Gallery view settings

use serde::{Deserialize, Serialize};

/// Display configuration of a gallery view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the column whose images head each card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_image_name: Option<String>,
    /// Name of the column used as card title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_title_name: Option<String>,
    /// Names of the columns shown in the card body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_column_names: Option<Vec<String>>,
    /// Column order/visibility override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnSetting>>,
}

/// One entry of the column order override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSetting {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shown: Option<bool>,
}

impl ColumnSetting {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shown: None,
        }
    }

    pub fn hidden(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shown: Some(false),
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown.unwrap_or(true)
    }
}
