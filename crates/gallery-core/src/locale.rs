//! Localized UI strings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Placeholder title of a row whose title cell is empty
pub const UNNAMED_RECORD: &str = "Unnamed_record";

const EN: &[(&str, &str)] = &[
    ("Gallery", "Gallery"),
    ("Table", "Table"),
    ("Unnamed_record", "Unnamed record"),
    ("Fields", "Fields"),
    ("Cancel", "Cancel"),
];

const ZH_CN: &[(&str, &str)] = &[
    ("Gallery", "图库"),
    ("Table", "子表"),
    ("Unnamed_record", "未命名记录"),
    ("Fields", "字段"),
    ("Cancel", "取消"),
];

/// Supported UI languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-cn")]
    ZhCn,
}

impl Locale {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::ZhCn => ZH_CN,
        }
    }

    /// Translation of `key`; unknown keys are returned unchanged
    pub fn get<'a>(self, key: &'a str) -> &'a str {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-cn",
        }
    }
}

impl FromStr for Locale {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            other => Err(GalleryError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
