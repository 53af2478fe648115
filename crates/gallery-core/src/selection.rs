//! Which columns a gallery card shows
//!
//! Card layout is derived from the view settings and the active column set:
//! one image column, one title column, and the body fields.

use tracing::debug;

use crate::types::{CellType, Column, ColumnSetting, Settings, PRIMARY_COLUMN_KEY};

/// Columns resolved for one card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardLayout {
    pub image: Option<Column>,
    pub title: Option<Column>,
    pub fields: Vec<Column>,
}

impl CardLayout {
    pub fn resolve(settings: &Settings, columns: &[Column]) -> Self {
        let title = title_column(settings, columns);
        let fields = body_columns(settings, columns, title);
        Self {
            image: image_column(settings, columns).cloned(),
            title: title.cloned(),
            fields,
        }
    }
}

/// The named image column, or else the first image-typed column
pub fn image_column<'a>(settings: &Settings, columns: &'a [Column]) -> Option<&'a Column> {
    match settings.shown_image_name.as_deref() {
        Some(name) if !name.is_empty() => columns.iter().find(|c| c.name == name),
        _ => columns.iter().find(|c| c.column_type == CellType::Image),
    }
}

/// The named title column, falling back to the primary column
pub fn title_column<'a>(settings: &Settings, columns: &'a [Column]) -> Option<&'a Column> {
    let primary = || columns.iter().find(|c| c.key == PRIMARY_COLUMN_KEY);
    match settings.shown_title_name.as_deref() {
        Some(name) if !name.is_empty() => columns
            .iter()
            .find(|c| c.name == name)
            .or_else(|| {
                debug!(title = %name, "Configured title column missing, using primary column");
                primary()
            }),
        _ => primary(),
    }
}

/// Apply the column order/visibility override.
///
/// Configured columns that still exist come first in configured order,
/// hidden entries dropped; columns the override does not mention follow in
/// table order. Repeated entries count once.
pub fn calculate_columns(configured: &[ColumnSetting], columns: &[Column]) -> Vec<Column> {
    let mut ordered: Vec<Column> = Vec::with_capacity(columns.len());
    for setting in configured.iter().filter(|setting| setting.is_shown()) {
        if ordered.iter().any(|c| c.key == setting.key) {
            continue;
        }
        if let Some(column) = columns.iter().find(|c| c.key == setting.key) {
            ordered.push(column.clone());
        }
    }
    for column in columns {
        if !configured.iter().any(|setting| setting.key == column.key) {
            ordered.push(column.clone());
        }
    }
    ordered
}

/// Body fields: listed in `shown_column_names` and not the title column
pub fn body_columns(settings: &Settings, columns: &[Column], title: Option<&Column>) -> Vec<Column> {
    let Some(shown) = settings.shown_column_names.as_ref() else {
        return Vec::new();
    };
    let ordered = match settings.columns.as_ref() {
        Some(configured) => calculate_columns(configured, columns),
        None => columns.to_vec(),
    };
    let title_name = title.map(|c| c.name.as_str());
    ordered
        .into_iter()
        .filter(|c| shown.iter().any(|name| *name == c.name))
        .filter(|c| Some(c.name.as_str()) != title_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("0000", "Name", CellType::Text),
            Column::new("a1", "Title", CellType::Text),
            Column::new("b2", "Cover", CellType::Image),
            Column::new("c3", "Shots", CellType::Image),
            Column::new("d4", "Notes", CellType::LongText),
        ]
    }

    fn names(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_image_column_selection() {
        let cols = columns();
        assert_eq!(image_column(&Settings::default(), &cols).map(|c| c.key.as_str()), Some("b2"));

        let named = Settings {
            shown_image_name: Some("Shots".to_string()),
            ..Default::default()
        };
        assert_eq!(image_column(&named, &cols).map(|c| c.key.as_str()), Some("c3"));

        let text_only = vec![Column::new("0000", "Name", CellType::Text)];
        assert!(image_column(&Settings::default(), &text_only).is_none());
    }

    #[test]
    fn test_title_column_selection() {
        let cols = columns();
        let named = Settings {
            shown_title_name: Some("Title".to_string()),
            ..Default::default()
        };
        assert_eq!(title_column(&named, &cols).map(|c| c.key.as_str()), Some("a1"));

        let missing = Settings {
            shown_title_name: Some("Gone".to_string()),
            ..Default::default()
        };
        assert_eq!(title_column(&missing, &cols).map(|c| c.key.as_str()), Some("0000"));
        assert_eq!(
            title_column(&Settings::default(), &cols).map(|c| c.key.as_str()),
            Some("0000")
        );
    }

    #[test]
    fn test_calculate_columns_order() {
        let cols = columns();
        let configured = vec![
            ColumnSetting::new("d4"),
            ColumnSetting::hidden("a1"),
            ColumnSetting::new("zz"),
            ColumnSetting::new("0000"),
        ];
        let ordered = calculate_columns(&configured, &cols);
        assert_eq!(names(&ordered), vec!["Notes", "Name", "Cover", "Shots"]);
    }

    #[test]
    fn test_body_excludes_title() {
        let cols = columns();
        let settings = Settings {
            shown_title_name: Some("Title".to_string()),
            shown_column_names: Some(vec!["Title".to_string(), "Notes".to_string(), "Name".to_string()]),
            ..Default::default()
        };
        let layout = CardLayout::resolve(&settings, &cols);
        assert_eq!(names(&layout.fields), vec!["Name", "Notes"]);
    }

    #[test]
    fn test_body_excludes_fallback_title() {
        let cols = columns();
        let settings = Settings {
            shown_title_name: Some("Gone".to_string()),
            shown_column_names: Some(vec!["Name".to_string(), "Notes".to_string()]),
            ..Default::default()
        };
        let layout = CardLayout::resolve(&settings, &cols);
        assert_eq!(layout.title.as_ref().map(|c| c.key.as_str()), Some("0000"));
        assert_eq!(names(&layout.fields), vec!["Notes"]);
    }

    #[test]
    fn test_no_shown_names_means_no_fields() {
        let layout = CardLayout::resolve(&Settings::default(), &columns());
        assert!(layout.fields.is_empty());
    }
}
