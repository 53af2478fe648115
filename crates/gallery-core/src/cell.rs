//! Cell type dispatch
//!
//! [`cell_content`] maps a column and a row to what the formatter adapter
//! should draw. It is a pure function: collaborator resolution state is
//! passed in, and nothing here touches the host.

use serde_json::Value;

use crate::display::{is_empty_list, is_falsy, string_list, value_to_text};
use crate::resolver::ResolveState;
use crate::types::{CellType, Collaborator, Column, Row, SelectOption, SystemField, View};

/// How an empty cell is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatterMode {
    /// Body field; empty cells keep an empty inline element for layout
    #[default]
    Field,
    /// Card title; empty cells read "Unnamed record"
    RowTitle,
}

/// Rendering strategy selected for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Render nothing (unknown type, or collaborator still resolving)
    Nothing,
    /// Render the empty placeholder
    Empty,
    Text(String),
    LongText(String),
    Number {
        value: Value,
        format: Option<String>,
    },
    Date {
        value: String,
        format: Option<String>,
    },
    Checkbox(bool),
    SingleSelect {
        option_id: String,
        options: Vec<SelectOption>,
    },
    MultipleSelect {
        option_ids: Vec<String>,
        options: Vec<SelectOption>,
    },
    /// Collaborator emails of a collaborator-list cell
    Collaborators(Vec<String>),
    Images(Vec<String>),
    Files(Vec<Value>),
    Geolocation(Value),
    Formula {
        value: Value,
        result_type: Option<String>,
    },
    /// Linked rows are resolved by the link formatter itself
    Link,
    Creator(Collaborator),
    LastModifier(Collaborator),
    CTime(String),
    MTime(String),
}

/// Select the rendering strategy for `row[column.key]`.
///
/// `collaborator` is the resolution state of the cell, only consulted for
/// creator / last-modifier columns.
pub fn cell_content(
    column: &Column,
    row: &Row,
    view: Option<&View>,
    collaborator: &ResolveState,
) -> CellContent {
    let value = row.get(&column.key);
    let data = &column.data;

    match &column.column_type {
        CellType::Text => scalar(value, |v| CellContent::Text(value_to_text(v))),
        CellType::LongText => scalar(value, |v| CellContent::LongText(long_text(v))),
        CellType::Number => scalar(value, |v| CellContent::Number {
            value: v.clone(),
            format: data.format.clone(),
        }),
        CellType::Date => scalar(value, |v| CellContent::Date {
            value: value_to_text(v),
            format: data.format.clone(),
        }),
        CellType::Checkbox => CellContent::Checkbox(!is_falsy(value)),
        CellType::SingleSelect => scalar(value, |v| CellContent::SingleSelect {
            option_id: value_to_text(v),
            options: data.options.clone(),
        }),
        CellType::MultipleSelect => list(value, |v| CellContent::MultipleSelect {
            option_ids: string_list(Some(v)),
            options: data.options.clone(),
        }),
        CellType::Collaborator => {
            list(value, |v| CellContent::Collaborators(string_list(Some(v))))
        }
        CellType::Image => list(value, |v| CellContent::Images(string_list(Some(v)))),
        CellType::File => list(value, |v| match v {
            Value::Array(items) => CellContent::Files(items.clone()),
            other => CellContent::Files(vec![other.clone()]),
        }),
        CellType::Geolocation => scalar(value, |v| CellContent::Geolocation(v.clone())),
        CellType::CTime => match row.ctime() {
            Some(ts) => CellContent::CTime(ts.to_string()),
            None => CellContent::Empty,
        },
        CellType::MTime => match row.mtime() {
            Some(ts) => CellContent::MTime(ts.to_string()),
            None => CellContent::Empty,
        },
        CellType::Creator => collaborator_cell(row, SystemField::Creator, collaborator),
        CellType::LastModifier => collaborator_cell(row, SystemField::LastModifier, collaborator),
        CellType::Formula => {
            let computed = view.and_then(|v| v.formula_value(row.id(), &column.key));
            scalar(computed, |v| CellContent::Formula {
                value: v.clone(),
                result_type: data.result_type.clone(),
            })
        }
        CellType::Link => CellContent::Link,
        CellType::Other(_) => CellContent::Nothing,
    }
}

fn scalar(value: Option<&Value>, render: impl FnOnce(&Value) -> CellContent) -> CellContent {
    match value {
        Some(v) if !is_falsy(Some(v)) => render(v),
        _ => CellContent::Empty,
    }
}

fn list(value: Option<&Value>, render: impl FnOnce(&Value) -> CellContent) -> CellContent {
    match value {
        Some(v) if !is_empty_list(Some(v)) => render(v),
        _ => CellContent::Empty,
    }
}

// Long text is stored either as a string or as {text, preview, ...}.
fn long_text(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .get("text")
            .or_else(|| map.get("preview"))
            .map(value_to_text)
            .unwrap_or_default(),
        other => value_to_text(other),
    }
}

fn collaborator_cell(row: &Row, field: SystemField, state: &ResolveState) -> CellContent {
    if row.system_value(field).is_none() {
        return CellContent::Empty;
    }
    match state {
        ResolveState::Unresolved | ResolveState::Resolving(_) => CellContent::Nothing,
        ResolveState::Resolved(None) => CellContent::Empty,
        ResolveState::Resolved(Some(c)) => match field {
            SystemField::Creator => CellContent::Creator(c.clone()),
            _ => CellContent::LastModifier(c.clone()),
        },
    }
}
