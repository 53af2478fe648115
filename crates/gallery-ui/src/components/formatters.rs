//! Cell Formatter Widgets
//!
//! One component per cell type. Each takes an already-dispatched value
//! (see [`gallery_core::cell_content`]) and draws it; emptiness is decided
//! before these are reached.

use dioxus::prelude::*;
use gallery_core::display::{
    file_name, format_date, format_formula, format_geolocation, format_number, format_timestamp,
};
use gallery_core::{
    Collaborator, Column, FormatterMode, Locale, Row, SelectOption, UNNAMED_RECORD,
};
use serde_json::Value;

use crate::context::use_gallery;

/// Placeholder for an empty cell.
///
/// Title cells read "Unnamed record"; body cells keep an empty inline box so
/// the card layout does not collapse.
#[component]
pub fn EmptyFormatter(#[props(default)] mode: FormatterMode) -> Element {
    let gallery = use_gallery();

    match empty_label(mode, gallery.locale) {
        Some(label) => rsx! {
            span { class: "row-title-empty", "{label}" }
        },
        None => rsx! {
            span { class: "row-cell-empty d-inline-block" }
        },
    }
}

/// Placeholder text for an empty cell; only titles get one
pub fn empty_label(mode: FormatterMode, locale: Locale) -> Option<&'static str> {
    match mode {
        FormatterMode::RowTitle => Some(locale.get(UNNAMED_RECORD)),
        FormatterMode::Field => None,
    }
}

#[component]
pub fn TextFormatter(value: String, #[props(default)] container_class: String) -> Element {
    rsx! {
        div { class: "text-formatter {container_class}", "{value}" }
    }
}

#[component]
pub fn LongTextFormatter(value: String) -> Element {
    rsx! {
        div { class: "long-text-formatter", "{value}" }
    }
}

#[component]
pub fn NumberFormatter(value: Value, #[props(default)] format: Option<String>) -> Element {
    let text = format_number(&value, format.as_deref());
    rsx! {
        div { class: "number-formatter", "{text}" }
    }
}

#[component]
pub fn DateFormatter(value: String, #[props(default)] format: Option<String>) -> Element {
    let text = format_date(&value, format.as_deref());
    rsx! {
        div { class: "date-formatter", "{text}" }
    }
}

#[component]
pub fn CheckboxFormatter(value: bool) -> Element {
    rsx! {
        span {
            class: if value { "checkbox-formatter checked" } else { "checkbox-formatter" },
            if value { "\u{2611}" } else { "\u{2610}" }
        }
    }
}

/// Options of `options` referenced by `ids`, in `ids` order; unknown ids are skipped
pub fn selected_options(ids: &[String], options: &[SelectOption]) -> Vec<SelectOption> {
    ids.iter()
        .filter_map(|id| options.iter().find(|option| option.id == *id))
        .cloned()
        .collect()
}

#[component]
fn SelectChip(option: SelectOption) -> Element {
    let color = option.color.clone().unwrap_or_else(|| "#eaeaea".to_string());
    rsx! {
        span {
            class: "select-option",
            style: "background-color: {color}",
            title: "{option.name}",
            "{option.name}"
        }
    }
}

#[component]
pub fn SingleSelectFormatter(value: String, options: Vec<SelectOption>) -> Element {
    let selected = selected_options(std::slice::from_ref(&value), &options);
    rsx! {
        div { class: "select-formatter",
            for option in selected {
                SelectChip { key: "{option.id}", option: option.clone() }
            }
        }
    }
}

#[component]
pub fn MultipleSelectFormatter(value: Vec<String>, options: Vec<SelectOption>) -> Element {
    let selected = selected_options(&value, &options);
    rsx! {
        div { class: "select-formatter multiple",
            for option in selected {
                SelectChip { key: "{option.id}", option: option.clone() }
            }
        }
    }
}

/// Avatar and name of one collaborator
#[component]
pub fn CollaboratorChip(collaborator: Collaborator) -> Element {
    rsx! {
        span { class: "collaborator",
            if !collaborator.avatar_url.is_empty() {
                img {
                    class: "collaborator-avatar",
                    src: "{collaborator.avatar_url}",
                    alt: "{collaborator.name}",
                }
            }
            span { class: "collaborator-name", "{collaborator.name}" }
        }
    }
}

/// Collaborators for `emails`; unknown emails are shown as bare names
pub fn collaborators_for(emails: &[String], known: &[Collaborator]) -> Vec<Collaborator> {
    emails
        .iter()
        .map(|email| {
            known
                .iter()
                .find(|c| c.has_email(email))
                .cloned()
                .unwrap_or_else(|| Collaborator {
                    name: email.clone(),
                    email: Some(email.clone()),
                    avatar_url: String::new(),
                })
        })
        .collect()
}

#[component]
pub fn CollaboratorFormatter(value: Vec<String>, collaborators: Vec<Collaborator>) -> Element {
    let shown = collaborators_for(&value, &collaborators);
    rsx! {
        div { class: "collaborators-formatter",
            for collaborator in shown {
                CollaboratorChip { collaborator: collaborator.clone() }
            }
        }
    }
}

#[component]
pub fn CreatorFormatter(collaborator: Collaborator) -> Element {
    rsx! {
        div { class: "creator-formatter",
            CollaboratorChip { collaborator: collaborator }
        }
    }
}

#[component]
pub fn LastModifierFormatter(collaborator: Collaborator) -> Element {
    rsx! {
        div { class: "last-modifier-formatter",
            CollaboratorChip { collaborator: collaborator }
        }
    }
}

/// "+N" badge for items beyond the first in sample mode
pub fn more_label(total: usize) -> Option<String> {
    (total > 1).then(|| format!("+{}", total - 1))
}

#[component]
pub fn ImageFormatter(value: Vec<String>, #[props(default = false)] is_sample: bool) -> Element {
    let total = value.len();
    let shown: Vec<String> = if is_sample {
        value.into_iter().take(1).collect()
    } else {
        value
    };
    let more = if is_sample { more_label(total) } else { None };

    rsx! {
        div { class: "image-formatter",
            for url in shown {
                img { key: "{url}", class: "image-formatter__thumb", src: "{url}", "loading": "lazy" }
            }
            if let Some(more) = more {
                span { class: "image-formatter__more", "{more}" }
            }
        }
    }
}

#[component]
pub fn FileFormatter(value: Vec<Value>, #[props(default = false)] is_sample: bool) -> Element {
    let total = value.len();
    let names: Vec<String> = value
        .iter()
        .take(if is_sample { 1 } else { total })
        .map(file_name)
        .collect();
    let more = if is_sample { more_label(total) } else { None };

    rsx! {
        div { class: "file-formatter",
            for name in names {
                span { class: "file-item", title: "{name}", "{name}" }
            }
            if let Some(more) = more {
                span { class: "file-formatter__more", "{more}" }
            }
        }
    }
}

#[component]
pub fn GeolocationFormatter(value: Value, #[props(default)] container_class: String) -> Element {
    let text = format_geolocation(&value);
    rsx! {
        div { class: "geolocation-formatter {container_class}", "{text}" }
    }
}

#[component]
pub fn FormulaFormatter(
    value: Value,
    #[props(default)] result_type: Option<String>,
    #[props(default)] container_class: String,
) -> Element {
    let text = format_formula(&value, result_type.as_deref());
    rsx! {
        div { class: "formula-formatter {container_class}", "{text}" }
    }
}

#[component]
pub fn CTimeFormatter(value: String) -> Element {
    let text = format_timestamp(&value);
    rsx! {
        div { class: "ctime-formatter", "{text}" }
    }
}

#[component]
pub fn MTimeFormatter(value: String) -> Element {
    let text = format_timestamp(&value);
    rsx! {
        div { class: "mtime-formatter", "{text}" }
    }
}

/// Linked rows of a link cell, resolved through the host's link adapter
#[component]
pub fn LinkFormatter(
    column: Column,
    row: Row,
    current_table_id: String,
    #[props(default)] container_class: String,
) -> Element {
    let gallery = use_gallery();
    let values = gallery
        .link_meta()
        .linked_display_values(&column, &row, &current_table_id);

    rsx! {
        div { class: "link-formatter {container_class}",
            for (index, value) in values.into_iter().enumerate() {
                span { key: "{index}", class: "link-item", "{value}" }
            }
        }
    }
}
