//! Expanded row modal.
//!
//! Opened by the gallery's row actions when a card title is clicked; shows
//! every column of the fresh row.

use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::{Column, FormatterMode, Row, Table, View};
use gallery_ui::{use_gallery, Button, ButtonVariant, CloseButton, EditorFormatter};

use super::gallery::default_view;

/// The row on display, its table and the view its formulas are read from
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedRow {
    pub row: Row,
    pub table: Arc<Table>,
    pub view: Option<View>,
}

impl ExpandedRow {
    /// Expand `row` under the same view the gallery cards use
    pub fn new(row: Row, table: Arc<Table>, views: &[View]) -> Self {
        Self {
            row,
            table,
            view: default_view(views),
        }
    }

    /// Primary column first, then the rest in table order
    pub fn columns(&self) -> (Option<Column>, Vec<Column>) {
        let title = self.table.primary_column().cloned();
        let rest = self
            .table
            .columns
            .iter()
            .filter(|c| !c.is_primary())
            .cloned()
            .collect();
        (title, rest)
    }
}

#[component]
pub fn ExpandedRowModal(expanded: ExpandedRow, on_close: EventHandler<()>) -> Element {
    let gallery = use_gallery();
    let (title, fields) = expanded.columns();
    let fields_label = gallery.t("Fields").to_string();
    let cancel_label = gallery.t("Cancel").to_string();
    let table_name = expanded.table.name.clone();

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "row-expand-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "row-expand",
                tabindex: "0",
                onkeydown: on_keydown,
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                div { class: "row-expand__header",
                    span { class: "row-expand__table", "{table_name}" }
                    div { class: "row-expand__title",
                        if let Some(title) = title {
                            EditorFormatter {
                                column: title,
                                row: expanded.row.clone(),
                                table: expanded.table.clone(),
                                selected_view: expanded.view.clone(),
                                mode: FormatterMode::RowTitle,
                            }
                        }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                h3 { class: "row-expand__section", "{fields_label}" }
                div { class: "row-expand__fields",
                    for column in fields {
                        div { key: "{column.key}", class: "row-expand__field",
                            div { class: "row-expand__field-name", "{column.name}" }
                            div { class: "row-expand__field-value",
                                EditorFormatter {
                                    column: column.clone(),
                                    row: expanded.row.clone(),
                                    table: expanded.table.clone(),
                                    selected_view: expanded.view.clone(),
                                }
                            }
                        }
                    }
                }

                div { class: "row-expand__footer",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}
