//! Table Tabs Component
//!
//! Horizontal row of tabs, one per table of the base.

use dioxus::prelude::*;
use gallery_core::Table;

/// One tab: table id and display name
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TableTab {
    pub id: String,
    pub name: String,
}

impl TableTab {
    pub fn from_tables(tables: &[Table]) -> Vec<TableTab> {
        tables
            .iter()
            .map(|table| TableTab {
                id: table.id.clone(),
                name: table.name.clone(),
            })
            .collect()
    }
}

/// Properties for the TableTabs component
#[derive(Clone, PartialEq, Props)]
pub struct TableTabsProps {
    pub tabs: Vec<TableTab>,
    /// Id of the selected table
    pub selected: String,
    /// Called with the id of the clicked table
    pub on_select: EventHandler<String>,
}

/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| tabs[0].id.clone());
///
/// rsx! {
///     TableTabs {
///         tabs: tabs.clone(),
///         selected: selected(),
///         on_select: move |id| selected.set(id)
///     }
/// }
/// ```
#[component]
pub fn TableTabs(props: TableTabsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "table-tabs",
            role: "tablist",
            for tab in props.tabs.iter() {
                {
                    let id = tab.id.clone();
                    let is_selected = selected == tab.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.id}",
                            class: if is_selected { "table-tab selected" } else { "table-tab" },
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(id.clone()),
                            "{tab.name}"
                        }
                    }
                }
            }
        }
    }
}
