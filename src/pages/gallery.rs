//! Gallery page: table tabs over a grid of cards.

use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::{GalleryItem, MemoryHost, Table, View};
use gallery_ui::{use_gallery, GalleryViewItem, TableTab, TableTabs};

use crate::app::Route;
use crate::config;

/// Cards per grid row; the last card of a row drops its right margin
const CARDS_PER_ROW: usize = 4;

/// Table to show: by id, else the configured name, else the first table
pub fn pick_table(tables: &[Table], id: Option<&str>, name: Option<&str>) -> Option<Table> {
    let by_id = id.and_then(|id| tables.iter().find(|t| t.id == id));
    let by_name = || name.and_then(|name| tables.iter().find(|t| t.name == name));
    by_id.or_else(by_name).or_else(|| tables.first()).cloned()
}

/// View whose computed formula values cards and the expanded row show
pub fn default_view(views: &[View]) -> Option<View> {
    views.first().cloned()
}

#[component]
pub fn Gallery() -> Element {
    rsx! {
        GalleryPage {}
    }
}

#[component]
pub fn TableGallery(id: String) -> Element {
    rsx! {
        GalleryPage { table_id: id }
    }
}

#[component]
pub fn GalleryPage(#[props(default)] table_id: Option<String>) -> Element {
    let gallery = use_gallery();
    let host = use_context::<Arc<MemoryHost>>();
    let navigator = use_navigator();
    let app_config = config::config();

    let base = host.base();
    let Some(table) = pick_table(&base.tables, table_id.as_deref(), app_config.table.as_deref())
    else {
        return rsx! {
            div { class: "gallery-page",
                p { class: "gallery-empty", "No tables" }
            }
        };
    };

    let tabs = TableTab::from_tables(&base.tables);
    let table = Arc::new(table);
    let items: Vec<(String, GalleryItem)> = table
        .rows
        .iter()
        .map(|row| {
            let item = GalleryItem::from_row(&table, row);
            (format!("{}-{}", table.id, item.id()), item)
        })
        .collect();
    let selected_view = default_view(&base.views);
    let heading = gallery.t("Gallery").to_string();

    rsx! {
        div { class: "gallery-page",
            header { class: "gallery-header",
                h1 { class: "gallery-heading", "{heading}" }
                TableTabs {
                    tabs: tabs,
                    selected: table.id.clone(),
                    on_select: move |id: String| {
                        navigator.push(Route::TableGallery { id });
                    },
                }
            }
            div { class: "gallery-grid",
                for (index, (key, item)) in items.into_iter().enumerate() {
                    GalleryViewItem {
                        key: "{key}",
                        gallery_item: item,
                        settings: base.settings.clone(),
                        current_columns: table.columns.clone(),
                        selected_view: selected_view.clone(),
                        width: app_config.card_width,
                        item_margin_right_none: (index + 1) % CARDS_PER_ROW == 0,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<Table> {
        serde_json::from_str(
            r#"[{"_id": "t1", "name": "Books"}, {"_id": "t2", "name": "Authors"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn table_picked_by_id_then_name_then_first() {
        let tables = tables();
        let pick = |id, name| pick_table(&tables, id, name).map(|t| t.id);
        assert_eq!(pick(Some("t2"), Some("Books")), Some("t2".to_string()));
        assert_eq!(pick(None, Some("Authors")), Some("t2".to_string()));
        assert_eq!(pick(Some("zz"), Some("nope")), Some("t1".to_string()));
        assert_eq!(pick(None, None), Some("t1".to_string()));
        assert_eq!(pick_table(&[], None, None), None);
    }
}
