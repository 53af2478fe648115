//! Gallery Card Component
//!
//! One row of a table drawn as a card: cover image, title and the body
//! fields chosen by the view settings. Clicking the title expands the row;
//! clicking the cover opens the image lightbox.

use dioxus::prelude::*;
use gallery_core::{CardLayout, Column, FormatterMode, GalleryItem, Lightbox, Settings, View};
use tracing::{debug, info};

use super::editor_formatter::EditorFormatter;
use super::image_lazy_load::ImageLazyLoad;
use super::lightbox::ImagePreviewLightbox;
use crate::context::use_gallery;

/// Card width used when the page does not set one
pub const DEFAULT_CARD_WIDTH: u32 = 240;

/// Inline style for a card of `width` pixels
pub fn card_style(width: u32, margin_right_none: bool) -> String {
    if margin_right_none {
        format!("width: {}px; margin-right: 0", width)
    } else {
        format!("width: {}px", width)
    }
}

/// A single gallery card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, item) in items.iter().enumerate() {
///         GalleryViewItem {
///             key: "{item.id()}",
///             gallery_item: item.clone(),
///             settings: settings.clone(),
///             current_columns: columns.clone(),
///             item_margin_right_none: (i + 1) % 4 == 0,
///         }
///     }
/// }
/// ```
#[component]
pub fn GalleryViewItem(
    gallery_item: GalleryItem,
    settings: Settings,
    /// Visible columns of the table, in table order
    current_columns: Vec<Column>,
    #[props(default)]
    selected_view: Option<View>,
    #[props(default = DEFAULT_CARD_WIDTH)]
    width: u32,
    /// Drop the right margin (last card of a grid row)
    #[props(default = false)]
    item_margin_right_none: bool,
) -> Element {
    let gallery = use_gallery();
    let mut lightbox = use_signal(|| Option::<Lightbox>::None);

    let layout = CardLayout::resolve(&settings, &current_columns);
    let table = gallery_item.table.clone();

    let row = match gallery.host.get_row(&table, gallery_item.id()) {
        Some(row) => row,
        None => {
            debug!(table = %table.id, row = %gallery_item.id(), "Row missing from host, using card copy");
            gallery_item.to_row()
        }
    };

    let images = layout
        .image
        .as_ref()
        .map(|column| gallery_item.images(column))
        .unwrap_or_default();
    let cover = images.first().cloned();
    let image_count = images.len();

    let on_title_click = {
        let gallery = gallery.clone();
        let table = table.clone();
        let row_id = gallery_item.id().to_string();
        move |_: MouseEvent| {
            info!(table = %table.id, row = %row_id, "Expanding gallery row");
            gallery.expand_row(&table, &row_id);
        }
    };

    let style = card_style(width, item_margin_right_none);

    rsx! {
        div { class: "gallery-item", style: "{style}",
            div { class: "gallery-item__image",
                if let Some(url) = cover {
                    ImageLazyLoad {
                        key: "{url}",
                        image_url: url.clone(),
                        on_image_click: move |index: usize| {
                            lightbox.set(Lightbox::open(images.clone(), index));
                        },
                    }
                    if image_count > 1 {
                        span { class: "gallery-item__image-count", "{image_count}" }
                    }
                } else {
                    div { class: "gallery-item__image-empty" }
                }
            }

            div { class: "gallery-item__title", onclick: on_title_click,
                if let Some(title) = layout.title.clone() {
                    EditorFormatter {
                        column: title,
                        row: row.clone(),
                        table: table.clone(),
                        selected_view: selected_view.clone(),
                        mode: FormatterMode::RowTitle,
                    }
                }
            }

            div { class: "gallery-item__body",
                for column in layout.fields.iter() {
                    div { key: "{column.key}", class: "gallery-item__field",
                        div { class: "gallery-item__field-name", title: "{column.name}", "{column.name}" }
                        div { class: "gallery-item__field-value",
                            EditorFormatter {
                                column: column.clone(),
                                row: row.clone(),
                                table: table.clone(),
                                selected_view: selected_view.clone(),
                            }
                        }
                    }
                }
            }

            if let Some(open) = lightbox() {
                ImagePreviewLightbox {
                    image_items: open.images().to_vec(),
                    image_index: open.index(),
                    close_image_popup: move |_| lightbox.set(None),
                    move_to_prev_image: move |_| lightbox.with_mut(|open| {
                        if let Some(open) = open {
                            open.prev();
                        }
                    }),
                    move_to_next_image: move |_| lightbox.with_mut(|open| {
                        if let Some(open) = open {
                            open.next();
                        }
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_margin() {
        assert_eq!(card_style(240, false), "width: 240px");
        assert_eq!(card_style(300, true), "width: 300px; margin-right: 0");
    }
}
