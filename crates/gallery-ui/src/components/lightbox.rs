//! Image Preview Lightbox
//!
//! Full-screen overlay over one image column. Navigation wraps in both
//! directions; the owning card holds the index (see
//! [`gallery_core::Lightbox`]).

use dioxus::prelude::*;

use super::button::{CloseButton, IconButton};

/// What a key press inside the lightbox does
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LightboxKey {
    Prev,
    Next,
    Close,
}

impl LightboxKey {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(LightboxKey::Prev),
            Key::ArrowRight => Some(LightboxKey::Next),
            Key::Escape => Some(LightboxKey::Close),
            _ => None,
        }
    }
}

/// "2 / 5" position label
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

#[component]
pub fn ImagePreviewLightbox(
    /// All images of the column
    image_items: Vec<String>,
    /// Index of the image on screen
    image_index: usize,
    close_image_popup: EventHandler<()>,
    move_to_prev_image: EventHandler<()>,
    move_to_next_image: EventHandler<()>,
) -> Element {
    let Some(current) = image_items.get(image_index).cloned() else {
        return VNode::empty();
    };
    let total = image_items.len();
    let counter = counter_label(image_index, total);

    let on_keydown = move |evt: KeyboardEvent| match LightboxKey::from_key(&evt.key()) {
        Some(LightboxKey::Prev) => move_to_prev_image.call(()),
        Some(LightboxKey::Next) => move_to_next_image.call(()),
        Some(LightboxKey::Close) => close_image_popup.call(()),
        None => {}
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            onkeydown: on_keydown,
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| close_image_popup.call(()),

            div { class: "lightbox-toolbar",
                span { class: "lightbox-counter", "{counter}" }
                CloseButton { onclick: move |_| close_image_popup.call(()) }
            }

            if total > 1 {
                IconButton {
                    onclick: move |_| move_to_prev_image.call(()),
                    aria_label: "Previous image".to_string(),
                    class: "lightbox-nav lightbox-nav--prev".to_string(),
                    "\u{2039}"
                }
            }

            img {
                key: "{current}",
                class: "lightbox-image",
                src: "{current}",
                alt: "",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }

            if total > 1 {
                IconButton {
                    onclick: move |_| move_to_next_image.call(()),
                    aria_label: "Next image".to_string(),
                    class: "lightbox-nav lightbox-nav--next".to_string(),
                    "\u{203A}"
                }
            }
        }
    }
}
