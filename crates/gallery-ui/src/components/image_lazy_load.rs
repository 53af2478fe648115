//! Lazy Image Loader
//!
//! Card cover image with loading and error states. The webview defers the
//! fetch until the card scrolls into view.

use dioxus::prelude::*;
use tracing::debug;

/// Load state of one image element
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageLoadState {
    pub fn class(&self) -> &'static str {
        match self {
            ImageLoadState::Loading => "gallery-image is-loading",
            ImageLoadState::Loaded => "gallery-image",
            ImageLoadState::Failed => "gallery-image is-failed",
        }
    }
}

/// Lazily loaded cover image
///
/// Callers key this component by URL so a new image starts from `Loading`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ImageLazyLoad {
///         key: "{url}",
///         image_url: url.clone(),
///         on_image_click: move |index| lightbox.set(Lightbox::open(images.clone(), index)),
///     }
/// }
/// ```
#[component]
pub fn ImageLazyLoad(
    /// Image URL
    image_url: String,
    /// Called with the image index (always 0 for a cover)
    on_image_click: EventHandler<usize>,
) -> Element {
    let mut state = use_signal(ImageLoadState::default);
    let url = image_url.clone();

    rsx! {
        div {
            class: "gallery-image-container",
            onclick: move |_| on_image_click.call(0),

            if state() == ImageLoadState::Loading {
                div { class: "gallery-image__loading",
                    div { class: "loading-spinner" }
                }
            }
            if state() == ImageLoadState::Failed {
                div { class: "gallery-image__error", "\u{26A0}" }
            }
            img {
                class: "{state().class()}",
                src: "{image_url}",
                alt: "",
                "loading": "lazy",
                onload: move |_| state.set(ImageLoadState::Loaded),
                onerror: move |_| {
                    debug!(url = %url, "Gallery image failed to load");
                    state.set(ImageLoadState::Failed);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_classes() {
        assert_eq!(ImageLoadState::default(), ImageLoadState::Loading);
        assert!(ImageLoadState::Loading.class().contains("is-loading"));
        assert_eq!(ImageLoadState::Loaded.class(), "gallery-image");
        assert!(ImageLoadState::Failed.class().contains("is-failed"));
    }
}
