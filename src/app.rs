use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::{GalleryContext, GalleryHost, MemoryHost, Row, RowActions, Table, View};
use gallery_ui::use_gallery_provider;

use crate::config;
use crate::pages::{ExpandedRow, ExpandedRowModal, Gallery, TableGallery};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Gallery of the configured (or first) table
/// - `/tables/:id` - Gallery of a specific table
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/tables/:id")]
    TableGallery { id: String },
}

/// Row expansion backed by the app's expanded-row signal
struct SignalRowActions {
    expanded: Signal<Option<ExpandedRow>>,
    views: Vec<View>,
}

impl RowActions for SignalRowActions {
    fn expand_row(&self, row: &Row, table: &Table) {
        let mut expanded = self.expanded;
        expanded.set(Some(ExpandedRow::new(
            row.clone(),
            Arc::new(table.clone()),
            &self.views,
        )));
    }
}

/// Root application component.
///
/// Provides global styles, the gallery context and routing.
#[component]
pub fn App() -> Element {
    let settings = config::config();
    let host: Arc<MemoryHost> = use_hook(config::host);
    let mut expanded: Signal<Option<ExpandedRow>> = use_signal(|| None);

    use_context_provider(|| Arc::clone(&host));
    use_gallery_provider(|| {
        let shared: Arc<dyn GalleryHost> = host.clone();
        let base = host.base();
        let actions = SignalRowActions {
            expanded,
            views: base.views,
        };
        GalleryContext::new(shared, Rc::new(actions))
            .with_collaborators(base.collaborators)
            .with_locale(settings.locale)
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        if let Some(open) = expanded() {
            ExpandedRowModal {
                expanded: open,
                on_close: move |_| expanded.set(None),
            }
        }
    }
}
