//! Editor Formatter Component
//!
//! Adapter between a column and the formatter widgets: picks the widget for
//! the column type and, for creator / last-modifier columns, resolves the
//! collaborator behind the row's system field before drawing anything.

use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::{
    cell_content, CellContent, CollaboratorResolver, Column, FormatterMode, Resolution, Row,
    Table, View,
};

use super::formatters::*;
use crate::context::use_gallery;

/// Render one cell of `row`
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     EditorFormatter {
///         column: title_column,
///         row: row.clone(),
///         table: table.clone(),
///         selected_view: view.clone(),
///         mode: FormatterMode::RowTitle,
///     }
/// }
/// ```
#[component]
pub fn EditorFormatter(
    /// Column to render
    column: Column,
    /// Canonical row (keyed by column key)
    row: Row,
    /// Table the row belongs to
    table: Arc<Table>,
    /// View carrying computed formula values
    #[props(default)]
    selected_view: Option<View>,
    /// Title or body rendering
    #[props(default)]
    mode: FormatterMode,
) -> Element {
    let gallery = use_gallery();
    let mut resolver = use_signal(CollaboratorResolver::new);

    // Some(value) only for creator / last-modifier columns
    let watched = column
        .column_type
        .collaborator_field()
        .map(|field| row.system_value(field).map(str::to_string));

    let host = gallery.host.clone();
    let collaborators = gallery.collaborators.clone();
    use_effect(use_reactive((&watched,), move |(watched,)| {
        let Some(value) = watched else {
            return;
        };
        let step = resolver
            .write()
            .begin(value.as_deref(), &collaborators, &host.get_media_url());
        if let Resolution::Lookup { request, email } = step {
            let host = Arc::clone(&host);
            spawn(async move {
                let result = host.get_user_common_info(&email).await;
                resolver.write().complete(request, result);
            });
        }
    }));

    // State left over from the previous identifier renders as unresolved
    let current = watched.clone().flatten();
    let content = cell_content(
        &column,
        &row,
        selected_view.as_ref(),
        resolver.read().state_for(current.as_deref()),
    );

    match content {
        CellContent::Nothing => VNode::empty(),
        CellContent::Empty => rsx! {
            EmptyFormatter { mode: mode }
        },
        CellContent::Text(value) => rsx! {
            TextFormatter { value: value, container_class: "gallery-text-editor".to_string() }
        },
        CellContent::LongText(value) => rsx! {
            LongTextFormatter { value: value }
        },
        CellContent::Number { value, format } => rsx! {
            NumberFormatter { value: value, format: format }
        },
        CellContent::Date { value, format } => rsx! {
            DateFormatter { value: value, format: format }
        },
        CellContent::Checkbox(value) => rsx! {
            CheckboxFormatter { value: value }
        },
        CellContent::SingleSelect { option_id, options } => rsx! {
            SingleSelectFormatter { value: option_id, options: options }
        },
        CellContent::MultipleSelect { option_ids, options } => rsx! {
            MultipleSelectFormatter { value: option_ids, options: options }
        },
        CellContent::Collaborators(emails) => rsx! {
            CollaboratorFormatter { value: emails, collaborators: gallery.collaborators.clone() }
        },
        CellContent::Images(urls) => rsx! {
            ImageFormatter { value: urls, is_sample: true }
        },
        CellContent::Files(files) => rsx! {
            FileFormatter { value: files, is_sample: true }
        },
        CellContent::Geolocation(value) => rsx! {
            GeolocationFormatter { value: value, container_class: "gallery-text-editor".to_string() }
        },
        CellContent::Formula { value, result_type } => rsx! {
            FormulaFormatter {
                value: value,
                result_type: result_type,
                container_class: "gallery-formula-container".to_string(),
            }
        },
        CellContent::Link => rsx! {
            LinkFormatter {
                column: column.clone(),
                row: row.clone(),
                current_table_id: table.id.clone(),
                container_class: "gallery-link-container".to_string(),
            }
        },
        CellContent::Creator(collaborator) => rsx! {
            CreatorFormatter { collaborator: collaborator }
        },
        CellContent::LastModifier(collaborator) => rsx! {
            LastModifierFormatter { collaborator: collaborator }
        },
        CellContent::CTime(value) => rsx! {
            CTimeFormatter { value: value }
        },
        CellContent::MTime(value) => rsx! {
            MTimeFormatter { value: value }
        },
    }
}
