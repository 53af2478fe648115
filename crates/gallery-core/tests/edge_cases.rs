//! Edge case and boundary condition tests
//!
//! Card layout, dispatch and host behavior with missing, malformed or
//! unusual input.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;
use std::sync::Arc;

use gallery_core::{
    cell_content, Base, CardLayout, CellContent, CellType, Column, ColumnData, GalleryContext,
    GalleryError, GalleryItem, Link, LinkMetaData, Locale, MemoryHost, ResolveState, Row,
    RowActions, Settings, Table, View, UNNAMED_RECORD,
};
use serde_json::json;

fn photos() -> Table {
    Table {
        id: "t1".to_string(),
        name: "Photos".to_string(),
        columns: vec![
            Column::new("0000", "Name", CellType::Text),
            Column::new("img", "Pictures", CellType::Image),
            Column::new("lnk", "Places", CellType::Link).with_data(ColumnData {
                link_id: Some("l1".to_string()),
                table_id: Some("t1".to_string()),
                other_table_id: Some("t2".to_string()),
                display_column_key: Some("0000".to_string()),
                ..Default::default()
            }),
        ],
        rows: vec![Row::new("r1")
            .with("0000", json!("Sunset"))
            .with("img", json!(["a.png", "b.png", "c.png"]))],
    }
}

fn places() -> Table {
    Table {
        id: "t2".to_string(),
        name: "Places".to_string(),
        columns: vec![Column::new("0000", "Place", CellType::Text)],
        rows: vec![
            Row::new("p1").with("0000", json!("Lisbon")),
            Row::new("p2").with("0000", json!("")),
        ],
    }
}

fn base() -> Base {
    Base {
        media_url: "https://cloud.example/media".to_string(),
        tables: vec![photos(), places()],
        links: vec![Link {
            id: "l1".to_string(),
            table1_id: "t1".to_string(),
            table2_id: "t2".to_string(),
            table1_table2_map: HashMap::from([(
                "r1".to_string(),
                vec!["p1".to_string(), "p2".to_string()],
            )]),
            table2_table1_map: HashMap::from([("p1".to_string(), vec!["r1".to_string()])]),
        }],
        ..Default::default()
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Every unknown type renders nothing, whatever the value
#[test]
fn test_unknown_types_render_nothing() {
    let row = Row::new("r1").with("x", json!("value"));
    for name in ["rate", "duration", "button", "", "TEXT"] {
        let column = Column::new("x", "X", CellType::from(name));
        assert_eq!(
            cell_content(&column, &row, None, &ResolveState::Unresolved),
            CellContent::Nothing,
            "type {:?}",
            name
        );
    }
}

/// A column key absent from the row renders the placeholder
#[test]
fn test_missing_key_renders_empty() {
    let row = Row::new("r1");
    for name in ["text", "number", "date", "single-select", "geolocation", "long-text"] {
        let column = Column::new("x", "X", CellType::from(name));
        assert_eq!(
            cell_content(&column, &row, None, &ResolveState::Unresolved),
            CellContent::Empty,
            "type {}",
            name
        );
    }
}

/// Formula column with a view whose formula_rows lacks the row
#[test]
fn test_formula_without_row_entry() {
    let view = View {
        id: "v1".to_string(),
        name: "Default".to_string(),
        formula_rows: Some(HashMap::new()),
    };
    let column = Column::new("f", "F", CellType::Formula);
    assert_eq!(
        cell_content(&column, &Row::new("r1"), Some(&view), &ResolveState::Unresolved),
        CellContent::Empty
    );
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_table_without_primary_or_image() {
    let columns = vec![Column::new("a1", "Notes", CellType::LongText)];
    let layout = CardLayout::resolve(&Settings::default(), &columns);
    assert!(layout.image.is_none());
    assert!(layout.title.is_none());
    assert!(layout.fields.is_empty());
}

/// A configured image name that matches nothing shows no image, even when
/// another image column exists.
#[test]
fn test_unmatched_image_name_shows_no_image() {
    let settings = Settings {
        shown_image_name: Some("Gone".to_string()),
        ..Default::default()
    };
    let layout = CardLayout::resolve(&settings, &photos().columns);
    assert!(layout.image.is_none());
}

#[test]
fn test_empty_title_name_uses_primary() {
    let settings = Settings {
        shown_title_name: Some(String::new()),
        ..Default::default()
    };
    let layout = CardLayout::resolve(&settings, &photos().columns);
    assert_eq!(layout.title.map(|c| c.key), Some("0000".to_string()));
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_linked_display_values_skip_empty() {
    let host = Arc::new(MemoryHost::new(base()));
    let link_meta = LinkMetaData::new(host);
    let table = photos();
    let values = link_meta.linked_display_values(&table.columns[2], &table.rows[0], "t1");
    assert_eq!(values, vec!["Lisbon"]);
}

#[test]
fn test_linked_display_values_from_other_side() {
    let host = Arc::new(MemoryHost::new(base()));
    let link_meta = LinkMetaData::new(host);
    let column = photos().columns[2].clone();
    let values = link_meta.linked_display_values(&column, &Row::new("p1"), "t2");
    assert_eq!(values, vec!["Sunset"]);
}

#[test]
fn test_missing_display_column_uses_primary() {
    let host = Arc::new(MemoryHost::new(base()));
    let link_meta = LinkMetaData::new(host);
    let mut column = photos().columns[2].clone();
    column.data.display_column_key = Some("gone".to_string());
    let values = link_meta.linked_display_values(&column, &photos().rows[0], "t1");
    assert_eq!(values, vec!["Lisbon"]);
}

#[test]
fn test_link_without_descriptor() {
    let host = Arc::new(MemoryHost::new(base()));
    let link_meta = LinkMetaData::new(host);
    let column = Column::new("lnk", "Broken", CellType::Link);
    assert!(link_meta
        .linked_display_values(&column, &Row::new("r1"), "t1")
        .is_empty());
}

#[test]
fn test_expand_linked_row_is_never_available() {
    let link_meta = LinkMetaData::new(Arc::new(MemoryHost::new(base())));
    assert!(!link_meta.expand_linked_table_row(&Row::new("r1"), "t1"));
    assert!(!link_meta.expand_linked_table_row(&Row::new("p1"), "t2"));
    assert!(!link_meta.expand_linked_table_row(&Row::default(), ""));
}

#[test]
fn test_linked_table_lookup() {
    let link_meta = LinkMetaData::new(Arc::new(MemoryHost::new(base())));
    assert_eq!(link_meta.get_linked_table("t2").map(|t| t.name), Some("Places".to_string()));
    assert!(link_meta.get_linked_table("t9").is_none());
}

// ============================================================================
// Context
// ============================================================================

#[derive(Default)]
struct RecordingActions {
    expanded: RefCell<Vec<(String, String)>>,
}

impl RowActions for RecordingActions {
    fn expand_row(&self, row: &Row, table: &Table) {
        self.expanded
            .borrow_mut()
            .push((row.id().to_string(), table.id.clone()));
    }
}

#[test]
fn test_expand_row_fetches_fresh_row() {
    let host = Arc::new(MemoryHost::new(base()));
    let actions = Rc::new(RecordingActions::default());
    let ctx = GalleryContext::new(host.clone(), actions.clone());

    let table = Arc::new(photos());
    let item = GalleryItem::from_row(&table, &table.rows[0]);
    host.upsert_row("t1", Row::new("r1").with("0000", json!("Updated")))
        .unwrap();

    assert!(ctx.expand_row(&item.table, item.id()));
    assert!(!ctx.expand_row(&item.table, "missing"));
    assert_eq!(
        actions.expanded.borrow().as_slice(),
        &[("r1".to_string(), "t1".to_string())]
    );
}

#[test]
fn test_context_localizes_placeholder() {
    let ctx = GalleryContext::new(
        Arc::new(MemoryHost::new(base())),
        Rc::new(RecordingActions::default()),
    )
    .with_locale(Locale::ZhCn);
    assert_eq!(ctx.t(UNNAMED_RECORD), "未命名记录");
}

// ============================================================================
// Base files
// ============================================================================

#[test]
fn test_load_base_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&base()).unwrap().as_bytes()).unwrap();

    let host = MemoryHost::load(file.path()).unwrap();
    assert_eq!(host.tables().len(), 2);
    assert_eq!(host.base(), base());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MemoryHost::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(GalleryError::Io(_))));
}
