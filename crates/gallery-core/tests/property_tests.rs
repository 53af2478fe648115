//! Property-based tests for card layout and carousel navigation
//!
//! Uses proptest to verify invariants of column selection and lightbox
//! index arithmetic.

use gallery_core::lightbox::{wrap_next, wrap_prev};
use gallery_core::selection::calculate_columns;
use gallery_core::{CardLayout, CellType, Column, ColumnSetting, Lightbox, Settings};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn cell_type_strategy() -> impl Strategy<Value = CellType> {
    prop_oneof![
        Just(CellType::Text),
        Just(CellType::Image),
        Just(CellType::Number),
        Just(CellType::LongText),
        Just(CellType::Creator),
    ]
}

/// Columns with unique keys and names; the first one is the primary field
fn columns_strategy() -> impl Strategy<Value = Vec<Column>> {
    prop::collection::vec(cell_type_strategy(), 1..12).prop_map(|types| {
        types
            .into_iter()
            .enumerate()
            .map(|(i, t)| {
                let key = if i == 0 { "0000".to_string() } else { format!("k{}", i) };
                Column::new(key, format!("Column {}", i), t)
            })
            .collect()
    })
}

fn settings_strategy(max_index: usize) -> impl Strategy<Value = Settings> {
    (
        prop::option::of(0..max_index + 2),
        prop::collection::vec(0..max_index + 2, 0..max_index + 2),
        prop::option::of(prop::collection::vec((0..max_index + 2, any::<bool>()), 0..8)),
    )
        .prop_map(|(title, shown, configured)| Settings {
            shown_image_name: None,
            shown_title_name: title.map(|i| format!("Column {}", i)),
            shown_column_names: Some(shown.into_iter().map(|i| format!("Column {}", i)).collect()),
            columns: configured.map(|entries| {
                entries
                    .into_iter()
                    .map(|(i, shown)| ColumnSetting {
                        key: if i == 0 { "0000".to_string() } else { format!("k{}", i) },
                        shown: Some(shown),
                    })
                    .collect()
            }),
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// next and prev are inverse and always stay in range
    #[test]
    fn wrap_is_inverse(len in 1usize..50, index in 0usize..50) {
        let index = index % len;
        let next = wrap_next(index, len);
        let prev = wrap_prev(index, len);
        prop_assert!(next < len);
        prop_assert!(prev < len);
        prop_assert_eq!(wrap_prev(next, len), index);
        prop_assert_eq!(wrap_next(prev, len), index);
    }

    /// Stepping forward len times returns to the start
    #[test]
    fn lightbox_full_cycle(len in 1usize..20, start in 0usize..20) {
        let images: Vec<String> = (0..len).map(|i| format!("img{}.png", i)).collect();
        let mut lightbox = Lightbox::open(images, start % len).unwrap();
        let origin = lightbox.index();
        for _ in 0..len {
            lightbox.next();
        }
        prop_assert_eq!(lightbox.index(), origin);
        for _ in 0..len {
            lightbox.prev();
        }
        prop_assert_eq!(lightbox.index(), origin);
    }

    /// The resolved title never appears among the body fields
    #[test]
    fn title_never_in_body(
        (columns, settings) in columns_strategy()
            .prop_flat_map(|cols| { let n = cols.len(); (Just(cols), settings_strategy(n)) })
    ) {
        let layout = CardLayout::resolve(&settings, &columns);
        if let Some(title) = &layout.title {
            prop_assert!(layout.fields.iter().all(|c| c.name != title.name));
        }
        prop_assert!(layout.title.is_some(), "primary column always resolvable");
    }

    /// Body fields are a subset of the shown names
    #[test]
    fn body_fields_are_shown(
        (columns, settings) in columns_strategy()
            .prop_flat_map(|cols| { let n = cols.len(); (Just(cols), settings_strategy(n)) })
    ) {
        let layout = CardLayout::resolve(&settings, &columns);
        let shown = settings.shown_column_names.clone().unwrap_or_default();
        for field in &layout.fields {
            prop_assert!(shown.contains(&field.name));
        }
    }

    /// Column calculation never invents or duplicates columns
    #[test]
    fn calculated_columns_unique_subset(
        (columns, settings) in columns_strategy()
            .prop_flat_map(|cols| { let n = cols.len(); (Just(cols), settings_strategy(n)) })
    ) {
        let configured = settings.columns.unwrap_or_default();
        let ordered = calculate_columns(&configured, &columns);
        prop_assert!(ordered.len() <= columns.len());
        for (i, column) in ordered.iter().enumerate() {
            prop_assert!(columns.contains(column));
            prop_assert!(ordered[i + 1..].iter().all(|c| c.key != column.key));
        }
    }
}
