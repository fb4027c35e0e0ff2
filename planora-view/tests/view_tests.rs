use planora_model::Record;
use planora_view::{
    FilterSet, ListView, Predicate, SortDirection, SortDirective, SortKey,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::num::NonZeroUsize;

fn trade(id: &str, data: serde_json::Value) -> Record {
    Record {
        id: id.to_string(),
        record_type: "apartment_trade".to_string(),
        data,
        fetched_at: 0,
    }
}

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn amount_sort(direction: SortDirection) -> SortDirective {
    SortDirective::new(SortKey::Numeric("/dealAmount".to_string()), direction)
}

// ── Pipeline ─────────────────────────────────────────────────────

#[test]
fn page_slice_runs_filter_then_sort_then_page() {
    let mut view = ListView::new(size(2));
    view.set_records(vec![
        trade("a", json!({"dealAmount": "50,000"})),
        trade("b", json!({"dealAmount": "120,000"})),
        trade("c", json!({"dealAmount": "83,500"})),
        trade("d", json!({"dealAmount": "9,000"})),
    ]);
    view.set_filter(FilterSet::new().with(
        "/dealAmount",
        Predicate::NumericRange {
            min: Some(10_000),
            max: None,
        },
    ));
    view.set_sort(Some(amount_sort(SortDirection::Desc)));

    let page = view.page_slice();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, "b");
    assert_eq!(page[1].id, "c");

    view.set_page(1);
    let page = view.page_slice();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, "a");
}

#[test]
fn counts_track_filter() {
    let mut view = ListView::new(size(10));
    view.set_records(vec![
        trade("a", json!({"dealAmount": "50,000"})),
        trade("b", json!({"dealAmount": "120,000"})),
    ]);
    assert_eq!(view.total_count(), 2);
    assert_eq!(view.filtered_count(), 2);

    view.set_filter(FilterSet::new().with(
        "/dealAmount",
        Predicate::NumericRange {
            min: Some(60_000),
            max: None,
        },
    ));
    assert_eq!(view.total_count(), 2);
    assert_eq!(view.filtered_count(), 1);
}

// ── Page reset rules ─────────────────────────────────────────────

#[test]
fn filter_change_resets_page() {
    let mut view = ListView::new(size(1));
    view.set_records((0..5).map(|i| trade(&format!("r{i}"), json!({"floor": i}))).collect());
    view.set_page(3);
    assert_eq!(view.page_index(), 3);

    view.set_filter(FilterSet::new().with(
        "/floor",
        Predicate::NumericRange {
            min: Some(1),
            max: None,
        },
    ));
    assert_eq!(view.page_index(), 0);
}

#[test]
fn sort_change_resets_page() {
    let mut view = ListView::new(size(1));
    view.set_records((0..5).map(|i| trade(&format!("r{i}"), json!({"floor": i}))).collect());
    view.set_page(3);

    view.set_sort(Some(amount_sort(SortDirection::Asc)));
    assert_eq!(view.page_index(), 0);
}

#[test]
fn identical_filter_does_not_reset_page() {
    let mut view = ListView::new(size(1));
    view.set_records((0..5).map(|i| trade(&format!("r{i}"), json!({"floor": i}))).collect());
    view.set_page(2);

    view.set_filter(FilterSet::new());
    assert_eq!(view.page_index(), 2);
}

#[test]
fn page_size_change_resets_page() {
    let mut view = ListView::new(size(2));
    view.set_records((0..10).map(|i| trade(&format!("r{i}"), json!({"floor": i}))).collect());
    view.set_page(4);

    view.set_page_size(size(5));
    assert_eq!(view.page_index(), 0);
    assert_eq!(view.total_pages(), 2);
}

#[test]
fn one_based_page_setter() {
    let mut view = ListView::new(size(10));
    view.set_records((0..25).map(|i| trade(&format!("r{i}"), json!({"seq": i}))).collect());
    view.set_page_one_based(3);
    assert_eq!(view.page_index(), 2);
    assert_eq!(view.page_slice().len(), 5);
}

// ── End-to-end scenarios ─────────────────────────────────────────

#[test]
fn currency_filter_and_sort_scenario() {
    let records = vec![
        trade("low", json!({"dealAmount": "50,000", "exclusiveArea": "84.5"})),
        trade("high", json!({"dealAmount": "120,000", "exclusiveArea": "59.9"})),
    ];

    let filter = FilterSet::new().with(
        "/dealAmount",
        Predicate::NumericRange {
            min: Some(60_000),
            max: None,
        },
    );
    let filtered = filter.apply(&records);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "high");

    let sorted = amount_sort(SortDirection::Desc).sorted(&records);
    assert_eq!(sorted[0].id, "high");
    assert_eq!(sorted[1].id, "low");
}

#[test]
fn twenty_five_records_page_size_ten() {
    let mut view = ListView::new(size(10));
    view.set_records((0..25).map(|i| trade(&format!("r{i}"), json!({"seq": i}))).collect());

    assert_eq!(view.total_pages(), 3);

    view.set_page(2);
    assert_eq!(view.page_slice().len(), 5);

    view.set_page(3);
    assert!(view.page_slice().is_empty());
}

#[test]
fn empty_collection_never_errors() {
    let mut view = ListView::new(size(10));
    view.set_filter(FilterSet::new().with("/aptName", Predicate::Substring("x".to_string())));
    view.set_sort(Some(amount_sort(SortDirection::Asc)));
    assert_eq!(view.total_pages(), 0);
    assert!(view.page_slice().is_empty());
}
