//! Integration tests for loading the catalog fixture and editing orders
//! against it.

use std::path::Path;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use workshop_core::calculations::{category_badge_counts, common::format_money};
use workshop_core::{Catalog, Order, OrderCommand, ServiceSession, TaskFilter, TaskType};
use workshop_data::{CatalogLoadError, CatalogLoader};

const TEST_CSV: &str = include_str!("../test-data/workshop_catalog.csv");

fn fixture_catalog() -> Catalog {
    CatalogLoader::load(TEST_CSV.as_bytes()).expect("fixture catalog should load")
}

#[test]
fn test_fixture_loads_every_row() {
    let catalog = fixture_catalog();

    assert_eq!(catalog.len(), 8);
    let ids: Vec<_> = catalog.categories().iter().map(|c| c.as_str()).collect();
    assert_eq!(ids, vec!["engine", "fuel", "refill", "brakes"]);
}

#[test]
fn test_fixture_matches_builtin_for_shared_tasks() {
    let catalog = fixture_catalog();
    let builtin = Catalog::builtin();

    for task in builtin.tasks() {
        assert_eq!(catalog.task(&task.name), Some(task), "task {}", task.name);
    }
}

#[test]
fn test_load_from_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("workshop_catalog.csv");

    let catalog = CatalogLoader::load_from_file(&path).expect("fixture file should load");

    assert_eq!(catalog.len(), 8);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = CatalogLoader::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();

    assert!(matches!(err, CatalogLoadError::Io { .. }));
}

#[test]
fn test_badges_cover_loaded_categories() {
    let catalog = fixture_catalog();
    let mut session = ServiceSession::open(
        &catalog,
        Order::new(Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap()),
    );

    session.dispatch(OrderCommand::add_task("Replace Brake Pads"));
    session.dispatch(OrderCommand::add_task("Inspect Brake Lines"));
    session.dispatch(OrderCommand::add_task("Check Oil Level"));

    assert_eq!(session.badges().count("brakes"), 2);
    assert_eq!(session.badges().count("engine"), 1);
    assert_eq!(session.badges(), &category_badge_counts(&catalog, session.order()));
    assert_eq!(format_money(session.totals().tasks), "173.00");
}

#[test]
fn test_inspection_filter_over_fixture() {
    let catalog = fixture_catalog();

    let names: Vec<_> = catalog
        .filtered(TaskFilter::Type(TaskType::Inspection))
        .map(|t| t.name.as_str())
        .collect();

    assert_eq!(names, vec!["Inspect Belts", "Inspect Brake Lines"]);
    assert_eq!(catalog.task("Replace Brake Pads").unwrap().price, dec!(120));
}
