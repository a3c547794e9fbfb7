//! Filter semantics tests
//!
//! Category conjunction, within-set disjunction, inclusive date bounds,
//! cleared-set behavior, and free-text search, checked against the seeded
//! mock dataset.

use chrono::NaiveDate;
use sig_reports::engine::ReportQueryEngine;
use sig_reports::report::{AssetType, DateRange, ReportFilters, Zone};
use sig_reports::source::MockRecordSource;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn loaded_engine() -> ReportQueryEngine {
    let mut engine = ReportQueryEngine::new();
    engine.load(&MockRecordSource::default()).await;
    engine
}

/// Filters with every category absent impose no constraint.
#[tokio::test]
async fn test_absent_filters_match_all() {
    let mut engine = loaded_engine().await;
    engine.set_filters(ReportFilters::default());
    assert_eq!(engine.filtered_records().len(), engine.records().len());
}

/// An empty set behaves exactly like an absent category.
#[tokio::test]
async fn test_empty_set_equals_absent() {
    let mut engine = loaded_engine().await;
    engine.set_filters(ReportFilters {
        asset_types: Some(Vec::new()),
        zones: Some(Vec::new()),
        statuses: Some(Vec::new()),
        events: Some(Vec::new()),
        ..Default::default()
    });
    assert_eq!(engine.filtered_records().len(), engine.records().len());
}

/// Every record in a date-filtered set falls inside the inclusive bounds.
#[tokio::test]
async fn test_date_range_inclusive() {
    let mut engine = loaded_engine().await;
    let range = DateRange::new(date(2025, 2, 1), date(2025, 3, 31));
    engine.set_filters(ReportFilters {
        date_range: Some(range),
        ..Default::default()
    });

    let filtered = engine.filtered_records();
    assert!(!filtered.is_empty());
    for record in &filtered {
        assert!(range.start <= record.date && record.date <= range.end);
    }

    // Nothing in range was dropped
    let expected = engine
        .records()
        .iter()
        .filter(|r| range.contains(r.date))
        .count();
    assert_eq!(filtered.len(), expected);
}

/// Within one category, membership is OR: the union of the singletons.
#[tokio::test]
async fn test_set_membership_is_disjunctive() {
    let mut engine = loaded_engine().await;

    engine.set_filters(ReportFilters {
        asset_types: Some(vec![AssetType::Tank]),
        ..Default::default()
    });
    let tanks = engine.filtered_records().len();

    engine.set_filters(ReportFilters {
        asset_types: Some(vec![AssetType::Pipe]),
        ..Default::default()
    });
    let pipes = engine.filtered_records().len();

    engine.set_filters(ReportFilters {
        asset_types: Some(vec![AssetType::Tank, AssetType::Pipe]),
        ..Default::default()
    });
    let both = engine.filtered_records();
    assert_eq!(both.len(), tanks + pipes);
    for record in both {
        assert!(matches!(record.asset_type, AssetType::Tank | AssetType::Pipe));
    }
}

/// Categories combine with AND: Tank in the North means both hold.
#[tokio::test]
async fn test_categories_conjoin() {
    let mut engine = loaded_engine().await;
    engine.set_filters(ReportFilters {
        asset_types: Some(vec![AssetType::Tank]),
        zones: Some(vec![Zone::North]),
        ..Default::default()
    });

    let filtered = engine.filtered_records();
    assert!(!filtered.is_empty());
    for record in filtered {
        assert_eq!(record.asset_type, AssetType::Tank);
        assert_eq!(record.zone, Zone::North);
    }
}

/// Search is a case-insensitive substring over name, asset, notes, zone.
#[tokio::test]
async fn test_search_matches_named_fields() {
    let mut engine = loaded_engine().await;
    engine.set_search_query("pérez");

    let filtered = engine.filtered_records();
    assert!(!filtered.is_empty());
    for record in filtered {
        let hit = record.employee_name.to_lowercase().contains("pérez")
            || record.asset_name.to_lowercase().contains("pérez")
            || record.notes.to_lowercase().contains("pérez")
            || record.zone.as_str().to_lowercase().contains("pérez");
        assert!(hit, "record {} matched without containing the query", record.id);
    }
}

/// Search composes with filters: both must hold.
#[tokio::test]
async fn test_search_composes_with_filters() {
    let mut engine = loaded_engine().await;
    engine.set_filters(ReportFilters {
        zones: Some(vec![Zone::South]),
        ..Default::default()
    });
    engine.set_search_query("tank");

    for record in engine.filtered_records() {
        assert_eq!(record.zone, Zone::South);
        assert!(record.asset_name.to_lowercase().contains("tank"));
    }
}

/// Employee selections are chip state only; the filtered set ignores them.
#[tokio::test]
async fn test_employee_selection_does_not_filter() {
    let mut engine = loaded_engine().await;
    engine.set_filters(ReportFilters {
        employee_ids: Some(vec![1]),
        ..Default::default()
    });
    assert_eq!(engine.filtered_records().len(), engine.records().len());
    assert_eq!(engine.active_filters().len(), 1);
}
