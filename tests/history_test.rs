// ABOUTME: Tests for the bounded calculation history
// ABOUTME: Covers newest-first ordering, eviction, lookup, deletion, and JSON persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use uuid::Uuid;
use vetflow::config::HistoryConfig;
use vetflow::history::CalculationHistory;
use vetflow::intelligence::calculate_energy_requirement;
use vetflow::models::{ActivityLevel, AnimalProfile};

mod common;

fn record(history: &mut CalculationHistory, profile: AnimalProfile) -> Uuid {
    let objective = common::maintenance(ActivityLevel::Moderate);
    let result = calculate_energy_requirement(&profile, &objective);
    history.save(profile, objective, result)
}

#[test]
fn test_default_history_keeps_ten_newest() {
    common::init_test_logging();
    let mut history = CalculationHistory::default();
    let ids: Vec<Uuid> = (0..12)
        .map(|_| record(&mut history, common::adult_dog()))
        .collect();

    assert_eq!(history.entries().len(), 10);
    assert_eq!(history.entries()[0].id, ids[11]);
    assert_eq!(history.entries()[9].id, ids[2]);
    assert!(history.get(ids[0]).is_none());
    assert!(history.get(ids[1]).is_none());
}

#[test]
fn test_get_delete_and_clear() {
    let mut history = CalculationHistory::default();
    let dog = record(&mut history, common::adult_dog());
    let cat = record(&mut history, common::adult_cat());

    assert_eq!(
        history.get(cat).unwrap().profile.name.as_deref(),
        Some("Mina")
    );

    assert!(history.delete(dog));
    assert!(!history.delete(dog));
    assert_eq!(history.entries().len(), 1);

    history.clear();
    assert!(history.entries().is_empty());
}

#[test]
fn test_entries_are_timestamped_in_order() {
    let mut history = CalculationHistory::default();
    record(&mut history, common::adult_dog());
    record(&mut history, common::adult_cat());

    let entries = history.entries();
    assert!(entries[0].timestamp >= entries[1].timestamp);
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn test_json_round_trip_preserves_entries() {
    let config = HistoryConfig::default();
    let mut history = CalculationHistory::new(&config);
    record(&mut history, common::adult_dog());
    record(&mut history, common::adult_cat());

    let json = history.to_json().unwrap();
    let restored = CalculationHistory::from_json(&json, &config);

    assert_eq!(restored, history);
}

#[test]
fn test_restoring_into_smaller_capacity_truncates_oldest() {
    let mut history = CalculationHistory::default();
    for _ in 0..5 {
        record(&mut history, common::adult_dog());
    }
    let newest = history.entries()[0].id;

    let restored =
        CalculationHistory::from_json(&history.to_json().unwrap(), &HistoryConfig { max_entries: 2 });

    assert_eq!(restored.entries().len(), 2);
    assert_eq!(restored.entries()[0].id, newest);
}

#[test]
fn test_corrupt_document_gives_empty_history() {
    common::init_test_logging();
    let restored = CalculationHistory::from_json("[1, 2", &HistoryConfig::default());
    assert!(restored.entries().is_empty());
}
