// ABOUTME: Bounded newest-first history of energy calculations
// ABOUTME: Entries carry a UUID and UTC timestamp and round-trip through a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use vetflow_core::errors::AppResult;
use vetflow_core::models::{AnimalProfile, EnergyResult, NutritionalObjective};

use crate::config::HistoryConfig;

/// One remembered calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: Uuid,
    /// When the calculation was saved
    pub timestamp: DateTime<Utc>,
    /// Animal the calculation was for
    pub profile: AnimalProfile,
    /// Objective used
    pub objective: NutritionalObjective,
    /// Result obtained
    pub result: EnergyResult,
}

/// Persisted form of the history
#[derive(Debug, Serialize, Deserialize)]
struct HistoryDocument {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

/// Newest-first list of calculations, capped at `max_entries`
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl CalculationHistory {
    /// Empty history with the configured capacity
    #[must_use]
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: config.max_entries,
        }
    }

    /// Record a calculation at the front, evicting the oldest beyond capacity
    pub fn save(
        &mut self,
        profile: AnimalProfile,
        objective: NutritionalObjective,
        result: EnergyResult,
    ) -> Uuid {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            profile,
            objective,
            result,
        };
        let id = entry.id;

        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);

        debug!(%id, size = self.entries.len(), "Saved calculation to history");
        id
    }

    /// Look up an entry
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove an entry, returning whether it existed
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Capacity
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Serialize to the persisted JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        let document = HistoryDocument {
            entries: self.entries.clone(),
            max_entries: self.max_entries,
        };
        Ok(serde_json::to_string(&document)?)
    }

    /// Restore from a persisted JSON document
    ///
    /// A corrupt document yields an empty history rather than an error. The
    /// configured capacity wins over the one stored in the document.
    #[must_use]
    pub fn from_json(json: &str, config: &HistoryConfig) -> Self {
        let mut history = Self::new(config);
        match serde_json::from_str::<HistoryDocument>(json) {
            Ok(document) => {
                history.entries = document.entries;
                history.entries.truncate(history.max_entries);
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse calculation history, starting empty");
            }
        }
        history
    }
}
