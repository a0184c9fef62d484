// ABOUTME: Energy requirement result model
// ABOUTME: Rounded RER/MER values with the applied factor and an audit description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use serde::{Deserialize, Serialize};

/// Outcome of one energy requirement calculation
///
/// Created once per calculation and never mutated; a new calculation yields a new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyResult {
    /// Resting Energy Requirement (kcal/day), rounded half-up
    pub rer: u32,
    /// Maintenance Energy Requirement after body-condition adjustment (kcal/day), rounded half-up
    pub mer: u32,
    /// Multiplier applied to RER
    pub factor: f64,
    /// Human-readable summary with the unrounded values
    pub formula_description: String,
}
