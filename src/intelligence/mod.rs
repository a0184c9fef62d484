// ABOUTME: Nutrition intelligence: energy formulas, feeding quantities, and product recommendations
// ABOUTME: Pure computational core with no I/O and no logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! # Intelligence Module
//!
//! Deterministic veterinary nutrition computations. Identical inputs always
//! produce identical outputs, so every function is safe to call from any thread.

/// RER/MER formulas and the aggregated energy result
pub mod energy_calculator;
/// Daily and per-meal quantities and daily cost
pub mod feeding_calculator;
/// Recommendation building, filtering, sorting, and top selection
pub mod recommendation_engine;

pub use energy_calculator::{
    adjust_for_body_score, body_score_multiplier, calculate_energy_requirement, compute_mer,
    compute_rer, select_mer_factor, MerCalculation,
};
pub use feeding_calculator::{compute_daily_cost, compute_daily_quantity, compute_per_meal_quantity};
pub use recommendation_engine::{
    available_brands, available_types, build_recommendations, build_recommendations_with,
    filter_recommendations, select_top_recommendations, sort_recommendations, Recommendation,
    RecommendationFilters, SortKey,
};
