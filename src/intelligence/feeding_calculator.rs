// ABOUTME: Feeding quantity and cost calculations from an energy target and a product's density
// ABOUTME: Daily grams, per-meal grams, and daily cost from price per kilogram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Feeding-quantity calculator.
//!
//! These functions are total over their numeric inputs. A caloric density of
//! zero yields an infinite quantity and a negative density a negative one;
//! products like that are rejected by [`crate::validation::validate_product`]
//! before they reach this module.

use vetflow_core::constants::feeding::{DENSITY_REFERENCE_GRAMS, GRAMS_PER_KG};

/// Grams of food per day needed to meet an energy requirement
///
/// Formula: `energy x 100 / kcal_per_100g`
///
/// # Arguments
/// * `energy_kcal` - Daily energy requirement (kcal/day)
/// * `kcal_per_100g` - Caloric density of the product
#[must_use]
pub fn compute_daily_quantity(energy_kcal: f64, kcal_per_100g: f64) -> f64 {
    energy_kcal * DENSITY_REFERENCE_GRAMS / kcal_per_100g
}

/// Grams per meal when the daily quantity is split into `meals_per_day` meals
///
/// Zero meals produces an infinite (or NaN) value; configuration rejects it upstream.
#[must_use]
pub fn compute_per_meal_quantity(daily_quantity_grams: f64, meals_per_day: u32) -> f64 {
    daily_quantity_grams / f64::from(meals_per_day)
}

/// Daily cost of feeding `daily_quantity_grams` at `price_per_kg`
#[must_use]
pub fn compute_daily_cost(daily_quantity_grams: f64, price_per_kg: f64) -> f64 {
    daily_quantity_grams / GRAMS_PER_KG * price_per_kg
}
