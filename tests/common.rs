// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and representative profiles, objectives, and products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `vetflow`

use std::sync::Once;

use vetflow::models::{
    ActivityLevel, Age, AnimalProfile, Goal, NutritionalObjective, PhysiologicalStatus, Product,
    ProductSpecies, Species,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Adult neutered 10 kg dog with an ideal body score
pub fn adult_dog() -> AnimalProfile {
    AnimalProfile::new(Species::Dog, 10.0, Age::new(4, 0), true).with_name("Rex")
}

/// Adult neutered 4 kg cat with an ideal body score
pub fn adult_cat() -> AnimalProfile {
    AnimalProfile::new(Species::Cat, 4.0, Age::new(6, 3), true).with_name("Mina")
}

/// Maintenance objective at the given activity level
pub fn maintenance(activity_level: ActivityLevel) -> NutritionalObjective {
    NutritionalObjective::new(Goal::Maintenance, activity_level, PhysiologicalStatus::Normal)
}

/// Priced product with protein data
pub fn product(
    id: &str,
    brand: &str,
    species: ProductSpecies,
    kcal_per_100g: f64,
    price_per_kg: f64,
) -> Product {
    Product::new(id, brand, format!("{brand} {id}"), species, kcal_per_100g)
        .with_price_per_kg(price_per_kg)
}

/// Small mixed catalog: dog, cat, and shared products, one unpriced and one inactive
pub fn sample_catalog() -> Vec<Product> {
    let mut inactive = product("d-old", "Purina", ProductSpecies::Dog, 360.0, 3.0);
    inactive.is_active = false;

    vec![
        product("d-rc", "Royal Canin", ProductSpecies::Dog, 380.0, 9.0)
            .with_type("maintenance")
            .with_protein(26.0),
        product("d-hills", "Hills", ProductSpecies::Dog, 350.0, 7.0)
            .with_type("weight-control")
            .with_protein(30.0),
        Product::new("d-nopr", "Brit", "Brit Care Adult", ProductSpecies::Dog, 400.0)
            .with_type("maintenance"),
        product("b-edgard", "Edgard & Cooper", ProductSpecies::Both, 370.0, 12.0)
            .with_type("grain-free"),
        product("c-purina", "Purina", ProductSpecies::Cat, 410.0, 6.0)
            .with_type("sterilised")
            .with_protein(34.0),
        inactive,
    ]
}

/// JSON document for [`sample_catalog`]
pub fn sample_catalog_json() -> String {
    serde_json::to_string(&sample_catalog()).unwrap()
}
