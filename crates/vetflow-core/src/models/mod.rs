// ABOUTME: Core data models for the nutrition calculator
// ABOUTME: Re-exports animal, product, and energy result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

/// Animal biometrics and nutritional objectives
pub mod animal;
/// Energy calculation results
pub mod energy;
/// Commercial pet-food products
pub mod product;

pub use animal::{
    ActivityLevel, Age, AnimalProfile, Goal, NutritionalObjective, PhysiologicalStatus, Species,
};
pub use energy::EnergyResult;
pub use product::{Availability, Product, ProductSpecies};
