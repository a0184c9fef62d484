// ABOUTME: Main library entry point for the VetFlow veterinary nutrition calculator
// ABOUTME: Energy requirements, feeding quantities, and ranked pet-food recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

#![deny(unsafe_code)]

//! # VetFlow
//!
//! Veterinary nutrition calculator for dogs and cats.
//!
//! ## Features
//!
//! - **Energy requirements**: RER and MER with body-condition adjustment
//! - **Feeding plans**: daily and per-meal grams and cost for any product
//! - **Recommendations**: filter, sort, and pick the best-value products from a catalog
//! - **History**: bounded record of past calculations
//!
//! ## Architecture
//!
//! - **Intelligence**: pure formulas, no I/O and no logging
//! - **Catalog**: product source port with an in-memory JSON implementation
//! - **Services**: validation plus orchestration of the pure core
//! - **Config**: `VETFLOW_*` environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use vetflow::intelligence::calculate_energy_requirement;
//! use vetflow::models::{
//!     ActivityLevel, Age, AnimalProfile, Goal, NutritionalObjective, PhysiologicalStatus, Species,
//! };
//!
//! let profile = AnimalProfile::new(Species::Cat, 4.0, Age::new(5, 0), true);
//! let objective = NutritionalObjective::new(
//!     Goal::Maintenance,
//!     ActivityLevel::Low,
//!     PhysiologicalStatus::Normal,
//! );
//!
//! let result = calculate_energy_requirement(&profile, &objective);
//! assert_eq!(result.factor, 1.0);
//! ```

/// Product catalog port and in-memory implementation
pub mod catalog;

/// Configuration with environment overrides
pub mod config;

/// Bounded calculation history
pub mod history;

/// Energy formulas, feeding quantities, and recommendations
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// Planning services
pub mod services;

/// Profile and product validation
pub mod validation;

/// Error types shared across the crate
pub mod errors {
    pub use vetflow_core::errors::*;
}

/// Domain models
pub mod models {
    pub use vetflow_core::models::*;
}

pub use vetflow_core::constants;
