// ABOUTME: Service layer orchestrating the pure nutrition core with catalog access
// ABOUTME: Entry point used by the CLI and by embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Domain service layer

/// Validation, energy calculation, and recommendation ranking for one animal
pub mod nutrition_planner;

pub use nutrition_planner::{NutritionPlan, NutritionPlanner, PlanRequest};
