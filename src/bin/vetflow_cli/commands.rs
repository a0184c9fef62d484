// ABOUTME: Command handlers for vetflow-cli
// ABOUTME: Bridge parsed arguments to the planner service and the catalog loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use std::path::Path;

use vetflow::catalog::InMemoryCatalog;
use vetflow::errors::AppResult;
use vetflow::intelligence::{RecommendationFilters, SortKey};
use vetflow::models::{AnimalProfile, NutritionalObjective};
use vetflow::services::{NutritionPlanner, PlanRequest};

use crate::display;

/// Build a plan request from CLI arguments
pub fn plan_request(
    profile: AnimalProfile,
    objective: NutritionalObjective,
    filters: RecommendationFilters,
    sort: Option<SortKey>,
    top_count: Option<usize>,
) -> PlanRequest {
    PlanRequest {
        filters,
        sort,
        top_count,
        ..PlanRequest::new(profile, objective)
    }
}

/// Print the energy requirement of one animal
pub fn energy(
    profile: &AnimalProfile,
    objective: &NutritionalObjective,
    json: bool,
) -> AppResult<()> {
    let planner = NutritionPlanner::new(InMemoryCatalog::default());
    let result = planner.energy(profile, objective)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::energy(&result);
    }
    Ok(())
}

/// Print a full plan built from a catalog file
pub async fn recommend(catalog_path: &Path, request: &PlanRequest, json: bool) -> AppResult<()> {
    let catalog = InMemoryCatalog::from_file(catalog_path).await?;
    let planner = NutritionPlanner::new(catalog);
    let plan = planner.plan(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display::plan(&plan);
    }
    Ok(())
}

/// Print statistics for a catalog file
pub async fn catalog_stats(catalog_path: &Path, json: bool) -> AppResult<()> {
    let catalog = InMemoryCatalog::from_file(catalog_path).await?;
    let stats = catalog.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::catalog_stats(&stats);
    }
    Ok(())
}
