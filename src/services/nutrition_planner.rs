// ABOUTME: Nutrition planning service combining validation, energy calculation, and catalog recommendations
// ABOUTME: Produces a NutritionPlan with best-value picks, a filtered and sorted list, and filter facets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use vetflow_core::errors::AppResult;
use vetflow_core::models::{AnimalProfile, EnergyResult, NutritionalObjective, Product};

use crate::catalog::{CatalogQuery, ProductCatalog};
use crate::config::VetflowConfig;
use crate::intelligence::{
    available_brands, available_types, build_recommendations_with, calculate_energy_requirement,
    filter_recommendations, select_top_recommendations, sort_recommendations, Recommendation,
    RecommendationFilters, SortKey,
};
use crate::validation::{validate_product, validate_profile};

/// Input for one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Animal to plan for
    pub profile: AnimalProfile,
    /// Nutritional objective
    pub objective: NutritionalObjective,
    /// Filters for the full recommendation list
    #[serde(default)]
    pub filters: RecommendationFilters,
    /// Sort for the full list, configured default when unset
    #[serde(default)]
    pub sort: Option<SortKey>,
    /// Number of best-value picks, configured default when unset
    #[serde(default)]
    pub top_count: Option<usize>,
}

impl PlanRequest {
    /// Request with no filters and default ranking
    #[must_use]
    pub fn new(profile: AnimalProfile, objective: NutritionalObjective) -> Self {
        Self {
            profile,
            objective,
            filters: RecommendationFilters::default(),
            sort: None,
            top_count: None,
        }
    }
}

/// Complete feeding plan for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Energy requirement the plan is built on
    pub energy: EnergyResult,
    /// Cheapest priced products, computed before user filters apply
    pub top: Vec<Recommendation>,
    /// Filtered and sorted recommendations
    pub recommendations: Vec<Recommendation>,
    /// Brands available for filtering
    pub brands: Vec<String>,
    /// Product types available for filtering
    pub types: Vec<String>,
}

/// Orchestrates a plan from a profile and a product catalog
pub struct NutritionPlanner<C: ProductCatalog> {
    catalog: C,
    config: VetflowConfig,
}

impl<C: ProductCatalog> NutritionPlanner<C> {
    /// Planner using the global configuration
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, VetflowConfig::global().clone())
    }

    /// Planner using an explicit configuration
    #[must_use]
    pub const fn with_config(catalog: C, config: VetflowConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate a profile and compute its energy requirement
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` or `InvalidInput` if the profile fails validation
    pub fn energy(
        &self,
        profile: &AnimalProfile,
        objective: &NutritionalObjective,
    ) -> AppResult<EnergyResult> {
        validate_profile(profile, &self.config.validation)?;
        Ok(calculate_energy_requirement(profile, objective))
    }

    /// Build a complete plan
    ///
    /// Products failing validation are skipped with a warning, so a zero or
    /// out-of-range caloric density never reaches the quantity formulas.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is invalid or the catalog fetch fails
    pub async fn plan(&self, request: &PlanRequest) -> AppResult<NutritionPlan> {
        let energy = self.energy(&request.profile, &request.objective)?;
        info!(
            species = %request.profile.species,
            rer = energy.rer,
            mer = energy.mer,
            factor = energy.factor,
            "Computed energy requirement"
        );

        let fetched = self
            .catalog
            .fetch_products(&CatalogQuery::for_species(request.profile.species))
            .await?;
        let products = self.usable_products(fetched);

        let all = build_recommendations_with(
            &products,
            f64::from(energy.mer),
            &self.config.feeding,
        );

        let top_count = request
            .top_count
            .unwrap_or(self.config.recommendations.top_count);
        let sort = request
            .sort
            .unwrap_or(self.config.recommendations.default_sort);

        let top = select_top_recommendations(&all, top_count);
        let filtered = filter_recommendations(&all, &request.filters);
        let recommendations = sort_recommendations(&filtered, sort);

        debug!(
            candidates = all.len(),
            kept = recommendations.len(),
            top = top.len(),
            %sort,
            "Recommendations ranked"
        );

        Ok(NutritionPlan {
            brands: available_brands(&all),
            types: available_types(&all),
            energy,
            top,
            recommendations,
        })
    }

    fn usable_products(&self, products: Vec<Product>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|product| match validate_product(product, &self.config.validation) {
                Ok(()) => true,
                Err(e) => {
                    warn!(product_id = %product.id, error = %e, "Skipping invalid product");
                    false
                }
            })
            .collect()
    }
}
