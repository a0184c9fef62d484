// ABOUTME: Product recommendation engine turning a catalog and an energy target into ranked feeding plans
// ABOUTME: Builds per-product quantities and costs, then filters, sorts, and selects the best-value products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! # Recommendation Engine
//!
//! A [`Recommendation`] pairs one catalog [`Product`] with the quantities and
//! costs needed to meet a daily energy requirement. Recommendations are derived
//! values: rebuild them whenever the energy requirement or the product set changes.
//!
//! Every operation here is pure. Filtering and sorting return new vectors and
//! never drop or duplicate entries beyond what the filter predicates require.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vetflow_core::errors::AppError;
use vetflow_core::models::Product;

use super::feeding_calculator::{
    compute_daily_cost, compute_daily_quantity, compute_per_meal_quantity,
};
use crate::config::FeedingConfig;

/// Feeding plan for a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Product this recommendation is for
    pub product: Product,
    /// Grams per day
    pub daily_quantity_grams: f64,
    /// Grams per meal
    pub per_meal_grams: f64,
    /// Cost per day, 0 when the price is unknown
    pub daily_cost: f64,
    /// Cost per month, 0 when the price is unknown
    pub monthly_cost: f64,
    /// Optional relevance score, higher is better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

impl Recommendation {
    /// Attach a relevance score
    #[must_use]
    pub fn with_match_score(mut self, score: f64) -> Self {
        self.match_score = Some(score);
        self
    }

    /// Whether the daily cost is strictly positive
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.daily_cost > 0.0
    }
}

/// Build one recommendation per product using the default feeding configuration
///
/// Output order follows input order. No product is skipped.
///
/// # Arguments
/// * `products` - Candidate products
/// * `energy_kcal` - Daily energy requirement, usually the rounded MER
#[must_use]
pub fn build_recommendations(products: &[Product], energy_kcal: f64) -> Vec<Recommendation> {
    build_recommendations_with(products, energy_kcal, &FeedingConfig::default())
}

/// Build one recommendation per product with an explicit meals/month configuration
#[must_use]
pub fn build_recommendations_with(
    products: &[Product],
    energy_kcal: f64,
    feeding: &FeedingConfig,
) -> Vec<Recommendation> {
    products
        .iter()
        .map(|product| {
            let daily_quantity_grams = compute_daily_quantity(energy_kcal, product.kcal_per_100g);
            let daily_cost =
                compute_daily_cost(daily_quantity_grams, product.price_per_kg.unwrap_or(0.0));

            Recommendation {
                product: product.clone(),
                daily_quantity_grams,
                per_meal_grams: compute_per_meal_quantity(
                    daily_quantity_grams,
                    feeding.meals_per_day,
                ),
                daily_cost,
                monthly_cost: daily_cost * f64::from(feeding.days_per_month),
                match_score: None,
            }
        })
        .collect()
}

/// Filter criteria for recommendations
///
/// Unset fields and empty sets impose no constraint. Active criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationFilters {
    /// Allowed brand names
    #[serde(default)]
    pub brands: Vec<String>,
    /// Allowed product types
    #[serde(default)]
    pub types: Vec<String>,
    /// Minimum daily cost, inclusive
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Maximum daily cost, inclusive
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Minimum protein percentage, inclusive; products with unknown protein fail it
    #[serde(default)]
    pub min_protein: Option<f64>,
    /// Maximum caloric density (kcal/100g), inclusive
    #[serde(default)]
    pub max_kcal: Option<f64>,
}

impl RecommendationFilters {
    /// Whether no criterion is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether a recommendation satisfies every active criterion
    #[must_use]
    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        let product = &recommendation.product;

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&product.product_type) {
            return false;
        }
        if self
            .min_price
            .is_some_and(|min| recommendation.daily_cost < min)
        {
            return false;
        }
        if self
            .max_price
            .is_some_and(|max| recommendation.daily_cost > max)
        {
            return false;
        }
        if let Some(min) = self.min_protein {
            match product.protein {
                Some(protein) if protein >= min => {}
                _ => return false,
            }
        }
        if self.max_kcal.is_some_and(|max| product.kcal_per_100g > max) {
            return false;
        }
        true
    }
}

/// Keep the recommendations that satisfy every active filter, preserving order
#[must_use]
pub fn filter_recommendations(
    recommendations: &[Recommendation],
    filters: &RecommendationFilters,
) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|rec| filters.matches(rec))
        .cloned()
        .collect()
}

/// Ordering applied by [`sort_recommendations`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Cheapest daily cost first
    #[default]
    PriceAsc,
    /// Most expensive daily cost first
    PriceDesc,
    /// Lowest caloric density first
    KcalAsc,
    /// Highest caloric density first
    KcalDesc,
    /// Highest protein first, unknown counts as 0
    ProteinDesc,
    /// Highest match score first, unknown counts as 0
    MatchScore,
}

impl SortKey {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::KcalAsc => "kcal-asc",
            Self::KcalDesc => "kcal-desc",
            Self::ProteinDesc => "protein-desc",
            Self::MatchScore => "match-score",
        }
    }

    fn compare(self, a: &Recommendation, b: &Recommendation) -> Ordering {
        match self {
            Self::PriceAsc => a.daily_cost.total_cmp(&b.daily_cost),
            Self::PriceDesc => b.daily_cost.total_cmp(&a.daily_cost),
            Self::KcalAsc => a.product.kcal_per_100g.total_cmp(&b.product.kcal_per_100g),
            Self::KcalDesc => b.product.kcal_per_100g.total_cmp(&a.product.kcal_per_100g),
            Self::ProteinDesc => b
                .product
                .protein
                .unwrap_or(0.0)
                .total_cmp(&a.product.protein.unwrap_or(0.0)),
            Self::MatchScore => b
                .match_score
                .unwrap_or(0.0)
                .total_cmp(&a.match_score.unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "kcal-asc" => Ok(Self::KcalAsc),
            "kcal-desc" => Ok(Self::KcalDesc),
            "protein-desc" => Ok(Self::ProteinDesc),
            "match-score" => Ok(Self::MatchScore),
            other => Err(AppError::invalid_input(format!(
                "Invalid sort key: '{other}'"
            ))),
        }
    }
}

/// Return a new vector ordered by `sort_key`; ties keep their input order
#[must_use]
pub fn sort_recommendations(
    recommendations: &[Recommendation],
    sort_key: SortKey,
) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();
    sorted.sort_by(|a, b| sort_key.compare(a, b));
    sorted
}

/// Up to `n` priced recommendations, cheapest daily cost first
///
/// Only strictly positive daily costs qualify: unpriced products (cost 0) are
/// never selected, and neither are negative or NaN costs from a bad price.
#[must_use]
pub fn select_top_recommendations(
    recommendations: &[Recommendation],
    n: usize,
) -> Vec<Recommendation> {
    let priced: Vec<Recommendation> = recommendations
        .iter()
        .filter(|rec| rec.is_priced())
        .cloned()
        .collect();

    let mut top = sort_recommendations(&priced, SortKey::PriceAsc);
    top.truncate(n);
    top
}

/// Distinct brands, sorted ascending
#[must_use]
pub fn available_brands(recommendations: &[Recommendation]) -> Vec<String> {
    recommendations
        .iter()
        .map(|rec| rec.product.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty product types, sorted ascending
#[must_use]
pub fn available_types(recommendations: &[Recommendation]) -> Vec<String> {
    recommendations
        .iter()
        .filter(|rec| !rec.product.product_type.is_empty())
        .map(|rec| rec.product.product_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
