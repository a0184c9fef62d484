// ABOUTME: Process-wide configuration for feeding plans, recommendation ranking, validation bounds, and history
// ABOUTME: Defaults with VETFLOW_* environment overrides, validated once and cached in a OnceLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Configuration Module
//!
//! Veterinary formula constants are fixed and live in [`vetflow_core::constants`].
//! Only operational knobs are configurable here.
//!
//! | env var | default |
//! |---|---|
//! | `VETFLOW_MEALS_PER_DAY` | 2 |
//! | `VETFLOW_DAYS_PER_MONTH` | 30 |
//! | `VETFLOW_TOP_RECOMMENDATIONS` | 3 |
//! | `VETFLOW_DEFAULT_SORT` | `price-asc` |
//! | `VETFLOW_MIN_WEIGHT_KG` / `VETFLOW_MAX_WEIGHT_KG` | 0.1 / 100 |
//! | `VETFLOW_MAX_AGE_YEARS` | 30 |
//! | `VETFLOW_MIN_KCAL_PER_100G` / `VETFLOW_MAX_KCAL_PER_100G` | 100 / 1000 |
//! | `VETFLOW_HISTORY_MAX_ENTRIES` | 10 |

mod error;

pub use error::ConfigError;

use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;
use vetflow_core::constants::{feeding, limits};

use crate::intelligence::SortKey;

/// Global configuration singleton
static VETFLOW_CONFIG: OnceLock<VetflowConfig> = OnceLock::new();

/// Meal split and month length used to derive per-meal grams and monthly cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingConfig {
    /// Number of meals the daily ration is split into
    pub meals_per_day: u32,
    /// Days used to project monthly cost
    pub days_per_month: u32,
}

impl Default for FeedingConfig {
    fn default() -> Self {
        Self {
            meals_per_day: feeding::DEFAULT_MEALS_PER_DAY,
            days_per_month: feeding::DAYS_PER_MONTH,
        }
    }
}

/// Ranking defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// How many best-value products to highlight
    pub top_count: usize,
    /// Sort applied when the caller does not choose one
    pub default_sort: SortKey,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_count: feeding::DEFAULT_TOP_RECOMMENDATIONS,
            default_sort: SortKey::PriceAsc,
        }
    }
}

/// Accepted ranges for animal and product input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Minimum body weight (kg)
    pub min_weight_kg: f64,
    /// Maximum body weight (kg)
    pub max_weight_kg: f64,
    /// Maximum age in whole years
    pub max_age_years: u32,
    /// Minimum caloric density (kcal/100g)
    pub min_kcal_per_100g: f64,
    /// Maximum caloric density (kcal/100g)
    pub max_kcal_per_100g: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_weight_kg: limits::MIN_WEIGHT_KG,
            max_weight_kg: limits::MAX_WEIGHT_KG,
            max_age_years: limits::MAX_AGE_YEARS,
            min_kcal_per_100g: limits::MIN_KCAL_PER_100G,
            max_kcal_per_100g: limits::MAX_KCAL_PER_100G,
        }
    }
}

/// Calculation history retention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Entries kept before the oldest is evicted
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: limits::DEFAULT_HISTORY_ENTRIES,
        }
    }
}

/// Main configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VetflowConfig {
    /// Feeding plan settings
    pub feeding: FeedingConfig,
    /// Recommendation ranking settings
    pub recommendations: RecommendationConfig,
    /// Input validation bounds
    pub validation: ValidationLimits,
    /// History retention
    pub history: HistoryConfig,
}

impl VetflowConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        VETFLOW_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load vetflow config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a count is zero or a bound pair is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feeding.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange("meals_per_day must be > 0"));
        }
        if self.feeding.days_per_month == 0 {
            return Err(ConfigError::ValueOutOfRange("days_per_month must be > 0"));
        }
        if self.recommendations.top_count == 0 {
            return Err(ConfigError::ValueOutOfRange("top_count must be > 0"));
        }
        if self.history.max_entries == 0 {
            return Err(ConfigError::ValueOutOfRange("history max_entries must be > 0"));
        }

        let bounds = &self.validation;
        if bounds.min_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_weight_kg must be > 0"));
        }
        if bounds.min_weight_kg >= bounds.max_weight_kg {
            return Err(ConfigError::InvalidRange(
                "min_weight_kg must be < max_weight_kg",
            ));
        }
        if bounds.min_kcal_per_100g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_kcal_per_100g must be > 0"));
        }
        if bounds.min_kcal_per_100g >= bounds.max_kcal_per_100g {
            return Err(ConfigError::InvalidRange(
                "min_kcal_per_100g must be < max_kcal_per_100g",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("VETFLOW_MEALS_PER_DAY", &mut self.feeding.meals_per_day)?;
        Self::apply_env_var("VETFLOW_DAYS_PER_MONTH", &mut self.feeding.days_per_month)?;

        Self::apply_env_var(
            "VETFLOW_TOP_RECOMMENDATIONS",
            &mut self.recommendations.top_count,
        )?;
        Self::apply_env_var(
            "VETFLOW_DEFAULT_SORT",
            &mut self.recommendations.default_sort,
        )?;

        Self::apply_env_var("VETFLOW_MIN_WEIGHT_KG", &mut self.validation.min_weight_kg)?;
        Self::apply_env_var("VETFLOW_MAX_WEIGHT_KG", &mut self.validation.max_weight_kg)?;
        Self::apply_env_var("VETFLOW_MAX_AGE_YEARS", &mut self.validation.max_age_years)?;
        Self::apply_env_var(
            "VETFLOW_MIN_KCAL_PER_100G",
            &mut self.validation.min_kcal_per_100g,
        )?;
        Self::apply_env_var(
            "VETFLOW_MAX_KCAL_PER_100G",
            &mut self.validation.max_kcal_per_100g,
        )?;

        Self::apply_env_var("VETFLOW_HISTORY_MAX_ENTRIES", &mut self.history.max_entries)?;

        Ok(self)
    }
}
