// ABOUTME: Veterinary energy constants and validation bounds for companion-animal nutrition
// ABOUTME: RER coefficients, MER factor tables, body-condition multipliers, and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Veterinary constants used by the energy and feeding calculations.
//!
//! These values follow the standard small-animal clinical nutrition conventions
//! (NRC 2006, WSAVA global nutrition guidelines). They are intentionally not
//! configurable: the body-condition multipliers in particular are exact values,
//! never interpolated.

/// Resting Energy Requirement coefficients
///
/// Reference: National Research Council (2006). Nutrient Requirements of Dogs and Cats.
pub mod rer {
    /// Below this weight (kg, exclusive) the linear formula applies
    pub const LINEAR_LOWER_THRESHOLD_KG: f64 = 2.0;
    /// Above this weight (kg, exclusive) the linear formula applies
    pub const LINEAR_UPPER_THRESHOLD_KG: f64 = 45.0;

    /// Allometric form: `70 x weight^0.75`
    pub const ALLOMETRIC_COEFFICIENT: f64 = 70.0;
    /// Metabolic body weight exponent
    pub const ALLOMETRIC_EXPONENT: f64 = 0.75;

    /// Linear form slope: `30 x weight + 70`
    pub const LINEAR_SLOPE: f64 = 30.0;
    /// Linear form intercept
    pub const LINEAR_INTERCEPT: f64 = 70.0;
}

/// Body condition score (1-9 scale) adjustments
pub mod body_condition {
    /// Lowest valid score
    pub const MIN_SCORE: i32 = 1;
    /// Highest valid score
    pub const MAX_SCORE: i32 = 9;
    /// Ideal score
    pub const IDEAL_SCORE: i32 = 5;

    /// Scores at or below this are underweight
    pub const UNDERWEIGHT_THRESHOLD: i32 = 3;
    /// Scores at or above this are overweight
    pub const OVERWEIGHT_THRESHOLD: i32 = 7;

    /// Underweight compensation (+15%)
    pub const UNDERWEIGHT_MULTIPLIER: f64 = 1.15;
    /// Ideal range multiplier
    pub const IDEAL_MULTIPLIER: f64 = 1.0;
    /// Overweight compensation (-25%)
    pub const OVERWEIGHT_MULTIPLIER: f64 = 0.75;
}

/// MER multipliers applied to RER
///
/// Reference: WSAVA Global Nutrition Committee, energy requirement factor tables.
pub mod mer_factors {
    /// Gestation, dog
    pub const GESTATION_DOG: f64 = 3.0;
    /// Gestation, cat
    pub const GESTATION_CAT: f64 = 2.0;
    /// Lactation, dog
    pub const LACTATION_DOG: f64 = 6.0;
    /// Lactation, cat
    pub const LACTATION_CAT: f64 = 4.0;
    /// Senior, dog
    pub const SENIOR_DOG: f64 = 1.4;
    /// Senior, cat
    pub const SENIOR_CAT: f64 = 1.1;

    /// Growth, dog
    pub const GROWTH_DOG: f64 = 2.0;
    /// Growth, cat
    pub const GROWTH_CAT: f64 = 2.5;
    /// Weight loss, any species
    pub const WEIGHT_LOSS: f64 = 1.0;
    /// Weight gain, any species
    pub const WEIGHT_GAIN: f64 = 1.5;

    /// Maintenance factors indexed by activity level: `[low, moderate, high]`
    pub const DOG_INTACT: [f64; 3] = [1.6, 1.8, 2.0];
    /// Maintenance, neutered dog
    pub const DOG_NEUTERED: [f64; 3] = [1.4, 1.6, 1.8];
    /// Maintenance, intact cat
    pub const CAT_INTACT: [f64; 3] = [1.2, 1.4, 1.6];
    /// Maintenance, neutered cat
    pub const CAT_NEUTERED: [f64; 3] = [1.0, 1.2, 1.4];
}

/// Feeding defaults
pub mod feeding {
    /// Meals per day when the caller does not specify
    pub const DEFAULT_MEALS_PER_DAY: u32 = 2;
    /// Days used to project a monthly cost
    pub const DAYS_PER_MONTH: u32 = 30;
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Caloric density is expressed per this many grams
    pub const DENSITY_REFERENCE_GRAMS: f64 = 100.0;
    /// Default size of the "best value" selection
    pub const DEFAULT_TOP_RECOMMENDATIONS: usize = 3;
}

/// Input validation bounds
pub mod limits {
    /// Minimum animal weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 0.1;
    /// Maximum animal weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 100.0;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: u32 = 30;
    /// Maximum months component of an age
    pub const MAX_AGE_MONTHS: u32 = 11;

    /// Minimum product caloric density (kcal/100g)
    pub const MIN_KCAL_PER_100G: f64 = 100.0;
    /// Maximum product caloric density (kcal/100g)
    pub const MAX_KCAL_PER_100G: f64 = 1000.0;
    /// Maximum nutrient percentage
    pub const MAX_NUTRIENT_PERCENT: f64 = 100.0;

    /// Maximum brand name length
    pub const MAX_BRAND_LEN: usize = 100;
    /// Maximum product name length
    pub const MAX_PRODUCT_NAME_LEN: usize = 255;
    /// Maximum animal name length
    pub const MAX_ANIMAL_NAME_LEN: usize = 100;

    /// Default number of remembered calculations
    pub const DEFAULT_HISTORY_ENTRIES: usize = 10;
    /// Brands listed in catalog statistics
    pub const TOP_BRANDS_IN_STATS: usize = 10;
}
