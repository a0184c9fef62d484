// ABOUTME: Input validation for animal profiles and catalog products
// ABOUTME: Enforces weight, age, body score, caloric density, and nutrient bounds before computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Range checks that keep the computational core inside its contract.
//!
//! The formulas in [`crate::intelligence`] are total and never fail. This module
//! is where out-of-range input is turned into an [`AppError`].

use serde_json::json;
use vetflow_core::constants::{body_condition, limits};
use vetflow_core::errors::{AppError, AppResult};
use vetflow_core::models::{AnimalProfile, Product};

use crate::config::ValidationLimits;

fn out_of_range(field: &str, message: String) -> AppError {
    AppError::value_out_of_range(message).with_details(json!({ "field": field }))
}

fn check_text(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {max_len} characters"
        ))
        .with_details(json!({ "field": field })));
    }
    Ok(())
}

fn check_percent(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !(0.0..=limits::MAX_NUTRIENT_PERCENT).contains(&v) => Err(out_of_range(
            field,
            format!("{field} must be between 0 and 100 (got {v})"),
        )),
        _ => Ok(()),
    }
}

/// Validate an animal profile against the configured bounds
///
/// # Errors
///
/// Returns `ValueOutOfRange` for weight, age, or body score outside bounds,
/// and `InvalidInput` for an over-long name
pub fn validate_profile(profile: &AnimalProfile, bounds: &ValidationLimits) -> AppResult<()> {
    if let Some(name) = &profile.name {
        if name.chars().count() > limits::MAX_ANIMAL_NAME_LEN {
            return Err(AppError::invalid_input(format!(
                "name must be at most {} characters",
                limits::MAX_ANIMAL_NAME_LEN
            )));
        }
    }

    // NaN fails the range check as well
    if !(bounds.min_weight_kg..=bounds.max_weight_kg).contains(&profile.weight_kg) {
        return Err(out_of_range(
            "weight_kg",
            format!(
                "Weight must be between {} and {} kg (got {})",
                bounds.min_weight_kg, bounds.max_weight_kg, profile.weight_kg
            ),
        ));
    }

    if profile.age.years > bounds.max_age_years {
        return Err(out_of_range(
            "age.years",
            format!("Age must be at most {} years", bounds.max_age_years),
        ));
    }
    if profile.age.months > limits::MAX_AGE_MONTHS {
        return Err(out_of_range(
            "age.months",
            "Months must be between 0 and 11".to_owned(),
        ));
    }

    if !(body_condition::MIN_SCORE..=body_condition::MAX_SCORE).contains(&profile.body_score) {
        return Err(out_of_range(
            "body_score",
            format!(
                "Body score must be between {} and {} (got {})",
                body_condition::MIN_SCORE,
                body_condition::MAX_SCORE,
                profile.body_score
            ),
        ));
    }

    Ok(())
}

/// Validate a catalog product against the configured bounds
///
/// # Errors
///
/// Returns `MissingRequiredField` for an empty brand or name, `InvalidInput` for
/// over-long text, and `ValueOutOfRange` for density, nutrients, or price outside bounds.
/// The product id is attached to the error context.
pub fn validate_product(product: &Product, bounds: &ValidationLimits) -> AppResult<()> {
    validate_product_fields(product, bounds).map_err(|e| e.with_resource_id(product.id.clone()))
}

fn validate_product_fields(product: &Product, bounds: &ValidationLimits) -> AppResult<()> {
    check_text("brand", &product.brand, limits::MAX_BRAND_LEN)?;
    check_text("name", &product.name, limits::MAX_PRODUCT_NAME_LEN)?;

    if !(bounds.min_kcal_per_100g..=bounds.max_kcal_per_100g).contains(&product.kcal_per_100g) {
        return Err(out_of_range(
            "kcal_per_100g",
            format!(
                "kcal per 100g must be between {} and {} (got {})",
                bounds.min_kcal_per_100g, bounds.max_kcal_per_100g, product.kcal_per_100g
            ),
        ));
    }

    check_percent("protein", product.protein)?;
    check_percent("fat", product.fat)?;
    check_percent("fiber", product.fiber)?;

    if let Some(price) = product.price_per_kg {
        if price.is_nan() || price < 0.0 {
            return Err(out_of_range(
                "price_per_kg",
                format!("Price per kg cannot be negative (got {price})"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetflow_core::errors::ErrorCode;
    use vetflow_core::models::{Age, ProductSpecies, Species};

    fn profile(weight_kg: f64) -> AnimalProfile {
        AnimalProfile::new(Species::Dog, weight_kg, Age::new(4, 2), false)
    }

    #[test]
    fn test_weight_bounds_inclusive() {
        let bounds = ValidationLimits::default();
        assert!(validate_profile(&profile(0.1), &bounds).is_ok());
        assert!(validate_profile(&profile(100.0), &bounds).is_ok());
        assert_eq!(
            validate_profile(&profile(0.05), &bounds).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert!(validate_profile(&profile(f64::NAN), &bounds).is_err());
    }

    #[test]
    fn test_body_score_bounds() {
        let bounds = ValidationLimits::default();
        assert!(validate_profile(&profile(10.0).with_body_score(9), &bounds).is_ok());
        assert!(validate_profile(&profile(10.0).with_body_score(0), &bounds).is_err());
        assert!(validate_profile(&profile(10.0).with_body_score(10), &bounds).is_err());
    }

    #[test]
    fn test_months_above_eleven_rejected() {
        let bounds = ValidationLimits::default();
        let mut p = profile(10.0);
        p.age = Age::new(1, 12);
        let err = validate_profile(&p, &bounds).unwrap_err();
        assert_eq!(err.context.details["field"], "age.months");
    }

    #[test]
    fn test_product_rules() {
        let bounds = ValidationLimits::default();
        let ok = Product::new("p1", "Hills", "Adult", ProductSpecies::Dog, 350.0);
        assert!(validate_product(&ok, &bounds).is_ok());

        let zero_kcal = Product::new("p2", "Hills", "Adult", ProductSpecies::Dog, 0.0);
        let err = validate_product(&zero_kcal, &bounds).unwrap_err();
        assert_eq!(err.context.resource_id.as_deref(), Some("p2"));

        let no_brand = Product::new("p3", " ", "Adult", ProductSpecies::Dog, 350.0);
        assert_eq!(
            validate_product(&no_brand, &bounds).unwrap_err().code,
            ErrorCode::MissingRequiredField
        );

        let bad_protein = ok.clone().with_protein(120.0);
        assert!(validate_product(&bad_protein, &bounds).is_err());

        let negative_price = ok.with_price_per_kg(-1.0);
        assert!(validate_product(&negative_price, &bounds).is_err());
    }
}
