// ABOUTME: Energy requirement calculations using standard veterinary formulas
// ABOUTME: RER, MER factor selection, body-condition adjustment, and the aggregated EnergyResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! Energy Calculator Module
//!
//! Implements the resting and maintenance energy requirement formulas used in
//! small-animal clinical nutrition. Every function here is pure and total: any
//! well-typed input produces a value, and range validation is left to
//! [`crate::validation`].
//!
//! # Scientific References
//!
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*.
//!   The National Academies Press. <https://doi.org/10.17226/10668>
//!
//! - Kleiber, M. (1947). Body size and metabolic rate.
//!   *Physiological Reviews*, 27(4), 511-541.
//!   <https://doi.org/10.1152/physrev.1947.27.4.511>
//!
//! - WSAVA Global Nutrition Committee (2011). Nutritional assessment guidelines.
//!   *Journal of Small Animal Practice*, 52(7), 385-396.
//!   <https://doi.org/10.1111/j.1748-5827.2011.01079.x>

use serde::{Deserialize, Serialize};
use vetflow_core::constants::{body_condition, mer_factors, rer};
use vetflow_core::models::{
    ActivityLevel, AnimalProfile, EnergyResult, Goal, NutritionalObjective, PhysiologicalStatus,
    Species,
};

/// MER together with the factor that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MerCalculation {
    /// Maintenance Energy Requirement (kcal/day), unrounded
    pub mer: f64,
    /// Multiplier applied to RER
    pub factor: f64,
}

/// Calculate Resting Energy Requirement
///
/// Formula:
/// - `70 x weight^0.75` for 2 kg <= weight <= 45 kg
/// - `30 x weight + 70` below 2 kg or above 45 kg
///
/// Exactly 2 kg and exactly 45 kg use the allometric form. No rounding happens here.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms (callers guarantee > 0)
///
/// # Reference
/// NRC (2006), Kleiber (1947)
#[must_use]
#[allow(clippy::suboptimal_flops)] // unfused: results must match `30 x weight + 70` bit for bit
pub fn compute_rer(weight_kg: f64) -> f64 {
    if weight_kg < rer::LINEAR_LOWER_THRESHOLD_KG || weight_kg > rer::LINEAR_UPPER_THRESHOLD_KG {
        return rer::LINEAR_SLOPE * weight_kg + rer::LINEAR_INTERCEPT;
    }
    rer::ALLOMETRIC_COEFFICIENT * weight_kg.powf(rer::ALLOMETRIC_EXPONENT)
}

/// Select the multiplier converting RER into MER
///
/// Priority order, first match wins:
/// 1. Physiological status other than normal (gestation, lactation, senior)
/// 2. Goal other than maintenance (growth, weight loss, weight gain)
/// 3. Maintenance table keyed by species, neuter status, and activity level
///
/// # Reference
/// WSAVA Global Nutrition Committee (2011)
#[must_use]
pub const fn select_mer_factor(
    species: Species,
    neutered: bool,
    activity_level: ActivityLevel,
    goal: Goal,
    physiological_status: PhysiologicalStatus,
) -> f64 {
    match (physiological_status, species) {
        (PhysiologicalStatus::Gestation, Species::Dog) => return mer_factors::GESTATION_DOG,
        (PhysiologicalStatus::Gestation, Species::Cat) => return mer_factors::GESTATION_CAT,
        (PhysiologicalStatus::Lactation, Species::Dog) => return mer_factors::LACTATION_DOG,
        (PhysiologicalStatus::Lactation, Species::Cat) => return mer_factors::LACTATION_CAT,
        (PhysiologicalStatus::Senior, Species::Dog) => return mer_factors::SENIOR_DOG,
        (PhysiologicalStatus::Senior, Species::Cat) => return mer_factors::SENIOR_CAT,
        (PhysiologicalStatus::Normal, _) => {}
    }

    match (goal, species) {
        (Goal::Growth, Species::Dog) => mer_factors::GROWTH_DOG,
        (Goal::Growth, Species::Cat) => mer_factors::GROWTH_CAT,
        (Goal::WeightLoss, _) => mer_factors::WEIGHT_LOSS,
        (Goal::WeightGain, _) => mer_factors::WEIGHT_GAIN,
        (Goal::Maintenance, _) => maintenance_factor(species, neutered, activity_level),
    }
}

const fn maintenance_factor(species: Species, neutered: bool, activity_level: ActivityLevel) -> f64 {
    let table = match (species, neutered) {
        (Species::Dog, false) => mer_factors::DOG_INTACT,
        (Species::Dog, true) => mer_factors::DOG_NEUTERED,
        (Species::Cat, false) => mer_factors::CAT_INTACT,
        (Species::Cat, true) => mer_factors::CAT_NEUTERED,
    };
    table[activity_level.table_index()]
}

/// Calculate Maintenance Energy Requirement
///
/// Formula: MER = RER x factor, where the factor comes from [`select_mer_factor`].
/// The factor is returned alongside MER for display and audit.
#[must_use]
pub fn compute_mer(
    rer_kcal: f64,
    species: Species,
    neutered: bool,
    activity_level: ActivityLevel,
    goal: Goal,
    physiological_status: PhysiologicalStatus,
) -> MerCalculation {
    let factor = select_mer_factor(species, neutered, activity_level, goal, physiological_status);
    MerCalculation {
        mer: rer_kcal * factor,
        factor,
    }
}

/// Multiplier for a body condition score: 1.15 at or below 3, 0.75 at or above 7, else 1.0
///
/// Scores outside 1-9 are not clamped; they fall into whichever rule applies.
#[must_use]
pub const fn body_score_multiplier(body_score: i32) -> f64 {
    if body_score <= body_condition::UNDERWEIGHT_THRESHOLD {
        body_condition::UNDERWEIGHT_MULTIPLIER
    } else if body_score >= body_condition::OVERWEIGHT_THRESHOLD {
        body_condition::OVERWEIGHT_MULTIPLIER
    } else {
        body_condition::IDEAL_MULTIPLIER
    }
}

/// Adjust an energy requirement for body condition
///
/// - Score <= 3 (too thin): +15%
/// - Score >= 7 (overweight): -25%
/// - Score 4-6: unchanged
#[must_use]
pub fn adjust_for_body_score(energy_kcal: f64, body_score: i32) -> f64 {
    energy_kcal * body_score_multiplier(body_score)
}

/// Round half-up to a non-negative whole number of kcal
///
/// Negative and NaN inputs (only reachable with out-of-contract weights) saturate to 0.
fn round_kcal(kcal: f64) -> u32 {
    (kcal + 0.5).floor().max(0.0) as u32
}

/// Calculate the complete energy requirement for an animal
///
/// Steps:
/// 1. RER from weight
/// 2. MER and factor from species, neuter status, activity, goal, and status
/// 3. Body-condition adjustment of MER
/// 4. Half-up rounding of RER and adjusted MER, only here at the output boundary
///
/// The description embeds the unrounded RER and MER to one decimal place.
#[must_use]
pub fn calculate_energy_requirement(
    profile: &AnimalProfile,
    objective: &NutritionalObjective,
) -> EnergyResult {
    let rer_kcal = compute_rer(profile.weight_kg);

    let MerCalculation { mer, factor } = compute_mer(
        rer_kcal,
        profile.species,
        profile.neutered,
        objective.activity_level,
        objective.goal,
        objective.physiological_status,
    );

    let final_mer = adjust_for_body_score(mer, profile.body_score);

    EnergyResult {
        rer: round_kcal(rer_kcal),
        mer: round_kcal(final_mer),
        factor,
        formula_description: format!(
            "RER = {rer_kcal:.1} kcal/day, Factor = {factor}, MER = {final_mer:.1} kcal/day"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetflow_core::models::Age;

    #[test]
    fn test_rer_threshold_boundaries_use_allometric_form() {
        let at_two = compute_rer(2.0);
        let at_forty_five = compute_rer(45.0);

        assert!((at_two - 70.0 * 2.0_f64.powf(0.75)).abs() < 1e-9);
        assert!((at_forty_five - 70.0 * 45.0_f64.powf(0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_rer_linear_branch() {
        assert!((compute_rer(1.5) - 115.0).abs() < f64::EPSILON);
        assert!((compute_rer(50.0) - 1570.0).abs() < f64::EPSILON);
        assert!((compute_rer(0.0) - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_kcal_half_up() {
        assert_eq!(round_kcal(317.5), 318);
        assert_eq!(round_kcal(317.49), 317);
        assert_eq!(round_kcal(-12.0), 0);
        assert_eq!(round_kcal(f64::NAN), 0);
    }

    #[test]
    fn test_maintenance_table_cat_neutered() {
        let factors: Vec<f64> = [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High]
            .into_iter()
            .map(|level| maintenance_factor(Species::Cat, true, level))
            .collect();
        assert_eq!(factors, vec![1.0, 1.2, 1.4]);
    }

    #[test]
    fn test_description_uses_unrounded_values() {
        let profile = AnimalProfile::new(Species::Dog, 10.0, Age::new(3, 0), true);
        let objective = NutritionalObjective::new(
            Goal::Maintenance,
            ActivityLevel::Moderate,
            PhysiologicalStatus::Normal,
        );

        let result = calculate_energy_requirement(&profile, &objective);

        // 70 * 10^0.75 = 393.6478... ; x1.6 = 629.8365...
        assert_eq!(
            result.formula_description,
            "RER = 393.6 kcal/day, Factor = 1.6, MER = 629.8 kcal/day"
        );
        assert_eq!(result.rer, 394);
        assert_eq!(result.mer, 630);
    }
}
