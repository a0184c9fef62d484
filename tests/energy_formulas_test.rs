// ABOUTME: Algorithm tests for RER, MER factor selection, body-condition adjustment, and aggregation
// ABOUTME: Covers formula branches, threshold boundaries, factor priority, rounding, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp, clippy::suboptimal_flops)]
#![allow(missing_docs)]

use vetflow::intelligence::energy_calculator::{
    adjust_for_body_score, calculate_energy_requirement, compute_mer, compute_rer,
    select_mer_factor,
};
use vetflow::models::{
    ActivityLevel, Age, AnimalProfile, Goal, NutritionalObjective, PhysiologicalStatus, Species,
};

mod common;

// ============================================================================
// RER - Resting Energy Requirement
// ============================================================================

#[test]
fn test_rer_allometric_range() {
    for weight in [2.0, 5.0, 10.0, 22.5, 45.0] {
        let expected = 70.0 * f64::powf(weight, 0.75);
        assert!(
            (compute_rer(weight) - expected).abs() < 1e-9,
            "allometric form expected at {weight} kg"
        );
    }
}

#[test]
fn test_rer_reference_values() {
    assert!((compute_rer(5.0) - 234.0).abs() < 0.5);
    assert!((compute_rer(10.0) - 393.6).abs() < 0.1);
    assert_eq!(compute_rer(1.5), 115.0);
    assert_eq!(compute_rer(50.0), 1570.0);
}

#[test]
fn test_rer_linear_just_outside_thresholds() {
    assert!((compute_rer(1.99) - (30.0 * 1.99 + 70.0)).abs() < 1e-9);
    assert!((compute_rer(45.01) - (30.0 * 45.01 + 70.0)).abs() < 1e-9);
}

#[test]
fn test_rer_linear_branch_matches_unfused_formula() {
    // 0.01 kg steps over both linear ranges
    let light = (1..200).map(|step| f64::from(step) * 0.01);
    let heavy = (4501..10000).map(|step| f64::from(step) * 0.01);

    for weight in light.chain(heavy) {
        assert_eq!(
            compute_rer(weight).to_bits(),
            (30.0 * weight + 70.0).to_bits(),
            "linear RER differs at {weight} kg"
        );
    }
}

#[test]
fn test_rer_is_total_for_degenerate_weight() {
    assert_eq!(compute_rer(0.0), 70.0);
    assert_eq!(compute_rer(-1.0), 40.0);
}

// ============================================================================
// MER factor selection
// ============================================================================

#[test]
fn test_status_overrides_goal_and_table() {
    assert_eq!(
        select_mer_factor(
            Species::Dog,
            false,
            ActivityLevel::Moderate,
            Goal::Maintenance,
            PhysiologicalStatus::Gestation
        ),
        3.0
    );
    assert_eq!(
        select_mer_factor(
            Species::Cat,
            true,
            ActivityLevel::High,
            Goal::WeightLoss,
            PhysiologicalStatus::Lactation
        ),
        4.0
    );
    assert_eq!(
        select_mer_factor(
            Species::Dog,
            true,
            ActivityLevel::Low,
            Goal::Growth,
            PhysiologicalStatus::Senior
        ),
        1.4
    );
    assert_eq!(
        select_mer_factor(
            Species::Cat,
            false,
            ActivityLevel::Low,
            Goal::Maintenance,
            PhysiologicalStatus::Senior
        ),
        1.1
    );
}

#[test]
fn test_goal_factors_when_status_normal() {
    let normal = PhysiologicalStatus::Normal;
    assert_eq!(
        select_mer_factor(Species::Dog, false, ActivityLevel::High, Goal::Growth, normal),
        2.0
    );
    assert_eq!(
        select_mer_factor(Species::Cat, true, ActivityLevel::Low, Goal::Growth, normal),
        2.5
    );
    assert_eq!(
        select_mer_factor(Species::Dog, false, ActivityLevel::High, Goal::WeightLoss, normal),
        1.0
    );
    assert_eq!(
        select_mer_factor(Species::Cat, true, ActivityLevel::Low, Goal::WeightGain, normal),
        1.5
    );
}

#[test]
fn test_maintenance_table() {
    let cases = [
        (Species::Dog, false, [1.6, 1.8, 2.0]),
        (Species::Dog, true, [1.4, 1.6, 1.8]),
        (Species::Cat, false, [1.2, 1.4, 1.6]),
        (Species::Cat, true, [1.0, 1.2, 1.4]),
    ];
    let levels = [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High];

    for (species, neutered, expected) in cases {
        for (level, factor) in levels.into_iter().zip(expected) {
            assert_eq!(
                select_mer_factor(
                    species,
                    neutered,
                    level,
                    Goal::Maintenance,
                    PhysiologicalStatus::Normal
                ),
                factor,
                "{species} neutered={neutered} {level}"
            );
        }
    }
}

#[test]
fn test_compute_mer_returns_factor() {
    let result = compute_mer(
        300.0,
        Species::Dog,
        false,
        ActivityLevel::High,
        Goal::Maintenance,
        PhysiologicalStatus::Normal,
    );
    assert_eq!(result.mer, 600.0);
    assert_eq!(result.factor, 2.0);
}

// ============================================================================
// Body condition adjustment
// ============================================================================

#[test]
fn test_body_score_adjustment() {
    assert!((adjust_for_body_score(500.0, 3) - 575.0).abs() < 1e-9);
    assert!((adjust_for_body_score(500.0, 1) - 575.0).abs() < 1e-9);
    assert!((adjust_for_body_score(500.0, 7) - 375.0).abs() < 1e-9);
    assert!((adjust_for_body_score(500.0, 9) - 375.0).abs() < 1e-9);
    for score in 4..=6 {
        assert_eq!(adjust_for_body_score(500.0, score), 500.0);
    }
}

#[test]
fn test_body_score_out_of_range_is_not_clamped() {
    assert!((adjust_for_body_score(500.0, 0) - 575.0).abs() < 1e-9);
    assert!((adjust_for_body_score(500.0, 12) - 375.0).abs() < 1e-9);
}

// ============================================================================
// Aggregated energy result
// ============================================================================

#[test]
fn test_energy_requirement_for_adult_dog() {
    common::init_test_logging();
    let result = calculate_energy_requirement(
        &common::adult_dog(),
        &common::maintenance(ActivityLevel::Moderate),
    );

    assert_eq!(result.rer, 394);
    assert_eq!(result.mer, 630);
    assert_eq!(result.factor, 1.6);
    assert!(result.formula_description.starts_with("RER = 393.6 kcal/day"));
}

#[test]
fn test_energy_requirement_rounds_after_adjustment() {
    // 5 kg intact cat, high activity, body score 8: 234.06 * 1.6 * 0.75 = 280.87
    let profile = AnimalProfile::new(Species::Cat, 5.0, Age::new(2, 0), false).with_body_score(8);
    let result = calculate_energy_requirement(&profile, &common::maintenance(ActivityLevel::High));

    assert_eq!(result.rer, 234);
    assert_eq!(result.mer, 281);
    assert_eq!(result.factor, 1.6);
}

#[test]
fn test_integer_factor_is_printed_without_decimals() {
    let profile = AnimalProfile::new(Species::Dog, 20.0, Age::new(1, 0), false);
    let objective = NutritionalObjective::new(
        Goal::Maintenance,
        ActivityLevel::High,
        PhysiologicalStatus::Normal,
    );
    let result = calculate_energy_requirement(&profile, &objective);

    assert!(result.formula_description.contains("Factor = 2,"));
}

#[test]
fn test_body_score_monotonicity() {
    let objective = common::maintenance(ActivityLevel::Moderate);
    let mer_at = |score: i32| {
        calculate_energy_requirement(&common::adult_dog().with_body_score(score), &objective).mer
    };

    assert!(mer_at(3) > mer_at(5));
    assert!(mer_at(5) > mer_at(7));
    assert_eq!(mer_at(4), mer_at(6));
}

#[test]
fn test_energy_requirement_is_deterministic() {
    let profile = common::adult_cat().with_body_score(2);
    let objective = NutritionalObjective::new(
        Goal::WeightGain,
        ActivityLevel::Low,
        PhysiologicalStatus::Normal,
    );

    assert_eq!(
        calculate_energy_requirement(&profile, &objective),
        calculate_energy_requirement(&profile, &objective)
    );
}
