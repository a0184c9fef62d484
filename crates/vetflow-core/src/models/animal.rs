// ABOUTME: Animal biometrics and nutritional objective models
// ABOUTME: Species, Goal, ActivityLevel, PhysiologicalStatus, AnimalProfile, and NutritionalObjective
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Species {
    /// Dog
    Dog,
    /// Cat
    Cat,
}

impl Species {
    /// Wire name of the species
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

/// Nutritional goal for the animal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Keep current weight
    Maintenance,
    /// Lose weight
    WeightLoss,
    /// Gain weight
    WeightGain,
    /// Growing animal (puppy, kitten)
    Growth,
}

impl Goal {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::WeightLoss => "weight-loss",
            Self::WeightGain => "weight-gain",
            Self::Growth => "growth",
        }
    }
}

/// Activity level of the animal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Mostly indoor, short walks
    Low,
    /// Regular daily exercise
    Moderate,
    /// Working or sporting animal
    High,
}

impl ActivityLevel {
    /// Wire name of the activity level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Position in the `[low, moderate, high]` maintenance factor tables
    #[must_use]
    pub const fn table_index(&self) -> usize {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }
}

/// Physiological status of the animal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhysiologicalStatus {
    /// No special status
    #[default]
    Normal,
    /// Pregnant
    Gestation,
    /// Nursing
    Lactation,
    /// Senior animal
    Senior,
}

impl PhysiologicalStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Gestation => "gestation",
            Self::Lactation => "lactation",
            Self::Senior => "senior",
        }
    }
}

macro_rules! wire_enum_traits {
    ($ty:ty, $label:literal, [$($name:literal => $variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    other => Err(AppError::invalid_input(format!(
                        "Invalid {}: '{other}'",
                        $label
                    ))),
                }
            }
        }
    };
}

wire_enum_traits!(Species, "species", ["dog" => Species::Dog, "cat" => Species::Cat]);
wire_enum_traits!(Goal, "nutritional goal", [
    "maintenance" => Goal::Maintenance,
    "weight-loss" => Goal::WeightLoss,
    "weight-gain" => Goal::WeightGain,
    "growth" => Goal::Growth,
]);
wire_enum_traits!(ActivityLevel, "activity level", [
    "low" => ActivityLevel::Low,
    "moderate" => ActivityLevel::Moderate,
    "high" => ActivityLevel::High,
]);
wire_enum_traits!(PhysiologicalStatus, "physiological status", [
    "normal" => PhysiologicalStatus::Normal,
    "gestation" => PhysiologicalStatus::Gestation,
    "lactation" => PhysiologicalStatus::Lactation,
    "senior" => PhysiologicalStatus::Senior,
]);

/// Age expressed as whole years plus months (0-11)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Age {
    /// Whole years
    pub years: u32,
    /// Additional months
    pub months: u32,
}

impl Age {
    /// Create an age from years and months
    #[must_use]
    pub const fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    /// Total age in months
    #[must_use]
    pub const fn total_months(&self) -> u32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }
}

/// Snapshot of an animal's biometrics for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalProfile {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Species
    pub species: Species,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age
    pub age: Age,
    /// Neutered or spayed
    pub neutered: bool,
    /// Body condition score (1-9, 5 is ideal)
    pub body_score: i32,
}

impl AnimalProfile {
    /// Create a profile with an ideal body score and no name
    #[must_use]
    pub fn new(species: Species, weight_kg: f64, age: Age, neutered: bool) -> Self {
        Self {
            name: None,
            species,
            weight_kg,
            age,
            neutered,
            body_score: crate::constants::body_condition::IDEAL_SCORE,
        }
    }

    /// Set the body condition score
    #[must_use]
    pub const fn with_body_score(mut self, body_score: i32) -> Self {
        self.body_score = body_score;
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Nutritional objective paired with a profile for one calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionalObjective {
    /// Goal
    pub goal: Goal,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Physiological status
    #[serde(default)]
    pub physiological_status: PhysiologicalStatus,
}

impl NutritionalObjective {
    /// Create an objective
    #[must_use]
    pub const fn new(
        goal: Goal,
        activity_level: ActivityLevel,
        physiological_status: PhysiologicalStatus,
    ) -> Self {
        Self {
            goal,
            activity_level,
            physiological_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names_round_trip() {
        assert_eq!("weight-loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!(" Cat ".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!(Goal::WeightGain.to_string(), "weight-gain");
        assert_eq!(
            serde_json::to_string(&PhysiologicalStatus::Lactation).unwrap(),
            "\"lactation\""
        );
    }

    #[test]
    fn test_unknown_wire_name_is_rejected() {
        let err = "hamster".parse::<Species>().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
        assert!(err.message.contains("hamster"));
    }

    #[test]
    fn test_age_total_months() {
        assert_eq!(Age::new(2, 6).total_months(), 30);
        assert_eq!(Age::default().total_months(), 0);
    }

    #[test]
    fn test_objective_status_defaults_to_normal() {
        let objective: NutritionalObjective =
            serde_json::from_str(r#"{"goal":"growth","activity_level":"high"}"#).unwrap();
        assert_eq!(objective.physiological_status, PhysiologicalStatus::Normal);
    }
}
