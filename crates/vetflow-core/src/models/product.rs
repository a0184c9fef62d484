// ABOUTME: Commercial pet-food product model supplied by the catalog
// ABOUTME: Product, ProductSpecies, and Availability definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use super::animal::Species;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Species a product is formulated for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ProductSpecies {
    /// Dogs only
    Dog,
    /// Cats only
    Cat,
    /// Suitable for both
    Both,
}

impl ProductSpecies {
    /// Whether a product for this target can be fed to `species`
    #[must_use]
    pub const fn accepts(&self, species: Species) -> bool {
        matches!(
            (self, species),
            (Self::Both, _) | (Self::Dog, Species::Dog) | (Self::Cat, Species::Cat)
        )
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Both => "both",
        }
    }
}

/// Region where a product is sold
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// France only
    #[default]
    France,
    /// Across Europe
    Europe,
}

const fn default_active() -> bool {
    true
}

/// Read-only product record from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Opaque unique identifier
    pub id: String,
    /// Brand name (e.g. "Royal Canin")
    pub brand: String,
    /// Product name
    pub name: String,
    /// Product line (e.g. "Veterinary")
    #[serde(default)]
    pub range: String,
    /// Target species
    pub species: ProductSpecies,
    /// Category (e.g. "weight-control")
    #[serde(default, rename = "type")]
    pub product_type: String,
    /// Caloric density (kcal per 100g)
    pub kcal_per_100g: f64,
    /// Protein percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Fiber percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Approximate price per kilogram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    /// Availability region
    #[serde(default)]
    pub availability: Availability,
    /// Product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the product is currently sold
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create an active product with the required fields; optional data defaults to unknown
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
        species: ProductSpecies,
        kcal_per_100g: f64,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            name: name.into(),
            range: String::new(),
            species,
            product_type: String::new(),
            kcal_per_100g,
            protein: None,
            fat: None,
            fiber: None,
            price_per_kg: None,
            availability: Availability::default(),
            product_url: None,
            image_url: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the product category
    #[must_use]
    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// Set the price per kilogram
    #[must_use]
    pub fn with_price_per_kg(mut self, price_per_kg: f64) -> Self {
        self.price_per_kg = Some(price_per_kg);
        self
    }

    /// Set the protein percentage
    #[must_use]
    pub fn with_protein(mut self, protein: f64) -> Self {
        self.protein = Some(protein);
        self
    }
}
