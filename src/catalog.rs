// ABOUTME: Product catalog port and a JSON-backed in-memory implementation
// ABOUTME: Species-scoped active-product queries plus catalog completeness statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

//! # Product Catalog
//!
//! The recommendation engine never fetches products itself. Callers obtain a
//! product list through a [`ProductCatalog`] and pass it in as a value.
//!
//! Query semantics for every implementation:
//! - inactive products are never returned
//! - a species query matches products for that species or for both
//! - results are ordered by brand ascending, ties keep catalog order

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vetflow_core::constants::limits::TOP_BRANDS_IN_STATS;
use vetflow_core::errors::{AppError, AppResult};
use vetflow_core::models::{Product, ProductSpecies, Species};

/// Product query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Restrict to products suitable for this species
    #[serde(default)]
    pub species: Option<Species>,
    /// Exact brand match
    #[serde(default)]
    pub brand: Option<String>,
    /// Exact product type match
    #[serde(default)]
    pub product_type: Option<String>,
    /// Case-insensitive substring of brand, name, or range
    #[serde(default)]
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Query every active product for one species
    #[must_use]
    pub fn for_species(species: Species) -> Self {
        Self {
            species: Some(species),
            ..Self::default()
        }
    }

    /// Whether a product satisfies this query
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if let Some(species) = self.species {
            if !product.species.accepts(species) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if &product.brand != brand {
                return false;
            }
        }
        if let Some(product_type) = &self.product_type {
            if &product.product_type != product_type {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = [&product.brand, &product.name, &product.range]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Source of catalog products
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch active products matching `query`, ordered by brand
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying source is unavailable
    async fn fetch_products(&self, query: &CatalogQuery) -> AppResult<Vec<Product>>;
}

/// Catalog held entirely in memory, typically loaded from a JSON export
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Wrap an existing product list
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document is not a product array
    pub fn from_json(json: &str) -> AppResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        debug!(count = products.len(), "Parsed product catalog");
        Ok(Self::new(products))
    }

    /// Load a JSON array of products from a file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing file, `StorageError` for other
    /// I/O failures, and a serialization error for malformed content
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            count = catalog.products.len(),
            "Loaded product catalog"
        );
        Ok(catalog)
    }

    /// All products, including inactive ones
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Completeness statistics over active products
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_products(&self.products)
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn fetch_products(&self, query: &CatalogQuery) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|product| query.matches(product))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.brand.cmp(&b.brand));

        debug!(
            species = ?query.species,
            matched = products.len(),
            "Catalog query resolved"
        );
        Ok(products)
    }
}

/// Number of products carrying each optional field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCompleteness {
    /// Products with a protein value
    pub protein: usize,
    /// Products with a fat value
    pub fat: usize,
    /// Products with a fiber value
    pub fiber: usize,
    /// Products with a price
    pub price: usize,
    /// Products with an image
    pub image: usize,
}

/// Brand with its active product count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCount {
    /// Brand name
    pub brand: String,
    /// Active products of that brand
    pub count: usize,
}

/// Summary of the active catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Active products
    pub total: usize,
    /// Active products per target species
    pub by_species: Vec<(ProductSpecies, usize)>,
    /// Largest brands, most products first, ties by name
    pub top_brands: Vec<BrandCount>,
    /// Optional-field coverage
    pub completeness: FieldCompleteness,
}

impl CatalogStats {
    /// Compute statistics over the active products in `products`
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let active: Vec<&Product> = products.iter().filter(|p| p.is_active).collect();

        let mut species_counts: HashMap<ProductSpecies, usize> = HashMap::new();
        let mut brand_counts: HashMap<&str, usize> = HashMap::new();
        let mut completeness = FieldCompleteness::default();

        for product in &active {
            *species_counts.entry(product.species).or_default() += 1;
            *brand_counts.entry(product.brand.as_str()).or_default() += 1;

            completeness.protein += usize::from(product.protein.is_some());
            completeness.fat += usize::from(product.fat.is_some());
            completeness.fiber += usize::from(product.fiber.is_some());
            completeness.price += usize::from(product.price_per_kg.is_some());
            completeness.image += usize::from(product.image_url.is_some());
        }

        let mut by_species: Vec<(ProductSpecies, usize)> = species_counts.into_iter().collect();
        by_species.sort_by_key(|(species, _)| *species);

        let mut top_brands: Vec<BrandCount> = brand_counts
            .into_iter()
            .map(|(brand, count)| BrandCount {
                brand: brand.to_owned(),
                count,
            })
            .collect();
        top_brands.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.brand.cmp(&b.brand)));
        top_brands.truncate(TOP_BRANDS_IN_STATS);

        Self {
            total: active.len(),
            by_species,
            top_brands,
            completeness,
        }
    }

    /// Share of active products carrying a field, as a whole percentage
    #[must_use]
    pub fn percent(&self, count: usize) -> u32 {
        let total = self.total.max(1) as f64;
        (count as f64 / total * 100.0).round() as u32
    }
}
