// ABOUTME: VetFlow CLI - energy requirements and feeding recommendations from the command line
// ABOUTME: Subcommands for energy calculation, catalog-backed recommendations, and catalog statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow
//!
//! Usage:
//! ```bash
//! # Energy requirement for a neutered 10 kg dog
//! vetflow-cli energy --species dog --weight 10 --age-years 3 --neutered
//!
//! # Recommendations from a JSON catalog export, cheapest first
//! vetflow-cli recommend --species cat --weight 4.2 --catalog products.json --sort price-asc
//!
//! # Catalog completeness report
//! vetflow-cli catalog stats --catalog products.json
//! ```

mod commands;
mod display;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use vetflow::errors::{AppResult, ErrorResponse};
use vetflow::intelligence::{RecommendationFilters, SortKey};
use vetflow::logging::LoggingConfig;
use vetflow::models::{
    ActivityLevel, Age, AnimalProfile, Goal, NutritionalObjective, PhysiologicalStatus, Species,
};

#[derive(Parser)]
#[command(
    name = "vetflow-cli",
    about = "VetFlow veterinary nutrition calculator",
    long_about = "Computes dog and cat energy requirements and ranks pet-food products against them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute RER and MER for an animal
    Energy {
        #[command(flatten)]
        animal: AnimalArgs,
    },

    /// Rank catalog products for an animal
    Recommend {
        #[command(flatten)]
        animal: AnimalArgs,

        /// JSON file containing an array of products
        #[arg(long)]
        catalog: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order (price-asc, price-desc, kcal-asc, kcal-desc, protein-desc, match-score)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Number of best-value products to highlight
        #[arg(long)]
        top: Option<usize>,
    },

    /// Catalog inspection commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// Show active product counts and field completeness
    Stats {
        /// JSON file containing an array of products
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(Args)]
struct AnimalArgs {
    /// Species (dog, cat)
    #[arg(long)]
    species: Species,

    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Age in whole years
    #[arg(long, default_value_t = 0)]
    age_years: u32,

    /// Additional months (0-11)
    #[arg(long, default_value_t = 0)]
    age_months: u32,

    /// Neutered or spayed
    #[arg(long)]
    neutered: bool,

    /// Body condition score (1-9)
    #[arg(long, default_value_t = 5)]
    body_score: i32,

    /// Animal name
    #[arg(long)]
    name: Option<String>,

    /// Goal (maintenance, weight-loss, weight-gain, growth)
    #[arg(long, default_value = "maintenance")]
    goal: Goal,

    /// Activity level (low, moderate, high)
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,

    /// Physiological status (normal, gestation, lactation, senior)
    #[arg(long, default_value = "normal")]
    status: PhysiologicalStatus,
}

impl AnimalArgs {
    fn profile(&self) -> AnimalProfile {
        let mut profile = AnimalProfile::new(
            self.species,
            self.weight,
            Age::new(self.age_years, self.age_months),
            self.neutered,
        )
        .with_body_score(self.body_score);
        profile.name.clone_from(&self.name);
        profile
    }

    const fn objective(&self) -> NutritionalObjective {
        NutritionalObjective::new(self.goal, self.activity, self.status)
    }
}

#[derive(Args)]
struct FilterArgs {
    /// Allowed brand (repeatable)
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Allowed product type (repeatable)
    #[arg(long = "type")]
    types: Vec<String>,

    /// Minimum daily cost
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum daily cost
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum protein percentage
    #[arg(long)]
    min_protein: Option<f64>,

    /// Maximum kcal per 100g
    #[arg(long)]
    max_kcal: Option<f64>,
}

impl From<FilterArgs> for RecommendationFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            brands: args.brands,
            types: args.types,
            min_price: args.min_price,
            max_price: args.max_price,
            min_protein: args.min_protein,
            max_kcal: args.max_kcal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    if let Err(error) = run(cli.command, cli.json).await {
        if cli.json {
            // Scripted callers read the failure from stdout
            println!(
                "{}",
                serde_json::to_string_pretty(&ErrorResponse::from(error))?
            );
            process::exit(1);
        }
        return Err(error.into());
    }

    Ok(())
}

async fn run(command: Command, json: bool) -> AppResult<()> {
    match command {
        Command::Energy { animal } => {
            commands::energy(&animal.profile(), &animal.objective(), json)
        }
        Command::Recommend {
            animal,
            catalog,
            filters,
            sort,
            top,
        } => {
            let request = commands::plan_request(
                animal.profile(),
                animal.objective(),
                filters.into(),
                sort,
                top,
            );
            commands::recommend(&catalog, &request, json).await
        }
        Command::Catalog {
            action: CatalogCommand::Stats { catalog },
        } => commands::catalog_stats(&catalog, json).await,
    }
}
