// ABOUTME: Text output formatting for vetflow-cli
// ABOUTME: Human-readable rendering of energy results, plans, and catalog statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

use vetflow::catalog::CatalogStats;
use vetflow::intelligence::Recommendation;
use vetflow::models::EnergyResult;
use vetflow::services::NutritionPlan;

/// Display an energy result
pub fn energy(result: &EnergyResult) {
    println!("RER:    {} kcal/day", result.rer);
    println!("Factor: {}", result.factor);
    println!("MER:    {} kcal/day", result.mer);
    println!("        {}", result.formula_description);
}

fn recommendation_line(rec: &Recommendation) -> String {
    let price = if rec.is_priced() {
        format!(
            "{:.2}/day {:.2}/month",
            rec.daily_cost, rec.monthly_cost
        )
    } else {
        "price unknown".to_owned()
    };
    format!(
        "{} {} | {:.0} g/day, {:.0} g/meal | {} kcal/100g | {price}",
        rec.product.brand,
        rec.product.name,
        rec.daily_quantity_grams,
        rec.per_meal_grams,
        rec.product.kcal_per_100g,
    )
}

/// Display a nutrition plan
pub fn plan(plan: &NutritionPlan) {
    energy(&plan.energy);

    println!("\nBest value:");
    if plan.top.is_empty() {
        println!("  (no priced products)");
    }
    for (rank, rec) in plan.top.iter().enumerate() {
        println!("  {}. {}", rank + 1, recommendation_line(rec));
    }

    println!("\nAll matching products ({}):", plan.recommendations.len());
    for rec in &plan.recommendations {
        println!("  - {}", recommendation_line(rec));
    }

    println!("\nBrands: {}", plan.brands.join(", "));
    println!("Types:  {}", plan.types.join(", "));
}

/// Display catalog statistics
pub fn catalog_stats(stats: &CatalogStats) {
    println!("Active products: {}", stats.total);

    println!("\nBy species:");
    for (species, count) in &stats.by_species {
        println!("  - {}: {count}", species.as_str());
    }

    println!("\nTop brands:");
    for brand in &stats.top_brands {
        println!("  - {}: {}", brand.brand, brand.count);
    }

    let c = &stats.completeness;
    println!("\nCompleteness:");
    for (label, count) in [
        ("protein", c.protein),
        ("fat", c.fat),
        ("fiber", c.fiber),
        ("price", c.price),
        ("image", c.image),
    ] {
        println!(
            "  - {label}: {count}/{} ({}%)",
            stats.total,
            stats.percent(count)
        );
    }
}
