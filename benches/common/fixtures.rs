// ABOUTME: Benchmark fixtures generating synthetic recipe catalogs
// ABOUTME: Deterministic data so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating recipe catalogs.

use recipe_discovery::models::{Difficulty, Ingredient, MealType, Recipe};

const CUISINES: [&str; 8] = [
    "Italian", "Indian", "Mexican", "Japanese", "Thai", "Greek", "American", "French",
];
const SOURCES: [&str; 4] = ["Test Kitchen", "Home Cook", "Bistro Blog", "Family Table"];
const DIETS: [&str; 4] = ["Vegetarian", "Vegan", "Gluten-Free", "Dairy-Free"];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Roughly what the app ships with
    Small,
    /// A large personal collection
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Large => 5_000,
        }
    }
}

/// Generate `size` recipes with varied cuisines, times, and ingredients
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    (0..size.count()).map(generate_recipe).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_recipe(index: usize) -> Recipe {
    let difficulty = match index % 3 {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    };
    let meal_type = match index % 3 {
        0 => MealType::Breakfast,
        1 => MealType::Lunch,
        _ => MealType::Dinner,
    };
    let cook_time = 5 + ((index * 37) % 240) as u32;
    let servings = 1 + (index % 6) as u32;

    let mut recipe = Recipe::new(
        format!("bench-{index}"),
        format!("Benchmark Dish {index}"),
        difficulty,
        cook_time,
        servings,
    )
    .with_source(SOURCES[index % SOURCES.len()])
    .with_cuisine(CUISINES[index % CUISINES.len()])
    .with_cuisine(CUISINES[(index * 3 + 1) % CUISINES.len()])
    .with_meal_type(meal_type)
    .with_meal_prep_duration(1 + (index % 7) as u32)
    .with_rating(3.0 + (index % 20) as f64 / 10.0)
    .with_dietary_tag(DIETS[index % DIETS.len()]);

    for line in 0..10 {
        let amount = 0.25 * (1 + (index + line) % 12) as f64;
        recipe = recipe.with_ingredient(Ingredient::new(amount, "cup", format!("item {line}")));
    }
    recipe.with_ingredient(Ingredient::to_taste("", "salt"))
}
