// ABOUTME: Core data models for the recipe discovery engine
// ABOUTME: Recipe catalog records, ingredient quantities, user preferences, and ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient quantity tagged union
pub mod quantity;
/// Recipe and ingredient records
pub mod recipe;
/// Questionnaire preferences and transient filter state
pub mod preferences;
/// User rating events
pub mod rating;

pub use preferences::{ActiveFilters, Preferences};
pub use quantity::Quantity;
pub use rating::UserRating;
pub use recipe::{Difficulty, Ingredient, MealType, Recipe, ScaledIngredient};
