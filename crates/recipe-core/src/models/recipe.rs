// ABOUTME: Data models for catalog recipes and their ingredients
// ABOUTME: Defines Recipe, Ingredient, ScaledIngredient, Difficulty, and MealType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quantity::Quantity;
use crate::errors::AppError;

/// Cooking difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    #[default]
    Easy,
    /// Some technique required
    Medium,
    /// Advanced techniques
    Hard,
}

impl Difficulty {
    /// Wire name of this difficulty
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "unknown difficulty '{other}' (expected easy, medium, or hard)"
            ))),
        }
    }
}

/// Meal a recipe is intended for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl MealType {
    /// Wire name of this meal type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(AppError::invalid_input(format!(
                "unknown meal type '{other}' (expected breakfast, lunch, or dinner)"
            ))),
        }
    }
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount in `unit`
    #[serde(default, alias = "amount")]
    pub quantity: Quantity,
    /// Measurement unit as written ("cup", "tbsp", "")
    #[serde(default)]
    pub unit: String,
    /// What the ingredient is
    #[serde(alias = "name")]
    pub item: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(quantity: impl Into<Quantity>, unit: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            unit: unit.into(),
            item: item.into(),
        }
    }

    /// Create an unquantified ("to taste") ingredient line
    #[must_use]
    pub fn to_taste(unit: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            quantity: Quantity::Unspecified,
            unit: unit.into(),
            item: item.into(),
        }
    }
}

/// Ingredient line after scaling
///
/// Same shape as [`Ingredient`]; scaled amounts are carried as
/// [`Quantity::PreRendered`] display strings.
pub type ScaledIngredient = Ingredient;

/// Immutable catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Publisher name
    #[serde(default)]
    pub source: String,
    /// Link to the original recipe
    #[serde(default)]
    pub source_url: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Cuisine tags in display order
    pub cuisines: Vec<String>,
    /// Meal the recipe is intended for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Number of days the recipe is designed to last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_prep_duration: Option<u32>,
    /// Cooking difficulty
    pub difficulty: Difficulty,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Serving size the ingredient quantities were written for
    pub servings: u32,
    /// Average rating in `[0, 5]`
    #[serde(default)]
    pub rating: f64,
    /// Ingredient lines in order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Cooking instructions (ordered steps)
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Dietary labels ("Vegetarian", "Gluten-Free")
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Health labels ("High Protein", "Low Carb")
    #[serde(default)]
    pub health_tags: Vec<String>,
}

impl Recipe {
    /// Create a recipe with the required fields and empty optional data
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        difficulty: Difficulty,
        cook_time: u32,
        servings: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source: String::new(),
            source_url: String::new(),
            image: String::new(),
            cuisines: Vec::new(),
            meal_type: None,
            meal_prep_duration: None,
            difficulty,
            cook_time,
            servings,
            rating: 0.0,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            dietary_tags: Vec::new(),
            health_tags: Vec::new(),
        }
    }

    /// Set the publisher name
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Add a cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.push(cuisine.into());
        self
    }

    /// Set the intended meal
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Set the meal-prep duration in days
    #[must_use]
    pub const fn with_meal_prep_duration(mut self, days: u32) -> Self {
        self.meal_prep_duration = Some(days);
        self
    }

    /// Set the average rating
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Add a dietary tag
    #[must_use]
    pub fn with_dietary_tag(mut self, tag: impl Into<String>) -> Self {
        self.dietary_tags.push(tag.into());
        self
    }

    /// Add a health tag
    #[must_use]
    pub fn with_health_tag(mut self, tag: impl Into<String>) -> Self {
        self.health_tags.push(tag.into());
        self
    }

    /// Whether any of the recipe's cuisines equals `cuisine` exactly
    #[must_use]
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }
}
