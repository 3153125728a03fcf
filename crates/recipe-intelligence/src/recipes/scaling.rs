// ABOUTME: Ingredient quantity scaling for a number of people and meal-prep days
// ABOUTME: Multiplies numeric amounts and renders them as kitchen fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{Ingredient, Quantity, Recipe, ScaledIngredient};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::fraction::render_fraction;

/// How many people a recipe is cooked for, and for how many days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingPlan {
    /// People eating
    pub people: u32,
    /// Days the meal prep should last
    pub days: u32,
}

impl ServingPlan {
    /// Create a serving plan
    #[must_use]
    pub const fn new(people: u32, days: u32) -> Self {
        Self { people, days }
    }

    /// Multiplier for a recipe written for `original_servings`
    #[must_use]
    pub fn factor_for(&self, original_servings: u32) -> f64 {
        scale_factor(original_servings, self.people, self.days)
    }

    /// Scale a recipe's own ingredient list to this plan
    #[must_use]
    pub fn apply(&self, recipe: &Recipe) -> Vec<ScaledIngredient> {
        scale(&recipe.ingredients, recipe.servings, self.people, self.days)
    }
}

impl Default for ServingPlan {
    fn default() -> Self {
        Self { people: 1, days: 1 }
    }
}

/// `(people * days) / original_servings`
///
/// Zero servings yields an infinite factor rather than a panic; the catalog
/// guarantees positive servings.
#[must_use]
pub fn scale_factor(original_servings: u32, people: u32, days: u32) -> f64 {
    f64::from(people) * f64::from(days) / f64::from(original_servings)
}

/// Scale one quantity by `factor`
///
/// Only non-zero numeric amounts are scaled; they come back as rendered
/// fraction text. Everything else is returned unchanged.
#[must_use]
pub fn scale_quantity(quantity: &Quantity, factor: f64) -> Quantity {
    if quantity.is_to_taste() {
        return quantity.clone();
    }
    match quantity {
        Quantity::Numeric(amount) => Quantity::PreRendered(render_fraction(amount * factor)),
        Quantity::Unspecified | Quantity::PreRendered(_) => quantity.clone(),
    }
}

/// Rescale an ingredient list written for `original_servings`
///
/// Order, units, and item names are kept verbatim; only quantities change.
#[must_use]
pub fn scale(
    ingredients: &[Ingredient],
    original_servings: u32,
    target_people: u32,
    target_days: u32,
) -> Vec<ScaledIngredient> {
    let factor = scale_factor(original_servings, target_people, target_days);
    ingredients
        .iter()
        .map(|ingredient| {
            let quantity = scale_quantity(&ingredient.quantity, factor);
            trace!(
                item = %ingredient.item,
                from = %ingredient.quantity,
                to = %quantity,
                factor,
                "scaled ingredient"
            );
            ScaledIngredient {
                quantity,
                unit: ingredient.unit.clone(),
                item: ingredient.item.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::Difficulty;

    #[test]
    fn test_scale_factor() {
        assert!((scale_factor(4, 8, 1) - 2.0).abs() < f64::EPSILON);
        assert!((scale_factor(4, 2, 3) - 1.5).abs() < f64::EPSILON);
        assert!(scale_factor(0, 2, 3).is_infinite());
    }

    #[test]
    fn test_pre_rendered_text_is_not_rescaled() {
        let text = Quantity::PreRendered("1 1/2".to_owned());
        assert_eq!(scale_quantity(&text, 3.0), text);
    }

    #[test]
    fn test_serving_plan_applies_recipe_servings() {
        let recipe = Recipe::new("r", "Chili", Difficulty::Easy, 60, 4)
            .with_ingredient(Ingredient::new(2.0, "cup", "beans"));
        let scaled = ServingPlan::new(2, 1).apply(&recipe);
        assert_eq!(scaled[0].quantity, Quantity::PreRendered("1".to_owned()));
    }

    #[test]
    fn test_zero_servings_does_not_panic() {
        let scaled = scale(&[Ingredient::new(1.0, "cup", "rice")], 0, 2, 2);
        assert_eq!(scaled[0].quantity, Quantity::PreRendered("inf".to_owned()));
    }
}
