// ABOUTME: Recipe filter engine deriving the visible recipe sequence
// ABOUTME: Preference selection, search, difficulty, cuisine, and cook-time predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{ActiveFilters, Preferences, Recipe};
use tracing::debug;

/// Whether `recipe` satisfies every questionnaire preference
///
/// Empty lists and unset fields match everything. Cuisine and dietary lists
/// match on any overlap, compared case-sensitively.
#[must_use]
pub fn matches_preferences(recipe: &Recipe, preferences: &Preferences) -> bool {
    let cuisine_ok = preferences.cuisines.is_empty()
        || recipe
            .cuisines
            .iter()
            .any(|c| preferences.cuisines.contains(c));
    let difficulty_ok = preferences
        .difficulty
        .is_none_or(|d| d == recipe.difficulty);
    let meal_ok = preferences
        .meal_type
        .is_none_or(|m| recipe.meal_type == Some(m));
    let prep_ok = preferences
        .meal_prep_duration
        .is_none_or(|days| recipe.meal_prep_duration == Some(days));
    let diet_ok = preferences.dietary_restrictions.is_empty()
        || recipe
            .dietary_tags
            .iter()
            .any(|tag| preferences.dietary_restrictions.contains(tag));

    cuisine_ok && difficulty_ok && meal_ok && prep_ok && diet_ok
}

/// Select the catalog recipes matching `preferences`, in catalog order
#[must_use]
pub fn select_by_preferences(catalog: &[Recipe], preferences: &Preferences) -> Vec<Recipe> {
    let selected: Vec<Recipe> = catalog
        .iter()
        .filter(|recipe| matches_preferences(recipe, preferences))
        .cloned()
        .collect();
    debug!(
        catalog = catalog.len(),
        selected = selected.len(),
        "selected recipes by preferences"
    );
    selected
}

/// Case-insensitive substring match of `query` against title or source
///
/// A blank query matches everything. The query is not trimmed before
/// matching, only for the blank check.
#[must_use]
pub fn matches_search(recipe: &Recipe, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle) || recipe.source.to_lowercase().contains(&needle)
}

/// Whether `recipe` passes the search text and every active filter
///
/// `max_cook_time` is always compared literally, including the "any" value 999.
#[must_use]
pub fn matches_active_filters(recipe: &Recipe, search_query: &str, filters: &ActiveFilters) -> bool {
    matches_search(recipe, search_query)
        && filters.difficulty.is_none_or(|d| d == recipe.difficulty)
        && filters
            .cuisine_constraint()
            .is_none_or(|cuisine| recipe.has_cuisine(cuisine))
        && recipe.cook_time <= filters.max_cook_time
}

/// Narrow `recipes` by search text and active filters, preserving order
///
/// Callers that show one recipe at a time must reset their cursor to the first
/// element whenever this is re-run.
#[must_use]
pub fn apply_active_filters(
    recipes: &[Recipe],
    search_query: &str,
    filters: &ActiveFilters,
) -> Vec<Recipe> {
    let visible: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| matches_active_filters(recipe, search_query, filters))
        .cloned()
        .collect();
    debug!(
        input = recipes.len(),
        visible = visible.len(),
        query = search_query,
        "applied active filters"
    );
    visible
}

/// Distinct cuisines across `recipes`, in first-seen order
#[must_use]
pub fn all_cuisines(recipes: &[Recipe]) -> Vec<String> {
    let mut cuisines: Vec<String> = Vec::new();
    for cuisine in recipes.iter().flat_map(|r| r.cuisines.iter()) {
        if !cuisines.contains(cuisine) {
            cuisines.push(cuisine.clone());
        }
    }
    cuisines
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::{Difficulty, MealType};

    fn pasta() -> Recipe {
        Recipe::new("1", "Italian Pasta Bake", Difficulty::Medium, 45, 4)
            .with_source("Nonna's Table")
            .with_cuisine("Italian")
            .with_meal_type(MealType::Dinner)
            .with_dietary_tag("Vegetarian")
    }

    #[test]
    fn test_unset_preferences_are_wildcards() {
        assert!(matches_preferences(&pasta(), &Preferences::any()));
    }

    #[test]
    fn test_meal_type_preference_requires_recipe_meal_type() {
        let mut recipe = pasta();
        recipe.meal_type = None;
        let prefs = Preferences::any().with_meal_type(MealType::Dinner);
        assert!(!matches_preferences(&recipe, &prefs));
    }

    #[test]
    fn test_search_is_not_trimmed() {
        assert!(matches_search(&pasta(), "  "));
        assert!(matches_search(&pasta(), "pasta"));
        assert!(!matches_search(&pasta(), " pasta  bake"));
    }

    #[test]
    fn test_empty_cuisine_filter_is_wildcard() {
        let filters = ActiveFilters::default().with_cuisine("");
        assert!(matches_active_filters(&pasta(), "", &filters));
    }

    #[test]
    fn test_all_cuisines_first_seen_order() {
        let recipes = vec![
            pasta().with_cuisine("Mediterranean"),
            Recipe::new("2", "Pad Thai", Difficulty::Easy, 20, 2)
                .with_cuisine("Thai")
                .with_cuisine("Italian"),
        ];
        assert_eq!(
            all_cuisines(&recipes),
            vec!["Italian", "Mediterranean", "Thai"]
        );
    }
}
