// ABOUTME: Read-only recipe catalog loaded from JSON or the bundled dataset
// ABOUTME: Validates ids, cuisines, cook times, servings, and ratings on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe catalog
//!
//! The catalog is the ordered list every other component reads from. It is
//! never mutated after loading; order is the display order of the deck.

use std::collections::HashSet;
use std::path::Path;

use recipe_core::constants::ratings::MAX_CATALOG_RATING;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::Recipe;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../../data/mock_recipes.json");

/// Ordered, validated collection of recipes
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from already-parsed recipes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first recipe that breaks a catalog invariant
    pub fn new(recipes: Vec<Recipe>) -> AppResult<Self> {
        validate(&recipes)?;
        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipe records
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON, or `InvalidInput` for invalid records
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or any error of [`Catalog::from_json_str`]
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("cannot read catalog {}: {e}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), recipes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The bundled sample catalog
    ///
    /// # Errors
    ///
    /// Only fails if the embedded dataset is itself invalid
    pub fn builtin() -> AppResult<Self> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        debug!(recipes = catalog.len(), "built-in catalog parsed");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in catalog
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`] and [`Catalog::builtin`]
    pub async fn load_or_builtin(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::builtin(),
        }
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Look up a recipe by id, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` carrying the id
    pub fn require(&self, id: &str) -> AppResult<&Recipe> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{id}'")).with_resource_id(id))
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate(recipes: &[Recipe]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        let id = recipe.id.as_str();
        let invalid = |reason: &str| {
            Err(AppError::invalid_input(format!("recipe '{id}' {reason}")).with_resource_id(id))
        };

        if id.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "recipe '{}' has an empty id",
                recipe.title
            )));
        }
        if !seen.insert(id) {
            return invalid("appears more than once");
        }
        if recipe.cuisines.is_empty() {
            return invalid("has no cuisines");
        }
        if recipe.cook_time == 0 {
            return invalid("has a zero cook time");
        }
        if recipe.servings == 0 {
            return invalid("has zero servings");
        }
        if !(0.0..=MAX_CATALOG_RATING).contains(&recipe.rating) {
            return invalid("has a rating outside 0-5");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::errors::ErrorCode;
    use recipe_core::models::Difficulty;

    fn recipe(id: &str) -> Recipe {
        Recipe::new(id, "Soup", Difficulty::Easy, 30, 2).with_cuisine("French")
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 8);
        assert_eq!(catalog.recipes()[0].id, "1");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![recipe("a"), recipe("a")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.resource_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_invariant_violations_name_the_recipe() {
        let mut no_cuisine = recipe("b");
        no_cuisine.cuisines.clear();
        let zero_servings = Recipe::new("c", "Stew", Difficulty::Easy, 30, 0).with_cuisine("Irish");
        let zero_time = Recipe::new("d", "Salad", Difficulty::Easy, 0, 1).with_cuisine("Greek");
        let bad_rating = recipe("e").with_rating(5.5);

        for (bad, id) in [
            (no_cuisine, "b"),
            (zero_servings, "c"),
            (zero_time, "d"),
            (bad_rating, "e"),
        ] {
            let err = Catalog::new(vec![bad]).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert!(err.message.contains(id), "{}", err.message);
        }
    }

    #[test]
    fn test_require_reports_not_found() {
        let catalog = Catalog::new(vec![recipe("a")]).unwrap();
        assert!(catalog.require("a").is_ok());
        let err = catalog.require("zzz").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
}
