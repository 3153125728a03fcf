// ABOUTME: Append-only log of user ratings persisted under the recipe-ratings key
// ABOUTME: Records validated rating events and answers per-recipe queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::storage_keys;
use recipe_core::errors::{AppResult, ErrorCode};
use recipe_core::models::UserRating;
use tracing::{info, warn};

use crate::storage::{read_json, write_json, KeyValueStore};

/// Rating log backed by a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct RatingRepository<S> {
    store: S,
}

impl<S: KeyValueStore> RatingRepository<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Every recorded rating, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself cannot be read
    pub async fn all(&self) -> AppResult<Vec<UserRating>> {
        match read_json::<_, Vec<UserRating>>(&self.store, storage_keys::RATINGS).await {
            Ok(ratings) => Ok(ratings.unwrap_or_default()),
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(error = %e, key = storage_keys::RATINGS, "discarding unreadable rating log");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Append a rating to the log
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty recipe id or a rating outside 1-5,
    /// otherwise a storage or serialization error
    pub async fn record(&self, rating: UserRating) -> AppResult<()> {
        let rating = UserRating::at(rating.recipe_id, rating.rating, rating.cooked, rating.timestamp)?;
        let mut log = self.all().await?;
        info!(
            recipe_id = %rating.recipe_id,
            rating = rating.rating,
            cooked = rating.cooked,
            "rating recorded"
        );
        log.push(rating);
        write_json(&self.store, storage_keys::RATINGS, &log).await
    }

    /// Ratings given to one recipe, oldest first
    ///
    /// # Errors
    ///
    /// See [`RatingRepository::all`]
    pub async fn for_recipe(&self, recipe_id: &str) -> AppResult<Vec<UserRating>> {
        let mut ratings = self.all().await?;
        ratings.retain(|r| r.recipe_id == recipe_id);
        Ok(ratings)
    }

    /// Mean rating of one recipe, `None` when it was never rated
    ///
    /// # Errors
    ///
    /// See [`RatingRepository::all`]
    pub async fn average_for(&self, recipe_id: &str) -> AppResult<Option<f64>> {
        let ratings = self.for_recipe(recipe_id).await?;
        Ok(average(&ratings))
    }
}

fn average(ratings: &[UserRating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
    let count = u32::try_from(ratings.len()).ok()?;
    Some(f64::from(total) / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), None);
        let ratings = vec![
            UserRating::new("1", 4, true).unwrap(),
            UserRating::new("1", 5, false).unwrap(),
        ];
        assert_eq!(average(&ratings), Some(4.5));
    }
}
