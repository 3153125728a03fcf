// ABOUTME: User rating events recorded after cooking a recipe
// ABOUTME: Validates the 1-5 rating range and stores timestamps as epoch milliseconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ratings::{MAX_USER_RATING, MIN_USER_RATING};
use crate::errors::{AppError, AppResult};

/// One rating event in the append-only rating log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    /// Rated recipe
    pub recipe_id: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Whether the user actually cooked the recipe
    pub cooked: bool,
    /// When the rating was given
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl UserRating {
    /// Create a rating stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe id is empty or the rating is outside 1-5
    pub fn new(recipe_id: impl Into<String>, rating: u8, cooked: bool) -> AppResult<Self> {
        Self::at(recipe_id, rating, cooked, Utc::now())
    }

    /// Create a rating with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe id is empty or the rating is outside 1-5
    pub fn at(
        recipe_id: impl Into<String>,
        rating: u8,
        cooked: bool,
        timestamp: DateTime<Utc>,
    ) -> AppResult<Self> {
        let recipe_id = recipe_id.into();
        if recipe_id.trim().is_empty() {
            return Err(AppError::invalid_input("rating requires a recipe id"));
        }
        if !(MIN_USER_RATING..=MAX_USER_RATING).contains(&rating) {
            return Err(AppError::value_out_of_range(format!(
                "rating must be between {MIN_USER_RATING} and {MAX_USER_RATING}, got {rating}"
            ))
            .with_resource_id(recipe_id));
        }
        Ok(Self {
            recipe_id,
            rating,
            cooked,
            timestamp,
        })
    }
}
