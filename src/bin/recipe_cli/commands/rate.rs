// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Rating commands: record a rating and list the rating log
// ABOUTME: Ratings for unknown recipe ids are rejected

use recipe_discovery::errors::AppResult;
use recipe_discovery::models::UserRating;
use recipe_discovery::ratings::RatingRepository;

use super::Context;
use crate::helpers::display;

/// Record a rating for a catalog recipe
pub async fn record(ctx: &Context, recipe_id: &str, rating: u8, cooked: bool) -> AppResult<()> {
    ctx.catalog.require(recipe_id)?;
    let event = UserRating::new(recipe_id, rating, cooked)?;
    RatingRepository::new(ctx.store.clone())
        .record(event.clone())
        .await?;
    display::rating_recorded(&event, ctx.json);
    Ok(())
}

/// List all ratings, or one recipe's ratings with their average
pub async fn list(ctx: &Context, recipe_id: Option<&str>) -> AppResult<()> {
    let repo = RatingRepository::new(ctx.store.clone());
    match recipe_id {
        Some(id) => {
            let ratings = repo.for_recipe(id).await?;
            let average = repo.average_for(id).await?;
            display::ratings(&ratings, average, ctx.json);
        }
        None => display::ratings(&repo.all().await?, None, ctx.json),
    }
    Ok(())
}
