// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Browse command: questionnaire selection, search, filters, and deck swipes
// ABOUTME: Right swipes are persisted as bookmarks before the deck is printed

use recipe_discovery::bookmarks::BookmarkRepository;
use recipe_discovery::discovery::DiscoverySession;
use recipe_discovery::errors::AppResult;
use recipe_discovery::models::{ActiveFilters, Difficulty, Preferences};
use tracing::info;

use super::Context;
use crate::helpers::display;
use crate::BrowseArgs;

fn preferences(args: &BrowseArgs) -> Preferences {
    Preferences {
        cuisines: args.cuisines.clone(),
        difficulty: args.difficulty,
        meal_type: args.meal_type,
        meal_prep_duration: args.meal_prep_days,
        dietary_restrictions: args.diets.clone(),
    }
}

/// Blank means no difficulty filter, as with the cuisine filter
fn difficulty_filter(raw: Option<&str>) -> AppResult<Option<Difficulty>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}

/// Build the deck, apply any swipes, and print what is visible
pub async fn run(ctx: &Context, args: BrowseArgs) -> AppResult<()> {
    let mut session = DiscoverySession::new(ctx.catalog.recipes(), &preferences(&args));
    session.set_search_query(args.search.clone());
    session.set_filters(ActiveFilters {
        difficulty: difficulty_filter(args.filter_difficulty.as_deref())?,
        cuisine: args.filter_cuisine.clone(),
        max_cook_time: args.max_cook_time,
    });

    let mut outcomes = Vec::with_capacity(args.swipes.len());
    if !args.swipes.is_empty() {
        let repo = BookmarkRepository::new(ctx.store.clone());
        let mut bookmarks = repo.load().await?;
        for direction in &args.swipes {
            outcomes.push(session.swipe(*direction, &mut bookmarks));
        }
        repo.save(&bookmarks).await?;
        info!(
            swipes = outcomes.len(),
            bookmarked = outcomes.iter().filter(|o| o.bookmarked).count(),
            "deck swiped"
        );
    }

    display::deck(&session, &outcomes, ctx.json);
    Ok(())
}
