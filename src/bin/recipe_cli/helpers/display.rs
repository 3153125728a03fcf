// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Every printer has a text form and a JSON form selected by --json

use recipe_discovery::discovery::{DiscoverySession, SwipeOutcome};
use recipe_discovery::errors::{AppError, ErrorResponse};
use recipe_discovery::formatters::format_minutes;
use recipe_discovery::models::{Recipe, ScaledIngredient, UserRating};
use recipe_discovery::recipes::{render_fraction, ServingPlan};
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("failed to encode output: {e}"),
    }
}

fn summary_line(recipe: &Recipe) -> String {
    format!(
        "[{}] {} ({}) - {}, {}, {} servings, {:.1}/5 - {}",
        recipe.id,
        recipe.title,
        recipe.source,
        recipe.difficulty,
        format_minutes(i64::from(recipe.cook_time)),
        recipe.servings,
        recipe.rating,
        recipe.cuisines.join(", ")
    )
}

/// Print an error; JSON mode writes the error envelope to stdout
pub fn report_error(error: AppError, json: bool) {
    if json {
        print_json(&ErrorResponse::from(error));
    } else {
        eprintln!("error: {error}");
    }
}

/// Print the visible deck and any swipe outcomes
pub fn deck(session: &DiscoverySession, outcomes: &[SwipeOutcome], json: bool) {
    if json {
        print_json(&json!({
            "position": session.position(),
            "current": session.current().map(|r| &r.id),
            "availableCuisines": session.available_cuisines(),
            "swipes": outcomes,
            "recipes": session.visible(),
        }));
        return;
    }

    for outcome in outcomes {
        if let Some(id) = &outcome.recipe_id {
            let action = if outcome.bookmarked { "bookmarked" } else { "skipped" };
            println!("swiped {id}: {action}");
        }
    }

    match session.position() {
        Some((index, total)) => println!("Showing {index} of {total} recipes"),
        None => {
            println!("No recipes match. Try adjusting the search or filters.");
            return;
        }
    }
    for recipe in session.visible() {
        let marker = if session.current().is_some_and(|c| c.id == recipe.id) {
            '>'
        } else {
            ' '
        };
        println!("{marker} {}", summary_line(recipe));
    }
    println!("Cuisines: {}", session.available_cuisines().join(", "));
}

/// Print a plain recipe list
pub fn recipe_list(recipes: &[&Recipe], json: bool) {
    if json {
        print_json(&recipes);
        return;
    }
    if recipes.is_empty() {
        println!("No bookmarked recipes yet.");
    }
    for recipe in recipes {
        println!("{}", summary_line(recipe));
    }
}

/// Print a scaled ingredient list
pub fn scaled(recipe: &Recipe, plan: ServingPlan, ingredients: &[ScaledIngredient], json: bool) {
    if json {
        print_json(&json!({
            "recipeId": recipe.id,
            "people": plan.people,
            "days": plan.days,
            "factor": plan.factor_for(recipe.servings),
            "ingredients": ingredients,
        }));
        return;
    }

    println!(
        "{} - scaled from {} servings for {} people x {} days",
        recipe.title, recipe.servings, plan.people, plan.days
    );
    for ingredient in ingredients {
        let line = if ingredient.quantity.is_to_taste() {
            format!("{} {} (to taste)", ingredient.unit, ingredient.item)
        } else {
            format!("{} {} {}", ingredient.quantity, ingredient.unit, ingredient.item)
        };
        println!("  - {}", line.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

/// Print a bookmark change
pub fn bookmark_change(recipe_id: &str, bookmarked: bool, changed: bool, json: bool) {
    if json {
        print_json(&json!({
            "recipeId": recipe_id,
            "bookmarked": bookmarked,
            "changed": changed,
        }));
        return;
    }
    let state = if bookmarked { "bookmarked" } else { "not bookmarked" };
    let note = if changed { "" } else { " (unchanged)" };
    println!("{recipe_id}: {state}{note}");
}

/// Print a freshly recorded rating
pub fn rating_recorded(rating: &UserRating, json: bool) {
    if json {
        print_json(rating);
        return;
    }
    let cooked = if rating.cooked { ", cooked" } else { "" };
    println!("Rated {} {}/5{cooked}", rating.recipe_id, rating.rating);
}

/// Print rating events, with an average when one recipe was asked for
pub fn ratings(ratings: &[UserRating], average: Option<f64>, json: bool) {
    if json {
        print_json(&json!({ "ratings": ratings, "average": average }));
        return;
    }
    if ratings.is_empty() {
        println!("No ratings recorded.");
        return;
    }
    for rating in ratings {
        println!(
            "{}  {}  {}/5{}",
            rating.timestamp.format("%Y-%m-%d %H:%M UTC"),
            rating.recipe_id,
            rating.rating,
            if rating.cooked { "  cooked" } else { "" }
        );
    }
    if let Some(average) = average {
        println!("Average: {average:.1}/5");
    }
}

/// Print a value rendered as a kitchen fraction
pub fn fraction(value: f64, json: bool) {
    let rendered = render_fraction(value);
    if json {
        print_json(&json!({ "value": value, "rendered": rendered }));
    } else {
        println!("{rendered}");
    }
}
