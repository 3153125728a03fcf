// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Bookmark commands: add, remove, toggle, and list bookmarked recipes
// ABOUTME: Ids are checked against the catalog before anything is persisted

use recipe_discovery::bookmarks::{bookmarked_recipes, BookmarkRepository};
use recipe_discovery::errors::AppResult;
use recipe_discovery::storage::FileStore;

use super::Context;
use crate::helpers::display;

fn repository(ctx: &Context) -> BookmarkRepository<FileStore> {
    BookmarkRepository::new(ctx.store.clone())
}

/// Bookmark a recipe
pub async fn add(ctx: &Context, recipe_id: &str) -> AppResult<()> {
    ctx.catalog.require(recipe_id)?;
    let added = repository(ctx).add(recipe_id).await?;
    display::bookmark_change(recipe_id, true, added, ctx.json);
    Ok(())
}

/// Remove a bookmark
pub async fn remove(ctx: &Context, recipe_id: &str) -> AppResult<()> {
    let removed = repository(ctx).remove(recipe_id).await?;
    display::bookmark_change(recipe_id, false, removed, ctx.json);
    Ok(())
}

/// Flip a bookmark
pub async fn toggle(ctx: &Context, recipe_id: &str) -> AppResult<()> {
    ctx.catalog.require(recipe_id)?;
    let bookmarked = repository(ctx).toggle(recipe_id).await?;
    display::bookmark_change(recipe_id, bookmarked, true, ctx.json);
    Ok(())
}

/// List bookmarked recipes in catalog order
pub async fn list(ctx: &Context) -> AppResult<()> {
    let bookmarks = repository(ctx).load().await?;
    let recipes = bookmarked_recipes(ctx.catalog.recipes(), &bookmarks);
    display::recipe_list(&recipes, ctx.json);
    Ok(())
}
