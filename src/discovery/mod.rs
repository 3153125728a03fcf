// ABOUTME: Card-deck discovery session over the preference-selected recipes
// ABOUTME: Holds search text, active filters, and the cursor; swipes bookmark and advance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Discovery session
//!
//! A session is built once from the catalog and the questionnaire answers.
//! After that only the search text and the active filters change; every change
//! re-derives the visible deck from the selected recipes and puts the cursor
//! back on the first card.

/// Swipe gesture classification
pub mod swipe;

pub use swipe::SwipeDirection;

use recipe_core::models::{ActiveFilters, Difficulty, Preferences, Recipe};
use recipe_intelligence::recipes::{all_cuisines, apply_active_filters, select_by_preferences};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bookmarks::BookmarkSet;

/// Result of one swipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeOutcome {
    /// Recipe under the cursor when the swipe happened
    pub recipe_id: Option<String>,
    /// Whether the swipe added a bookmark
    pub bookmarked: bool,
    /// Whether the cursor moved to the next card
    pub advanced: bool,
}

impl SwipeOutcome {
    const fn nothing() -> Self {
        Self {
            recipe_id: None,
            bookmarked: false,
            advanced: false,
        }
    }
}

/// View state of the discovery deck
#[derive(Debug, Clone)]
pub struct DiscoverySession {
    selected: Vec<Recipe>,
    search_query: String,
    filters: ActiveFilters,
    visible: Vec<Recipe>,
    cursor: usize,
}

impl DiscoverySession {
    /// Select recipes by `preferences` and show them unfiltered
    #[must_use]
    pub fn new(catalog: &[Recipe], preferences: &Preferences) -> Self {
        let selected = select_by_preferences(catalog, preferences);
        let filters = ActiveFilters::default();
        let visible = apply_active_filters(&selected, "", &filters);
        Self {
            selected,
            search_query: String::new(),
            filters,
            visible,
            cursor: 0,
        }
    }

    fn refilter(&mut self) {
        self.visible = apply_active_filters(&self.selected, &self.search_query, &self.filters);
        self.cursor = 0;
        debug!(
            visible = self.visible.len(),
            selected = self.selected.len(),
            "deck refiltered"
        );
    }

    /// Replace the search text
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refilter();
    }

    /// Restrict to one difficulty, or `None` for any
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.filters.difficulty = difficulty;
        self.refilter();
    }

    /// Restrict to one cuisine, or `None` for any
    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.filters.cuisine = cuisine;
        self.refilter();
    }

    /// Set the inclusive cook-time ceiling in minutes
    pub fn set_max_cook_time(&mut self, minutes: u32) {
        self.filters.max_cook_time = minutes;
        self.refilter();
    }

    /// Replace all active filters at once
    pub fn set_filters(&mut self, filters: ActiveFilters) {
        self.filters = filters;
        self.refilter();
    }

    /// Reset search text and filters to their defaults
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.filters = ActiveFilters::default();
        self.refilter();
    }

    /// Current search text
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current active filters
    #[must_use]
    pub const fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Recipe under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&Recipe> {
        self.visible.get(self.cursor)
    }

    /// One-based position and deck size, `None` for an empty deck
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.visible.is_empty()).then(|| (self.cursor + 1, self.visible.len()))
    }

    /// Visible recipes in order
    #[must_use]
    pub fn visible(&self) -> &[Recipe] {
        &self.visible
    }

    /// Recipes chosen by the questionnaire, before search and filters
    #[must_use]
    pub fn selected(&self) -> &[Recipe] {
        &self.selected
    }

    /// Cuisine filter choices: distinct cuisines of the selected recipes
    #[must_use]
    pub fn available_cuisines(&self) -> Vec<String> {
        all_cuisines(&self.selected)
    }

    /// Handle a swipe on the current card
    ///
    /// A right swipe bookmarks the current recipe. Either direction then moves
    /// to the next card, except on the last card where the cursor stays.
    pub fn swipe(&mut self, direction: SwipeDirection, bookmarks: &mut BookmarkSet) -> SwipeOutcome {
        let Some(recipe) = self.visible.get(self.cursor) else {
            return SwipeOutcome::nothing();
        };
        let recipe_id = recipe.id.clone();

        let bookmarked = direction == SwipeDirection::Right && bookmarks.insert(recipe_id.clone());
        let advanced = self.cursor + 1 < self.visible.len();
        if advanced {
            self.cursor += 1;
        }
        debug!(%direction, recipe_id = %recipe_id, bookmarked, advanced, "swipe");

        SwipeOutcome {
            recipe_id: Some(recipe_id),
            bookmarked,
            advanced,
        }
    }
}
