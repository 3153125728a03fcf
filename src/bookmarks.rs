// ABOUTME: Bookmarked recipe ids and their persistence
// ABOUTME: Insertion-ordered id set stored as a JSON list under the recipe-bookmarks key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bookmarks
//!
//! A bookmark is just a recipe id. The set keeps the order in which ids were
//! first added; the bookmarks page itself lists recipes in catalog order.

use recipe_core::constants::storage_keys;
use recipe_core::errors::{AppResult, ErrorCode};
use recipe_core::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{read_json, write_json, KeyValueStore};

/// Insertion-ordered set of recipe ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    /// Empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is bookmarked
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Add `id`; returns `false` if it was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of `id`; returns the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }

    /// Number of bookmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is bookmarked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drop repeated ids from a deserialized list, keeping first occurrences
    fn dedup(self) -> Self {
        self.ids.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Bookmarked recipes in catalog order
#[must_use]
pub fn bookmarked_recipes<'a>(catalog: &'a [Recipe], bookmarks: &BookmarkSet) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| bookmarks.contains(&recipe.id))
        .collect()
}

/// Loads and saves the bookmark set through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct BookmarkRepository<S> {
    store: S,
}

impl<S: KeyValueStore> BookmarkRepository<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Current bookmarks
    ///
    /// A missing key is an empty set. A payload that is not a JSON list of
    /// strings is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself cannot be read
    pub async fn load(&self) -> AppResult<BookmarkSet> {
        match read_json::<_, BookmarkSet>(&self.store, storage_keys::BOOKMARKS).await {
            Ok(Some(set)) => Ok(set.dedup()),
            Ok(None) => Ok(BookmarkSet::new()),
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(error = %e, key = storage_keys::BOOKMARKS, "discarding unreadable bookmarks");
                Ok(BookmarkSet::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Persist `bookmarks`, replacing what was stored
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    pub async fn save(&self, bookmarks: &BookmarkSet) -> AppResult<()> {
        write_json(&self.store, storage_keys::BOOKMARKS, bookmarks).await?;
        debug!(count = bookmarks.len(), "bookmarks saved");
        Ok(())
    }

    /// Flip one bookmark and persist; returns the new membership
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    pub async fn toggle(&self, id: &str) -> AppResult<bool> {
        let mut bookmarks = self.load().await?;
        let bookmarked = bookmarks.toggle(id);
        self.save(&bookmarks).await?;
        Ok(bookmarked)
    }

    /// Bookmark `id` and persist; returns `false` if it was already bookmarked
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    pub async fn add(&self, id: &str) -> AppResult<bool> {
        let mut bookmarks = self.load().await?;
        let added = bookmarks.insert(id);
        if added {
            self.save(&bookmarks).await?;
        }
        Ok(added)
    }

    /// Remove a bookmark and persist; returns whether it was present
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error
    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        let mut bookmarks = self.load().await?;
        let removed = bookmarks.remove(id);
        if removed {
            self.save(&bookmarks).await?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::Difficulty;

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = BookmarkSet::new();
        assert!(set.toggle("1"));
        assert!(set.contains("1"));
        assert!(!set.toggle("1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut set: BookmarkSet = ["3", "1"].into_iter().collect();
        assert!(!set.insert("3"));
        assert!(set.insert("2"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set: BookmarkSet = ["4", "1"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["4","1"]"#);
    }

    #[test]
    fn test_bookmarked_recipes_follow_catalog_order() {
        let catalog = vec![
            Recipe::new("a", "A", Difficulty::Easy, 10, 1).with_cuisine("X"),
            Recipe::new("b", "B", Difficulty::Easy, 10, 1).with_cuisine("X"),
            Recipe::new("c", "C", Difficulty::Easy, 10, 1).with_cuisine("X"),
        ];
        let set: BookmarkSet = ["c", "a", "missing"].into_iter().collect();
        let ids: Vec<&str> = bookmarked_recipes(&catalog, &set)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
