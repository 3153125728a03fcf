// ABOUTME: Key-value persistence abstraction for bookmarks and ratings
// ABOUTME: Pluggable backends (in-memory, one JSON file per key) behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// File-backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

use recipe_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String key-value store holding JSON documents
///
/// # Examples
///
/// ```rust,no_run
/// use recipe_discovery::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), recipe_discovery::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set("recipe-bookmarks", r#"["1","4"]"#).await?;
/// assert_eq!(store.get("recipe-bookmarks").await?.as_deref(), Some(r#"["1","4"]"#));
/// store.remove("recipe-bookmarks").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Read and deserialize the JSON document under `key`
///
/// # Errors
///
/// Returns a storage error from the backend, or a serialization error if the payload is not valid `T`
pub async fn read_json<S, T>(store: &S, key: &str) -> AppResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns a serialization or storage error
pub async fn write_json<S, T>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
