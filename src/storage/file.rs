// ABOUTME: File-backed key-value store writing one JSON file per key
// ABOUTME: Writes go through a temporary file and rename so readers never see partial data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use recipe_core::errors::{AppError, AppResult};
use tokio::fs;
use tracing::debug;

use super::KeyValueStore;

/// Store rooted at a directory, holding `<key>.json` files
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for keys that are empty or would escape the root directory
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::invalid_input(format!("invalid storage key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("cannot read {}: {e}", path.display()))
                .with_source(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;
        debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_cannot_escape_root() {
        let store = FileStore::new("/tmp/recipes");
        assert!(store.path_for("recipe-bookmarks").is_ok());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("../etc/passwd").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for(".hidden").is_err());
    }

    #[test]
    fn test_path_uses_json_extension() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("recipe-ratings").unwrap(),
            PathBuf::from("/data/recipe-ratings.json")
        );
    }
}
