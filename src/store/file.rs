// ABOUTME: Key-value store persisting each key as a JSON file under a data directory
// ABOUTME: Writes go to a temporary file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

use mealplan_core::errors::{AppError, AppResult};
use tokio::fs;
use tracing::debug;

use super::KeyValueStore;

/// Store keeping one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `root`; the directory is created on first write
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
    /// Path separators become `__`; any other character outside
    /// `[A-Za-z0-9._-]` becomes `_`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() + 5);
        for c in key.chars() {
            match c {
                '/' | '\\' => name.push_str("__"),
                c if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') => name.push(c),
                _ => name.push('_'),
            }
        }
        name.push_str(".json");
        self.root.join(name)
    }
}

fn io_error(action: &str, path: &Path, error: IoError) -> AppError {
    AppError::storage(format!("failed to {action} {}", path.display())).with_source(error)
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &path, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("create", &self.root, e))?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value.as_bytes())
            .await
            .map_err(|e| io_error("write", &staging, e))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| io_error("replace", &path, e))?;

        debug!(key, path = %path.display(), bytes = value.len(), "persisted value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", &path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_flat_file_names() {
        let store = JsonFileStore::new("/data");
        assert_eq!(
            store.path_for("mealplan/shopping-list"),
            PathBuf::from("/data/mealplan__shopping-list.json")
        );
        assert_eq!(
            store.path_for("../etc passwd"),
            PathBuf::from("/data/..__etc_passwd.json")
        );
    }
}
