// ABOUTME: In-memory key-value store backed by a shared hash map
// ABOUTME: Used by tests and by the CLI when no data directory should be touched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use mealplan_core::errors::AppResult;
use tokio::sync::RwLock;

use super::KeyValueStore;

/// In-memory store
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether no key is held
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        self.store.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.store.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_replaces_whole_value() {
        let store = InMemoryStore::new();
        store.set("list", "[1]".to_owned()).await.unwrap();
        store.set("list", "[2]".to_owned()).await.unwrap();

        assert_eq!(store.get("list").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.len().await, 1);

        store.remove("list").await.unwrap();
        store.remove("list").await.unwrap();
        assert!(store.is_empty().await);
    }
}
