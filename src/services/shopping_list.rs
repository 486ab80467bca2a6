// ABOUTME: Shopping list service owning the persisted list behind a single-writer lock
// ABOUTME: Applies merges and user edits, then writes the whole collection back to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use mealplan_core::constants::SHOPPING_LIST_KEY;
use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::{MealPlan, ShoppingListEntry, ShoppingListItem};
use mealplan_engine::{MergeSummary, ShoppingList};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::store::KeyValueStore;

/// Shopping list service
///
/// Every mutation runs inside one lock: the list is cloned, changed, written
/// to the store, and only then swapped in. A failed write leaves both the
/// stored and the in-memory list as they were.
pub struct ShoppingListService {
    list: Mutex<ShoppingList>,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ShoppingListService {
    /// Load the list stored under the default key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds undecodable data
    pub async fn load(store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        Self::load_from(store, SHOPPING_LIST_KEY).await
    }

    /// Load the list stored under `key`
    ///
    /// Stored rows sharing an identity are folded together on load.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds undecodable data
    pub async fn load_from(store: Arc<dyn KeyValueStore>, key: &str) -> AppResult<Self> {
        let list = match store.get(key).await? {
            Some(raw) => {
                let items: Vec<ShoppingListItem> = serde_json::from_str(&raw)?;
                ShoppingList::from_items(items)
            }
            None => ShoppingList::new(),
        };
        debug!(key, items = list.len(), "shopping list loaded");

        Ok(Self {
            list: Mutex::new(list),
            store,
            key: key.to_owned(),
        })
    }

    /// Copy of the current list
    pub async fn snapshot(&self) -> ShoppingList {
        self.list.lock().await.clone()
    }

    /// Add every scaled ingredient of a plan, crediting the plan's recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted
    pub async fn add_plan(&self, plan: &MealPlan) -> AppResult<MergeSummary> {
        let entries: Vec<ShoppingListEntry> = plan
            .ingredients
            .iter()
            .map(|ingredient| ShoppingListEntry::from_scaled(ingredient, &plan.recipe))
            .collect();
        let summary = self.add_items(entries).await?;
        info!(
            recipe_id = plan.recipe.id,
            inserted = summary.inserted,
            accumulated = summary.accumulated,
            "plan added to shopping list"
        );
        Ok(summary)
    }

    /// Merge entries in order
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted
    pub async fn add_items(&self, entries: Vec<ShoppingListEntry>) -> AppResult<MergeSummary> {
        self.mutate(|list| Ok(list.merge_many(entries))).await
    }

    /// Flip the checked flag of one row, returning the new state
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or an error if the
    /// updated list cannot be persisted
    pub async fn toggle(&self, id: Uuid) -> AppResult<bool> {
        self.mutate(|list| {
            list.toggle_checked(id)
                .ok_or_else(|| AppError::not_found(format!("Shopping list item {id}")))
        })
        .await
    }

    /// Delete one row permanently
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or an error if the
    /// updated list cannot be persisted
    pub async fn remove(&self, id: Uuid) -> AppResult<ShoppingListItem> {
        self.mutate(|list| {
            list.remove(id)
                .ok_or_else(|| AppError::not_found(format!("Shopping list item {id}")))
        })
        .await
    }

    /// Delete every checked row, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted
    pub async fn clear_checked(&self) -> AppResult<usize> {
        self.mutate(|list| Ok(list.clear_checked())).await
    }

    /// Delete every row
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn clear(&self) -> AppResult<()> {
        let mut guard = self.list.lock().await;
        self.store.remove(&self.key).await?;
        guard.clear();
        info!(key = %self.key, "shopping list cleared");
        Ok(())
    }

    async fn mutate<R, F>(&self, change: F) -> AppResult<R>
    where
        F: FnOnce(&mut ShoppingList) -> AppResult<R> + Send,
        R: Send,
    {
        let mut guard = self.list.lock().await;
        let mut next = guard.clone();
        let result = change(&mut next)?;

        let serialized = serde_json::to_string(&next)?;
        self.store.set(&self.key, serialized).await?;
        debug!(key = %self.key, items = next.len(), "shopping list persisted");

        *guard = next;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use mealplan_core::errors::ErrorCode;

    #[tokio::test]
    async fn test_unknown_id_leaves_store_untouched() {
        let store = InMemoryStore::new();
        let service = ShoppingListService::load(Arc::new(store.clone()))
            .await
            .unwrap();

        let err = service.toggle(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert!(store.is_empty().await);
    }
}
