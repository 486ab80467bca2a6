// ABOUTME: Key-value persistence abstraction with whole-value get and set semantics
// ABOUTME: Pluggable backends (in-memory, JSON files on disk) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file store, one file per key
pub mod file;
/// In-memory store
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use mealplan_core::errors::AppResult;

/// Persistence store for serialized collections
///
/// Values are opaque JSON documents replaced as a whole on every `set`;
/// callers own (de)serialization.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
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
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete the value stored under `key`; missing keys are not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}
