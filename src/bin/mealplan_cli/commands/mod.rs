// ABOUTME: Command modules for mealplan-cli
// ABOUTME: Planning and shopping list subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod list;
pub mod plan;

use std::sync::Arc;

use mealplan::config::AppConfig;
use mealplan::errors::AppResult;
use mealplan::services::ShoppingListService;
use mealplan::store::JsonFileStore;

/// Shopping list service backed by the configured data directory
pub async fn open_shopping_list(config: &AppConfig) -> AppResult<ShoppingListService> {
    let store = JsonFileStore::new(config.data_dir.clone());
    ShoppingListService::load(Arc::new(store)).await
}
