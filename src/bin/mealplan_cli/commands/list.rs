// ABOUTME: Shopping list commands for mealplan-cli
// ABOUTME: Handles show, toggle, remove, clear-checked and clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan::config::AppConfig;
use mealplan::errors::{AppError, AppResult};
use tracing::info;
use uuid::Uuid;

use crate::commands::open_shopping_list;
use crate::helpers::display::display_shopping_list;

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| AppError::invalid_input(format!("Invalid item id '{raw}'")).with_source(e))
}

/// Print the shopping list
pub async fn show(config: &AppConfig, json: bool) -> AppResult<()> {
    let list = open_shopping_list(config).await?.snapshot().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        display_shopping_list(&list);
    }
    Ok(())
}

/// Tick or untick one item
pub async fn toggle(config: &AppConfig, id: &str) -> AppResult<()> {
    let id = parse_id(id)?;
    let checked = open_shopping_list(config).await?.toggle(id).await?;
    println!("{id} is now {}", if checked { "checked" } else { "unchecked" });
    Ok(())
}

/// Delete one item
pub async fn remove(config: &AppConfig, id: &str) -> AppResult<()> {
    let removed = open_shopping_list(config)
        .await?
        .remove(parse_id(id)?)
        .await?;
    println!("Removed {}", removed.name);
    Ok(())
}

/// Delete every ticked item
pub async fn clear_checked(config: &AppConfig) -> AppResult<()> {
    let removed = open_shopping_list(config).await?.clear_checked().await?;
    info!(removed, "checked items cleared");
    println!("Removed {removed} checked item(s)");
    Ok(())
}

/// Delete every item
pub async fn clear(config: &AppConfig) -> AppResult<()> {
    open_shopping_list(config).await?.clear().await?;
    println!("Shopping list cleared");
    Ok(())
}
