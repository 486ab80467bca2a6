// ABOUTME: Application-wide constants for storage keys and engine defaults
// ABOUTME: Shared by the engine, provider, and service crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Namespace key under which the shopping list collection is persisted
pub const SHOPPING_LIST_KEY: &str = "mealplan/shopping-list";

/// Servings used when a caller does not pick a target
pub const DEFAULT_TARGET_SERVINGS: u32 = 2;

/// Service name reported in structured logs
pub const SERVICE_NAME: &str = "mealplan";

/// Separator used when joining provider codes into a single query value
pub const QUERY_LIST_SEPARATOR: &str = ",";
