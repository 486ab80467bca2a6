// ABOUTME: Service layer wiring the meal-plan engine to the recipe provider and persistence
// ABOUTME: Shared by the CLI and any future front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! The engine crate stays pure; everything with I/O, deadlines or shared
//! state lives here.

/// Meal planning: query, search, select, scale
pub mod planner;

/// Persisted shopping list with single-writer merges
pub mod shopping_list;

pub use planner::{MealPlanner, PlanCancellation, PlanRequest};
pub use shopping_list::ShoppingListService;
