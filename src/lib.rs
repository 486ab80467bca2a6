// ABOUTME: Main library entry point for the meal-plan service
// ABOUTME: Wires the compilation engine to a recipe provider, persistence, logging and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealplan
//!
//! Meal-plan compilation service. A user's dietary signals are aggregated
//! into one profile, compiled into a recipe-search query, and the provider's
//! candidates are narrowed to one recipe scaled to the requested servings.
//! Scaled ingredients can then be folded into a persisted shopping list.
//!
//! ## Architecture
//!
//! - **`mealplan-core`**: error types, models and label tables
//! - **`mealplan-engine`**: pure aggregation, mapping, selection, scaling and merging
//! - **`mealplan-providers`**: recipe-search provider trait, HTTP client and mock
//! - **this crate**: configuration, logging, persistence and the services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use mealplan::engine::ProfileSources;
//! use mealplan::errors::AppResult;
//! use mealplan::models::ServingCount;
//! use mealplan::providers::MockRecipeProvider;
//! use mealplan::services::{MealPlanner, PlanRequest};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let profile = ProfileSources {
//!         primary_allergies: vec!["Peanut".to_owned()],
//!         diet_preference: Some("Vegetarian".to_owned()),
//!         ..ProfileSources::default()
//!     }
//!     .into_profile(ServingCount::try_from(4_u32)?);
//!
//!     let planner = MealPlanner::new(Arc::new(MockRecipeProvider::sample()), Duration::from_secs(10));
//!     let plan = planner.plan(&profile, &PlanRequest::default()).await?;
//!     println!("{} for {} servings", plan.recipe.title, plan.servings.get());
//!     Ok(())
//! }
//! ```

/// Application configuration from environment variables
pub mod config;

/// Logging configuration and subscriber setup
pub mod logging;

/// Meal planning and shopping list services
pub mod services;

/// Key-value persistence backends
pub mod store;

pub use mealplan_core::{constants, errors, models};
pub use mealplan_engine as engine;
pub use mealplan_providers as providers;
