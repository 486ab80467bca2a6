// ABOUTME: Recipe-search provider implementations for the meal-plan engine
// ABOUTME: Core provider trait, configuration, shared HTTP client, HTTP and mock providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Recipe-search providers.
//!
//! The engine never talks to the network itself. A [`RecipeProvider`] takes
//! the compiled [`mealplan_engine::QueryParams`] and returns candidate recipes.
//! [`HttpRecipeProvider`] calls a complex-search style REST API;
//! [`MockRecipeProvider`] serves canned candidates for tests and offline use.

// Re-export core modules so provider code can keep `crate::errors::*` paths
pub use mealplan_core::errors;
pub use mealplan_core::models;

/// Provider configuration loaded from the environment
pub mod config;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// In-memory provider returning canned recipes
pub mod mock;
/// Core provider trait and query type
pub mod provider;
/// HTTP recipe-search provider
pub mod recipe_api;

pub use config::ProviderConfig;
pub use provider::{RecipeProvider, RecipeQuery};
pub use mock::{MockFailure, MockRecipeProvider};
pub use recipe_api::HttpRecipeProvider;
