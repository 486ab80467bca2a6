// ABOUTME: Domain model re-exports for profiles, recipes, labels, and shopping list items
// ABOUTME: Plain serde data shared by the engine, provider, and service layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Diet, allergy, and meal-type label enumerations
pub mod labels;
/// Dietary profile and serving count
pub mod profile;
/// Candidate recipes, scaled ingredients, meal plans
pub mod recipe;
/// Shopping list rows and incoming entries
pub mod shopping;

pub use labels::{AllergyLabel, DietLabel, MealType};
pub use profile::{AggregatedPreferences, DietaryProfile, ServingCount};
pub use recipe::{CandidateRecipe, MealPlan, RawIngredient, ScaledIngredient};
pub use shopping::{IngredientCategory, ItemIdentity, ShoppingListEntry, ShoppingListItem};
