// ABOUTME: Meal-plan compilation engine turning dietary preferences into a scaled recipe
// ABOUTME: Hosts profile aggregation, query mapping, selection, scaling, and shopping list merges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealplan Engine
//!
//! Leaf-first pipeline:
//!
//! ```text
//! profile::aggregate -> constraints::to_query_params -> (provider) ->
//!     selector::select -> scaling::scale -> shopping::ShoppingList::merge_many
//! ```
//!
//! Every stage except the shopping list is a pure function. The shopping list
//! is an owned aggregate; callers serialize access to it and persist it.

/// Constraint mapping from profile to provider query parameters
pub mod constraints;
/// Merging allergy and diet signals from two preference stores
pub mod profile;
/// Serving scaler and quantity tokenizer
pub mod scaling;
/// Candidate recipe selection
pub mod selector;
/// Shopping list aggregation and grocery categories
pub mod shopping;

pub use constraints::{to_query_params, QueryParams};
pub use profile::{aggregate, ProfileSources};
pub use scaling::{scale, ServingRatio};
pub use selector::{select, Selection, SelectionReason};
pub use shopping::{categorize, merge_many, merge_one, MergeOutcome, MergeSummary, ShoppingList};
