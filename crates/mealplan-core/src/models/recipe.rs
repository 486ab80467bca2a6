// ABOUTME: Candidate recipe records returned by the provider and their scaled ingredients
// ABOUTME: Candidates are immutable inputs; scaling always produces new values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::ServingCount;

/// Single ingredient line of a provider recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredient {
    /// Provider ingredient identifier
    pub id: i64,
    /// Ingredient name ("rice")
    pub name: String,
    /// Numeric amount for the recipe's native serving count
    pub amount: f64,
    /// Unit as written by the provider ("cups"), possibly empty
    #[serde(default)]
    pub unit: String,
    /// Human-readable line embedding the amount ("2 cups rice")
    #[serde(default)]
    pub original: String,
}

impl RawIngredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            unit: unit.into(),
            original: original.into(),
        }
    }
}

/// Ingredient line rescaled to a target serving count
///
/// `id`, `name` and `unit` are carried over unchanged; `amount` and the first
/// numeric token of `original` reflect the serving ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    /// Provider ingredient identifier
    pub id: i64,
    /// Ingredient name
    pub name: String,
    /// Scaled numeric amount
    pub amount: f64,
    /// Unit, unchanged
    pub unit: String,
    /// Human-readable line with the leading quantity rewritten
    pub original: String,
}

/// Recipe record as returned by the recipe-search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecipe {
    /// Provider recipe identifier
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Total time to table in minutes
    pub ready_in_minutes: u32,
    /// Native serving count; zero means the provider did not report one
    #[serde(default)]
    pub servings: u32,
    /// Ingredient lines in provider order
    #[serde(default)]
    pub ingredients: Vec<RawIngredient>,
    /// Provider health score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    /// Link to the original recipe page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Thumbnail image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CandidateRecipe {
    /// Create a candidate with the required fields
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, ready_in_minutes: u32, servings: u32) -> Self {
        Self {
            id,
            title: title.into(),
            ready_in_minutes,
            servings,
            ingredients: Vec::new(),
            health_score: None,
            source_url: None,
            image: None,
        }
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: RawIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<RawIngredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Set the source URL
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Set the provider health score
    #[must_use]
    pub const fn with_health_score(mut self, score: f64) -> Self {
        self.health_score = Some(score);
        self
    }

    /// Serving count used as the scaling base (missing or zero counts as one)
    #[must_use]
    pub fn base_servings(&self) -> u32 {
        self.servings.max(1)
    }
}

/// A selected recipe scaled to the requested servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// The selected recipe, unmodified
    pub recipe: CandidateRecipe,
    /// Servings the ingredients were scaled to
    pub servings: ServingCount,
    /// Scaled ingredient lines in recipe order
    pub ingredients: Vec<ScaledIngredient>,
    /// When the plan was produced
    pub generated_at: DateTime<Utc>,
}
