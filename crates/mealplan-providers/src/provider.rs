// ABOUTME: Core recipe provider trait and the search request it accepts
// ABOUTME: Providers receive compiled query parameters and return candidate recipes or an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use mealplan_engine::QueryParams;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderResult;
use crate::models::{CandidateRecipe, MealType};

/// One recipe search
///
/// `params` carries the constraint mapping output. The remaining fields are
/// request extras that never come from the dietary profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    /// Compiled dietary constraints
    #[serde(flatten)]
    pub params: QueryParams,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Meal slot filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Number of candidates wanted; provider default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

impl RecipeQuery {
    /// Query carrying only compiled constraints
    #[must_use]
    pub fn new(params: QueryParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Set the free-text search
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = Some(query).filter(|q| !q.trim().is_empty());
        self
    }

    /// Restrict to a meal slot
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Set the number of candidates wanted
    #[must_use]
    pub const fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// All request pairs, constraints first; absent values are left out
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.params.to_pairs();
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(meal_type) = self.meal_type {
            pairs.push(("type", meal_type.provider_code().to_owned()));
        }
        if let Some(number) = self.number {
            pairs.push(("number", number.to_string()));
        }
        pairs
    }
}

/// Recipe-search provider
///
/// Implementations must not retry on their own; a failed call is reported
/// once and the caller decides what to do.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Search for candidate recipes
    ///
    /// An empty result list is a success; the selector reports it as "no
    /// candidates".
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` for transport failures, non-success status
    /// codes, timeouts, and undecodable responses.
    async fn search(&self, query: &RecipeQuery) -> ProviderResult<Vec<CandidateRecipe>>;
}
