// ABOUTME: HTTP recipe-search provider calling a complex-search REST endpoint
// ABOUTME: Sends compiled constraints as query parameters and decodes candidates with ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP recipe-search client.
//!
//! One `GET {base}/recipes/complexSearch` per search, with
//! `addRecipeInformation=true&fillIngredients=true` so every result already
//! carries its ingredient lines, ready time and serving count. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ProviderConfig;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{CandidateRecipe, RawIngredient};
use crate::provider::{RecipeProvider, RecipeQuery};

/// Longest response body kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RecipeRecord>,
}

/// One result with recipe information filled in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: i64,
    title: String,
    #[serde(default)]
    ready_in_minutes: u32,
    #[serde(default)]
    servings: u32,
    #[serde(default)]
    health_score: Option<f64>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<IngredientRecord>,
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    original: String,
}

impl From<IngredientRecord> for RawIngredient {
    fn from(record: IngredientRecord) -> Self {
        Self::new(
            record.id.unwrap_or_default(),
            record.name,
            record.amount,
            record.unit,
            record.original,
        )
    }
}

impl From<RecipeRecord> for CandidateRecipe {
    fn from(record: RecipeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            ready_in_minutes: record.ready_in_minutes,
            servings: record.servings,
            ingredients: record
                .extended_ingredients
                .into_iter()
                .map(RawIngredient::from)
                .collect(),
            health_score: record.health_score,
            source_url: record.source_url.filter(|u| !u.is_empty()),
            image: record.image.filter(|u| !u.is_empty()),
        }
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}

/// Recipe provider backed by the HTTP search API
#[derive(Debug, Clone)]
pub struct HttpRecipeProvider {
    config: ProviderConfig,
    http_client: Client,
}

impl HttpRecipeProvider {
    /// Create a provider using the shared HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` when the configuration is invalid.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a provider with a specific HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` when the configuration is invalid.
    pub fn with_client(config: ProviderConfig, http_client: Client) -> ProviderResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn map_send_error(&self, error: &reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout {
                after_secs: self.config.timeout_secs,
            }
        } else {
            ProviderError::Http(error.to_string())
        }
    }
}

#[async_trait]
impl RecipeProvider for HttpRecipeProvider {
    fn name(&self) -> &'static str {
        "recipe_api"
    }

    async fn search(&self, query: &RecipeQuery) -> ProviderResult<Vec<CandidateRecipe>> {
        let url = self.config.search_url();
        let number = query.number.unwrap_or(self.config.results_per_query);

        let mut pairs = RecipeQuery {
            number: Some(number),
            ..query.clone()
        }
        .to_pairs();
        pairs.push(("addRecipeInformation", "true".to_owned()));
        pairs.push(("fillIngredients", "true".to_owned()));

        debug!(
            provider = self.name(),
            params = ?query.params,
            number,
            "sending recipe search"
        );

        let response = self
            .http_client
            .get(&url)
            .query(&pairs)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                provider = self.name(),
                status = status.as_u16(),
                "recipe search returned non-success status"
            );
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(&e))?;
        let decoded: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Decode(format!("JSON parse error: {e}")))?;

        let candidates: Vec<CandidateRecipe> = decoded
            .results
            .into_iter()
            .map(CandidateRecipe::from)
            .collect();

        info!(
            provider = self.name(),
            candidates = candidates.len(),
            "recipe search completed"
        );
        Ok(candidates)
    }
}
