// ABOUTME: Recipe provider configuration with defaults and environment overrides
// ABOUTME: Validates the base URL, timeouts, and result count before any request is made
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{ProviderError, ProviderResult};

/// Default provider API root
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of candidates requested per search
pub const DEFAULT_RESULTS_PER_QUERY: u32 = 10;

/// Upper bound the provider accepts for `number`
pub const MAX_RESULTS_PER_QUERY: u32 = 100;

/// Recipe provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API root, without the `/recipes/...` path
    pub base_url: String,
    /// API key sent as the `apiKey` query parameter
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Candidates requested per search
    pub results_per_query: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            results_per_query: DEFAULT_RESULTS_PER_QUERY,
        }
    }
}

impl ProviderConfig {
    /// Defaults overridden by `RECIPE_API_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` when a variable does not parse or the
    /// resulting configuration fails validation.
    pub fn from_env() -> ProviderResult<Self> {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("RECIPE_API_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(api_key) = env::var("RECIPE_API_KEY") {
            config.api_key = api_key;
        }
        Self::apply_env_var("RECIPE_API_TIMEOUT_SECS", &mut config.timeout_secs)?;
        Self::apply_env_var(
            "RECIPE_API_CONNECT_TIMEOUT_SECS",
            &mut config.connect_timeout_secs,
        )?;
        Self::apply_env_var("RECIPE_API_RESULTS", &mut config.results_per_query)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> ProviderResult<()> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ProviderError::Config(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Check the configuration is usable
    ///
    /// The API key may be empty; the provider then rejects requests with a
    /// status error, which is reported like any other provider failure.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` for an unparseable or non-HTTP base
    /// URL, a zero timeout, or a result count outside `1..=100`.
    pub fn validate(&self) -> ProviderResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::Config(format!("base URL {}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProviderError::Config(format!(
                "base URL must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ProviderError::Config(
                "timeouts must be at least one second".to_owned(),
            ));
        }
        if self.results_per_query == 0 || self.results_per_query > MAX_RESULTS_PER_QUERY {
            return Err(ProviderError::Config(format!(
                "results per query must be between 1 and {MAX_RESULTS_PER_QUERY}"
            )));
        }
        Ok(())
    }

    /// Request timeout as a duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Search endpoint URL
    #[must_use]
    pub fn search_url(&self) -> String {
        format!(
            "{}/recipes/complexSearch",
            self.base_url.trim_end_matches('/')
        )
    }
}
