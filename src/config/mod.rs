// ABOUTME: Application configuration loaded from environment variables with validation
// ABOUTME: Holds data directory, planning timeout, default servings, provider and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application Configuration Module
//!
//! All values can be overridden via environment variables with the
//! `MEALPLAN_` prefix; the recipe provider reads its own `RECIPE_API_*`
//! variables and logging reads `RUST_LOG` / `LOG_FORMAT`.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use mealplan_core::constants::DEFAULT_TARGET_SERVINGS;
use mealplan_core::errors::{AppError, ProviderError};
use mealplan_core::models::ServingCount;
use mealplan_providers::ProviderConfig;
use thiserror::Error;
use tracing::warn;

use crate::logging::LoggingConfig;

/// Global configuration singleton
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Seconds a whole planning request may take, provider call included
pub const DEFAULT_PLAN_TIMEOUT_SECS: u64 = 45;

/// Directory name under the platform data directory
const DATA_DIR_NAME: &str = "mealplan";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is outside its permitted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// No usable data directory could be determined
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Recipe provider settings were rejected
    #[error("Provider configuration: {0}")]
    Provider(#[from] ProviderError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Application configuration container
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding persisted state such as the shopping list
    pub data_dir: PathBuf,
    /// Upper bound on one planning request
    pub plan_timeout_secs: u64,
    /// Servings used when the caller does not choose
    pub default_servings: u32,
    /// Recipe provider settings
    pub provider: ProviderConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            plan_timeout_secs: DEFAULT_PLAN_TIMEOUT_SECS,
            default_servings: DEFAULT_TARGET_SERVINGS,
            provider: ProviderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Platform data directory, or the working directory when there is none
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".").join(DATA_DIR_NAME), |dir| dir.join(DATA_DIR_NAME))
}

impl AppConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        APP_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load mealplan config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            provider: ProviderConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("data_dir"));
        }
        if self.plan_timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange("plan_timeout_secs must be > 0"));
        }
        if self.default_servings == 0 {
            return Err(ConfigError::ValueOutOfRange("default_servings must be > 0"));
        }
        self.provider.validate()?;
        Ok(())
    }

    /// Planning deadline as a `Duration`
    #[must_use]
    pub const fn plan_timeout(&self) -> Duration {
        Duration::from_secs(self.plan_timeout_secs)
    }

    /// Default servings as a validated count
    #[must_use]
    pub fn default_serving_count(&self) -> ServingCount {
        ServingCount::try_from(self.default_servings).unwrap_or_default()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(dir) = env::var("MEALPLAN_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = PathBuf::from(dir.trim());
            }
        }
        Self::apply_env_var("MEALPLAN_PLAN_TIMEOUT_SECS", &mut self.plan_timeout_secs)?;
        Self::apply_env_var("MEALPLAN_DEFAULT_SERVINGS", &mut self.default_servings)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
        assert_eq!(config.plan_timeout(), Duration::from_secs(DEFAULT_PLAN_TIMEOUT_SECS));
        assert_eq!(config.default_serving_count().get(), DEFAULT_TARGET_SERVINGS);
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let config = AppConfig {
            plan_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

        let config = AppConfig {
            default_servings: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));
    }
}
