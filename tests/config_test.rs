// ABOUTME: Integration tests for environment-driven application configuration
// ABOUTME: Covers defaults, MEALPLAN_* overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use mealplan::config::{AppConfig, ConfigError, DEFAULT_PLAN_TIMEOUT_SECS};
use mealplan::errors::{AppError, ErrorCode};
use serial_test::serial;

const VARS: [&str; 5] = [
    "MEALPLAN_DATA_DIR",
    "MEALPLAN_PLAN_TIMEOUT_SECS",
    "MEALPLAN_DEFAULT_SERVINGS",
    "RECIPE_API_BASE_URL",
    "RECIPE_API_RESULTS",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_overrides_uses_defaults() {
    clear_vars();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.plan_timeout(), Duration::from_secs(DEFAULT_PLAN_TIMEOUT_SECS));
    assert_eq!(config.default_servings, 2);
    assert!(config.data_dir.ends_with("mealplan"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_vars();
    env::set_var("MEALPLAN_DATA_DIR", "/tmp/mealplan-test-data");
    env::set_var("MEALPLAN_PLAN_TIMEOUT_SECS", "5");
    env::set_var("MEALPLAN_DEFAULT_SERVINGS", " 6 ");
    env::set_var("RECIPE_API_RESULTS", "25");

    let config = AppConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/mealplan-test-data"));
    assert_eq!(config.plan_timeout_secs, 5);
    assert_eq!(config.default_serving_count().get(), 6);
    assert_eq!(config.provider.results_per_query, 25);
}

#[test]
#[serial]
fn test_unparseable_value_is_parse_error() {
    clear_vars();
    env::set_var("MEALPLAN_PLAN_TIMEOUT_SECS", "soon");

    let err = AppConfig::from_env().unwrap_err();
    clear_vars();

    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("MEALPLAN_PLAN_TIMEOUT_SECS")));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_zero_servings_is_rejected() {
    clear_vars();
    env::set_var("MEALPLAN_DEFAULT_SERVINGS", "0");

    let err = AppConfig::from_env().unwrap_err();
    clear_vars();

    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
}

#[test]
#[serial]
fn test_bad_provider_url_surfaces_as_provider_config_error() {
    clear_vars();
    env::set_var("RECIPE_API_BASE_URL", "ftp://recipes.example");

    let err = AppConfig::from_env().unwrap_err();
    clear_vars();

    assert!(matches!(err, ConfigError::Provider(_)));
}
