// ABOUTME: Unified error handling for the meal-plan engine with standard error codes
// ABOUTME: Wraps engine, provider, and storage failures into a single AppError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain errors (`EngineError`, `ProviderError`) are defined next to the
//! concern they describe and convert into `AppError`, which carries a stable
//! `ErrorCode` the presentation layer maps to user-facing text.

/// Engine errors raised by selection and serving validation
pub mod engine;
/// Recipe-search provider errors
pub mod provider;

pub use engine::EngineError;
pub use provider::{ProviderError, ProviderResult};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller supplied malformed input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Target serving count was zero or negative
    #[serde(rename = "INVALID_SERVINGS")]
    InvalidServings = 3001,

    // Resource Management (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Provider returned zero candidate recipes
    #[serde(rename = "NO_CANDIDATES")]
    NoCandidates = 4001,

    // External Services (5000-5999)
    /// Recipe-search provider failed (transport, HTTP status, timeout, decode)
    #[serde(rename = "PROVIDER_FAILURE")]
    ProviderFailure = 5000,
    /// Request was abandoned by the caller
    #[serde(rename = "CANCELLED")]
    Cancelled = 5001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Persistence store failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a developer-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidServings => "Target servings must be a positive integer",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::NoCandidates => "No recipes matched the requested constraints",
            Self::ProviderFailure => "The recipe-search provider request failed",
            Self::Cancelled => "The request was cancelled",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Get the message shown to an end user for this error
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NoCandidates => "No recipes found. Try adjusting your preferences.",
            Self::ProviderFailure => "Couldn't reach the recipe service. Check your connection and try again.",
            Self::Cancelled => "Meal plan generation was cancelled.",
            Self::InvalidInput | Self::InvalidServings => "Please check the values you entered.",
            Self::ResourceNotFound => "That item no longer exists.",
            Self::ConfigError
            | Self::InternalError
            | Self::StorageError
            | Self::SerializationError => "Something went wrong. Please try again.",
        }
    }

    /// Whether retrying the same request could succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ProviderFailure | Self::StorageError)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<EngineError> for AppError {
    fn from(error: EngineError) -> Self {
        let code = match &error {
            EngineError::NoCandidates => ErrorCode::NoCandidates,
            EngineError::InvalidServings { .. } => ErrorCode::InvalidServings,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = if matches!(error, ProviderError::Cancelled) {
            ErrorCode::Cancelled
        } else if matches!(error, ProviderError::Config(_)) {
            ErrorCode::ConfigError
        } else {
            ErrorCode::ProviderFailure
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
