// ABOUTME: Recipe-search provider error types with structured context
// ABOUTME: Distinguishes transport, status, timeout, decode, and cancellation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors returned by a recipe-search provider.
///
/// The planner reports all variants except `Cancelled` and `Config` as a single
/// provider failure; the variants exist so logs keep the detail.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request could not be sent or the connection failed
    #[error("recipe provider request failed: {0}")]
    Http(String),

    /// Provider answered with a non-success status
    #[error("recipe provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Request exceeded its deadline
    #[error("recipe provider timed out after {after_secs}s")]
    Timeout {
        /// Deadline that was exceeded, in seconds
        after_secs: u64,
    },

    /// Response body was not the expected shape
    #[error("recipe provider response could not be decoded: {0}")]
    Decode(String),

    /// Caller abandoned the request
    #[error("recipe provider request was cancelled")]
    Cancelled,

    /// Provider is misconfigured (bad base URL, missing key)
    #[error("recipe provider configuration error: {0}")]
    Config(String),
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
