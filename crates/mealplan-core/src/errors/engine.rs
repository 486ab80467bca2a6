// ABOUTME: Engine error types for recipe selection and serving validation
// ABOUTME: Separates "no candidates" from precondition violations on servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the meal-plan engine itself.
///
/// Everything else the engine encounters (unmapped labels, quantity strings
/// without a number, recipes without a serving count) degrades by fallback
/// and never produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The provider returned zero recipes, so there is nothing to select or scale
    #[error("no matching recipes")]
    NoCandidates,

    /// A non-positive serving count reached the engine
    #[error("target servings must be at least 1, got {requested}")]
    InvalidServings {
        /// The rejected value as supplied by the caller
        requested: i64,
    },
}
