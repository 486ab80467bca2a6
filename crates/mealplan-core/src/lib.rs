// ABOUTME: Core types and constants for the meal-plan compilation engine
// ABOUTME: Foundation crate with error handling, domain models, and label tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealplan Core
//!
//! Foundation crate providing the shared types for the meal-plan engine.
//! Everything here is plain data plus the closed label enumerations; the
//! algorithms live in `mealplan-engine`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Storage keys and defaults shared across crates
//! - **models**: Dietary profile, candidate recipes, scaled ingredients, shopping list items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants shared across the workspace
pub mod constants;

/// Core data models (profile, recipes, shopping list)
pub mod models;
