// ABOUTME: Dietary profile model holding the canonical constraints for one planning request
// ABOUTME: Includes the validated serving count newtype and builder-style setters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TARGET_SERVINGS;
use crate::errors::EngineError;

/// Target serving count, guaranteed to be at least one
///
/// Non-positive values are rejected at construction, so the scaler never
/// has to handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServingCount(NonZeroU32);

impl ServingCount {
    /// One serving
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a serving count from a non-zero value
    #[must_use]
    pub const fn new(servings: NonZeroU32) -> Self {
        Self(servings)
    }

    /// Serving count as a plain integer
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for ServingCount {
    fn default() -> Self {
        NonZeroU32::new(DEFAULT_TARGET_SERVINGS).map_or(Self::ONE, Self)
    }
}

impl TryFrom<i64> for ServingCount {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(EngineError::InvalidServings { requested: value })
    }
}

impl TryFrom<u32> for ServingCount {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(EngineError::InvalidServings {
                requested: i64::from(value),
            })
    }
}

impl fmt::Display for ServingCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allergy and diet signals merged from the two preference stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPreferences {
    /// Union of both allergy lists, duplicates collapsed case-sensitively
    pub allergies: BTreeSet<String>,
    /// Diet labels in priority order
    pub diet_labels: Vec<String>,
}

/// Canonical, deduplicated constraint set for one planning request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryProfile {
    /// Allergy and intolerance labels as written by the preference sources
    pub allergies: BTreeSet<String>,
    /// Diet labels in priority order; the first mappable one is used
    pub diet_labels: Vec<String>,
    /// Disliked ingredients (free text)
    pub excluded_ingredients: BTreeSet<String>,
    /// Upper bound on ready time in minutes, `None` when unconstrained
    pub max_cook_minutes: Option<u32>,
    /// Servings the selected recipe is scaled to
    pub target_servings: ServingCount,
    /// Ingredients the user would like to see; empty when none were given
    pub desired_ingredient_hints: BTreeSet<String>,
}

impl Default for DietaryProfile {
    fn default() -> Self {
        Self {
            allergies: BTreeSet::new(),
            diet_labels: Vec::new(),
            excluded_ingredients: BTreeSet::new(),
            max_cook_minutes: None,
            target_servings: ServingCount::default(),
            desired_ingredient_hints: BTreeSet::new(),
        }
    }
}

impl DietaryProfile {
    /// Start a profile from aggregated preference signals
    #[must_use]
    pub fn from_preferences(preferences: AggregatedPreferences, servings: ServingCount) -> Self {
        Self {
            allergies: preferences.allergies,
            diet_labels: preferences.diet_labels,
            target_servings: servings,
            ..Self::default()
        }
    }

    /// Add disliked ingredients, skipping blank entries
    #[must_use]
    pub fn with_excluded_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_ingredients.extend(
            ingredients
                .into_iter()
                .map(|s| s.as_ref().trim().to_owned())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    /// Set the ready-time budget
    #[must_use]
    pub const fn with_max_cook_minutes(mut self, minutes: u32) -> Self {
        self.max_cook_minutes = Some(minutes);
        self
    }

    /// Add ingredient hints used for query and title matching
    #[must_use]
    pub fn with_ingredient_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.desired_ingredient_hints.extend(
            hints
                .into_iter()
                .map(|s| s.as_ref().trim().to_owned())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    /// Set the target serving count
    #[must_use]
    pub const fn with_target_servings(mut self, servings: ServingCount) -> Self {
        self.target_servings = servings;
        self
    }
}
