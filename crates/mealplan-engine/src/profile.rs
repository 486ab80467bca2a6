// ABOUTME: Profile aggregation merging allergy and diet signals from two preference stores
// ABOUTME: Pure union of allergy lists plus priority ordering of diet labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use mealplan_core::models::{AggregatedPreferences, DietaryProfile, ServingCount};
use serde::{Deserialize, Serialize};

/// Preference signals as read from the two independently-owned stores
///
/// The onboarding store keeps an allergy list and a single explicit diet;
/// the settings store keeps its own allergy list and a multi-select diet list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSources {
    /// Allergies recorded by the first store
    pub primary_allergies: Vec<String>,
    /// Allergies recorded by the second store
    pub secondary_allergies: Vec<String>,
    /// Explicit single diet preference, if any
    pub diet_preference: Option<String>,
    /// Multi-select diet preferences in selection order
    pub diet_preferences: Vec<String>,
}

impl ProfileSources {
    /// Merge the sources into aggregated preferences
    #[must_use]
    pub fn aggregate(&self) -> AggregatedPreferences {
        aggregate(
            &self.primary_allergies,
            &self.secondary_allergies,
            self.diet_preference.as_deref(),
            &self.diet_preferences,
        )
    }

    /// Merge the sources and start a dietary profile for the given servings
    #[must_use]
    pub fn into_profile(self, servings: ServingCount) -> DietaryProfile {
        DietaryProfile::from_preferences(self.aggregate(), servings)
    }
}

/// Merge allergy and diet signals into one canonical preference set.
///
/// Allergies are a case-sensitive set union of both lists: `"Dairy"` and
/// `"dairy"` stay distinct, exact repeats collapse, nothing is dropped.
///
/// Diet labels: a non-blank explicit preference comes first, followed by the
/// multi-select list verbatim. Downstream mapping takes the first label with a
/// provider code, so the explicit choice wins whenever it is mappable.
#[must_use]
pub fn aggregate<A, B, M>(
    source_a: &[A],
    source_b: &[B],
    diet_single: Option<&str>,
    diet_multi: &[M],
) -> AggregatedPreferences
where
    A: AsRef<str>,
    B: AsRef<str>,
    M: AsRef<str>,
{
    let allergies: BTreeSet<String> = source_a
        .iter()
        .map(|a| a.as_ref().to_owned())
        .chain(source_b.iter().map(|b| b.as_ref().to_owned()))
        .collect();

    let single = diet_single.filter(|label| !label.trim().is_empty());
    let diet_labels = single
        .into_iter()
        .map(str::to_owned)
        .chain(diet_multi.iter().map(|m| m.as_ref().to_owned()))
        .collect();

    AggregatedPreferences {
        allergies,
        diet_labels,
    }
}
