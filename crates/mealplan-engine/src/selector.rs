// ABOUTME: Candidate recipe selection under a soft time budget and ingredient hints
// ABOUTME: Returns exactly one recipe for any non-empty list, with the reason it won
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::errors::EngineError;
use mealplan_core::models::{CandidateRecipe, DietaryProfile};
use serde::Serialize;
use tracing::debug;

/// Why a candidate was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SelectionReason {
    /// Title contained one of the user's ingredient hints
    HintMatch {
        /// The hint that matched
        hint: String,
    },
    /// No hint matched (or none were given); first remaining candidate
    FirstCandidate,
}

/// Outcome of a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<'a> {
    /// The winning candidate
    pub recipe: &'a CandidateRecipe,
    /// Why it won
    pub reason: SelectionReason,
    /// `false` when no candidate fit the time budget and the fastest was used instead
    pub within_time_budget: bool,
}

impl Selection<'_> {
    /// Whether the result satisfied every soft constraint
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.within_time_budget && matches!(self.reason, SelectionReason::HintMatch { .. })
    }
}

/// Apply the time budget, falling back to the whole list ordered fastest-first
fn time_filtered<'a>(
    candidates: &'a [CandidateRecipe],
    max_minutes: Option<u32>,
) -> (Vec<&'a CandidateRecipe>, bool) {
    let Some(bound) = max_minutes else {
        return (candidates.iter().collect(), true);
    };

    let within: Vec<&CandidateRecipe> = candidates
        .iter()
        .filter(|c| c.ready_in_minutes <= bound)
        .collect();
    if !within.is_empty() {
        return (within, true);
    }

    debug!(
        bound,
        candidates = candidates.len(),
        "no candidate fits the time budget, falling back to fastest first"
    );
    let mut fastest: Vec<&CandidateRecipe> = candidates.iter().collect();
    // stable: equal times keep provider order
    fastest.sort_by_key(|c| c.ready_in_minutes);
    (fastest, false)
}

/// Pick one recipe from the provider's candidates.
///
/// 1. If the profile has a time budget, keep candidates within it; when none
///    fit, use every candidate ordered by ascending ready time instead.
/// 2. Return the first remaining candidate whose lower-cased title contains a
///    lower-cased ingredient hint.
/// 3. Otherwise return the first remaining candidate.
///
/// Provider order is otherwise trusted as the relevance ranking.
///
/// # Errors
///
/// Returns `EngineError::NoCandidates` when `candidates` is empty.
pub fn select<'a>(
    candidates: &'a [CandidateRecipe],
    profile: &DietaryProfile,
) -> Result<Selection<'a>, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::NoCandidates);
    }

    let (pool, within_time_budget) = time_filtered(candidates, profile.max_cook_minutes);

    let hints: Vec<String> = profile
        .desired_ingredient_hints
        .iter()
        .map(|h| h.to_lowercase())
        .filter(|h| !h.is_empty())
        .collect();

    if !hints.is_empty() {
        for candidate in pool.iter().copied() {
            let title = candidate.title.to_lowercase();
            if let Some(hint) = hints.iter().find(|h| title.contains(h.as_str())) {
                return Ok(Selection {
                    recipe: candidate,
                    reason: SelectionReason::HintMatch { hint: hint.clone() },
                    within_time_budget,
                });
            }
        }
    }

    // pool is non-empty: it is either a non-empty filter result or every candidate
    pool.first()
        .copied()
        .map(|recipe| Selection {
            recipe,
            reason: SelectionReason::FirstCandidate,
            within_time_budget,
        })
        .ok_or(EngineError::NoCandidates)
}
