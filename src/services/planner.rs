// ABOUTME: Meal planning service composing constraint mapping, provider search, selection and scaling
// ABOUTME: Bounds the provider call with a deadline and supports caller-driven cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use mealplan_core::errors::{AppResult, ProviderError};
use mealplan_core::models::{CandidateRecipe, DietaryProfile, MealPlan, MealType};
use mealplan_engine::{scale, select, to_query_params};
use mealplan_providers::{RecipeProvider, RecipeQuery};
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Extra request options for one plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    /// Meal slot to search for
    pub meal_type: Option<MealType>,
    /// Free-text search passed to the provider
    pub query: Option<String>,
    /// Number of candidates to ask for; provider default when absent
    pub number: Option<u32>,
}

impl PlanRequest {
    /// Request for one meal slot
    #[must_use]
    pub fn for_meal(meal_type: MealType) -> Self {
        Self {
            meal_type: Some(meal_type),
            ..Self::default()
        }
    }

    fn to_query(&self, profile: &DietaryProfile) -> RecipeQuery {
        let mut query = RecipeQuery::new(to_query_params(profile));
        if let Some(text) = &self.query {
            query = query.with_query(text.as_str());
        }
        if let Some(meal_type) = self.meal_type {
            query = query.with_meal_type(meal_type);
        }
        if let Some(number) = self.number {
            query = query.with_number(number);
        }
        query
    }
}

/// Handle used to abandon an in-flight plan
///
/// Clones share state; cancelling any clone cancels them all. Cancelling
/// after the plan resolved has no effect.
#[derive(Debug, Clone)]
pub struct PlanCancellation {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for PlanCancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanCancellation {
    /// Fresh, not yet cancelled handle
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once cancellation is requested
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            debug!("cancellation channel closed");
        }
    }
}

/// Plans meals against a recipe provider
///
/// The provider is called once per plan with no retries. Everything after
/// the call is synchronous engine work, so a plan is either fully produced
/// or not at all.
#[derive(Clone)]
pub struct MealPlanner {
    provider: Arc<dyn RecipeProvider>,
    timeout: Duration,
}

impl MealPlanner {
    /// Create a planner with an explicit provider deadline
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Create a planner using the configured deadline
    #[must_use]
    pub fn from_config(provider: Arc<dyn RecipeProvider>, config: &AppConfig) -> Self {
        Self::new(provider, config.plan_timeout())
    }

    /// Provider deadline
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Produce one plan for the profile
    ///
    /// # Errors
    ///
    /// - `ProviderFailure` when the provider call fails or exceeds the deadline
    /// - `NoCandidates` when the provider returns nothing
    pub async fn plan(
        &self,
        profile: &DietaryProfile,
        request: &PlanRequest,
    ) -> AppResult<MealPlan> {
        let candidates = self.search(&request.to_query(profile)).await?;
        compile(profile, &candidates)
    }

    /// Produce one plan, giving up as soon as `cancellation` fires
    ///
    /// # Errors
    ///
    /// Same as [`MealPlanner::plan`], plus `Cancelled` when the handle fires
    /// before the provider answered.
    pub async fn plan_cancellable(
        &self,
        profile: &DietaryProfile,
        request: &PlanRequest,
        cancellation: &PlanCancellation,
    ) -> AppResult<MealPlan> {
        let query = request.to_query(profile);
        let candidates = tokio::select! {
            biased;
            () = cancellation.cancelled() => {
                info!(provider = self.provider.name(), "meal plan cancelled");
                return Err(ProviderError::Cancelled.into());
            }
            result = self.search(&query) => result?,
        };
        compile(profile, &candidates)
    }

    /// Produce one plan per meal slot, in slot order
    ///
    /// Every slot reuses `request` with its meal type replaced. Slots are
    /// planned one after another. The first failure, or `cancellation`
    /// firing, aborts the whole week and no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error any slot produced, or `Cancelled`.
    pub async fn plan_week(
        &self,
        profile: &DietaryProfile,
        meal_types: &[MealType],
        request: &PlanRequest,
        cancellation: &PlanCancellation,
    ) -> AppResult<Vec<MealPlan>> {
        let mut plans = Vec::with_capacity(meal_types.len());
        for meal_type in meal_types {
            let slot = PlanRequest {
                meal_type: Some(*meal_type),
                ..request.clone()
            };
            let plan = self
                .plan_cancellable(profile, &slot, cancellation)
                .await
                .inspect_err(|e| {
                    warn!(meal_type = ?meal_type, error = %e, "weekly plan aborted");
                })?;
            plans.push(plan);
        }
        Ok(plans)
    }

    async fn search(&self, query: &RecipeQuery) -> Result<Vec<CandidateRecipe>, ProviderError> {
        debug!(
            provider = self.provider.name(),
            timeout_secs = self.timeout.as_secs(),
            "searching recipes"
        );
        let candidates = timeout(self.timeout, self.provider.search(query))
            .await
            .map_err(|_| ProviderError::Timeout {
                after_secs: self.timeout.as_secs(),
            })??;
        debug!(
            provider = self.provider.name(),
            candidates = candidates.len(),
            "provider returned candidates"
        );
        Ok(candidates)
    }
}

/// Select and scale; nothing here touches the network
fn compile(profile: &DietaryProfile, candidates: &[CandidateRecipe]) -> AppResult<MealPlan> {
    let selection = select(candidates, profile)?;
    let servings = profile.target_servings;
    let ingredients = scale(selection.recipe, servings);

    info!(
        recipe_id = selection.recipe.id,
        title = %selection.recipe.title,
        servings = servings.get(),
        reason = ?selection.reason,
        within_time_budget = selection.within_time_budget,
        "meal plan compiled"
    );

    Ok(MealPlan {
        recipe: selection.recipe.clone(),
        servings,
        ingredients,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancellation_is_shared_between_clones() {
        let handle = PlanCancellation::new();
        let clone = handle.clone();
        assert!(!clone.is_cancelled());

        handle.cancel();
        assert!(clone.is_cancelled());
        clone.cancelled().await;
    }

    #[test]
    fn test_request_extras_reach_query() {
        let request = PlanRequest {
            query: Some("curry".to_owned()),
            number: Some(3),
            ..PlanRequest::for_meal(MealType::Soup)
        };
        let query = request.to_query(&DietaryProfile::default());

        assert_eq!(query.query.as_deref(), Some("curry"));
        assert_eq!(query.meal_type, Some(MealType::Soup));
        assert_eq!(query.number, Some(3));
    }
}
