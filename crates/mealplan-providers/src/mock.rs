// ABOUTME: In-memory recipe provider serving canned candidates for tests and offline runs
// ABOUTME: Can simulate latency and failures, and records every query it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::errors::{ProviderError, ProviderResult};
use crate::models::{CandidateRecipe, RawIngredient};
use crate::provider::{RecipeProvider, RecipeQuery};

/// Failure the mock reports instead of returning candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Transport error
    Http,
    /// Non-success status code
    Status(u16),
    /// Deadline exceeded
    Timeout,
}

impl MockFailure {
    fn to_error(self) -> ProviderError {
        match self {
            Self::Http => ProviderError::Http("connection refused".to_owned()),
            Self::Status(status) => ProviderError::Status {
                status,
                body: "mock failure".to_owned(),
            },
            Self::Timeout => ProviderError::Timeout { after_secs: 0 },
        }
    }
}

/// Provider returning a fixed candidate list
///
/// Applies the two server-side filters a real provider is trusted with:
/// candidates using an excluded ingredient are dropped, and the result is
/// capped at the requested number.
#[derive(Debug, Default)]
pub struct MockRecipeProvider {
    candidates: Vec<CandidateRecipe>,
    failure: Option<MockFailure>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_query: Mutex<Option<RecipeQuery>>,
}

impl MockRecipeProvider {
    /// Provider returning `candidates` in order
    #[must_use]
    pub fn new(candidates: Vec<CandidateRecipe>) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    /// Provider that always fails
    #[must_use]
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Wait this long before answering
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of searches served so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent query received
    pub async fn last_query(&self) -> Option<RecipeQuery> {
        self.last_query.lock().await.clone()
    }

    /// Small built-in catalogue for offline use
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_catalogue())
    }
}

fn uses_excluded(recipe: &CandidateRecipe, excluded: &[String]) -> bool {
    recipe.ingredients.iter().any(|ingredient| {
        let name = ingredient.name.to_lowercase();
        excluded.iter().any(|e| name.contains(e.as_str()))
    })
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, query: &RecipeQuery) -> ProviderResult<Vec<CandidateRecipe>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().await = Some(query.clone());

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }

        let excluded: Vec<String> = query
            .params
            .exclude_ingredients
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let limit = query
            .number
            .map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        Ok(self
            .candidates
            .iter()
            .filter(|recipe| !uses_excluded(recipe, &excluded))
            .take(limit)
            .cloned()
            .collect())
    }
}

fn sample_catalogue() -> Vec<CandidateRecipe> {
    vec![
        CandidateRecipe::new(1001, "Lemon Garlic Chicken", 35, 4)
            .with_health_score(62.0)
            .with_ingredients(vec![
                RawIngredient::new(5062, "chicken breast", 1.5, "lbs", "1.5 lbs chicken breast"),
                RawIngredient::new(9152, "lemon juice", 3.0, "tbsp", "3 tbsp lemon juice"),
                RawIngredient::new(11_215, "garlic", 4.0, "cloves", "4 cloves garlic, minced"),
                RawIngredient::new(4053, "olive oil", 2.0, "tbsp", "2 tbsp olive oil"),
            ]),
        CandidateRecipe::new(1002, "Chickpea Spinach Curry", 30, 4)
            .with_health_score(88.0)
            .with_ingredients(vec![
                RawIngredient::new(16_057, "chickpeas", 2.0, "cans", "2 cans chickpeas, drained"),
                RawIngredient::new(10_011_457, "spinach", 4.0, "cups", "4 cups baby spinach"),
                RawIngredient::new(11_282, "onion", 1.0, "", "1 onion, diced"),
                RawIngredient::new(12_118, "coconut milk", 400.0, "ml", "400 ml coconut milk"),
                RawIngredient::new(2015, "curry powder", 2.0, "tbsp", "2 tbsp curry powder"),
            ]),
        CandidateRecipe::new(1003, "Salmon Rice Bowl", 25, 2)
            .with_health_score(80.0)
            .with_ingredients(vec![
                RawIngredient::new(15_076, "salmon fillet", 2.0, "", "2 salmon fillets"),
                RawIngredient::new(20_444, "rice", 1.0, "cup", "1 cup rice"),
                RawIngredient::new(11_206, "cucumber", 1.0, "", "1 cucumber, sliced"),
                RawIngredient::new(16_124, "soy sauce", 2.0, "tbsp", "2 tbsp soy sauce"),
            ]),
        CandidateRecipe::new(1004, "Overnight Oats", 5, 1)
            .with_health_score(70.0)
            .with_ingredients(vec![
                RawIngredient::new(8120, "rolled oats", 0.5, "cup", "0.5 cup rolled oats"),
                RawIngredient::new(1077, "milk", 0.5, "cup", "0.5 cup milk"),
                RawIngredient::new(9040, "banana", 1.0, "", "1 banana, sliced"),
            ]),
        CandidateRecipe::new(1005, "Slow Cooker Beef Chili", 240, 6)
            .with_health_score(55.0)
            .with_ingredients(vec![
                RawIngredient::new(10_023_572, "ground beef", 2.0, "lbs", "2 lbs ground beef"),
                RawIngredient::new(16_033, "kidney beans", 2.0, "cans", "2 cans kidney beans"),
                RawIngredient::new(10_011_693, "diced tomatoes", 28.0, "oz", "28 oz diced tomatoes"),
                RawIngredient::new(2009, "chili powder", 3.0, "tbsp", "3 tbsp chili powder"),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_engine::QueryParams;

    #[tokio::test]
    async fn test_excluded_ingredients_are_filtered() {
        let provider = MockRecipeProvider::sample();
        let query = RecipeQuery::new(QueryParams {
            exclude_ingredients: Some("chicken,beef".to_owned()),
            ..QueryParams::default()
        });

        let results = provider.search(&query).await.unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.id != 1001 && r.id != 1005));
        assert_eq!(provider.calls(), 1);
        assert_eq!(provider.last_query().await, Some(query));
    }

    #[tokio::test]
    async fn test_number_caps_results() {
        let provider = MockRecipeProvider::sample();
        let results = provider
            .search(&RecipeQuery::default().with_number(2))
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let provider = MockRecipeProvider::failing(MockFailure::Status(402));
        let err = provider.search(&RecipeQuery::default()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 402, .. }));
    }
}
