// ABOUTME: Integration tests for the meal planner service over a mock recipe provider
// ABOUTME: Covers selection and scaling end to end, deadlines, cancellation and weekly atomicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use mealplan::engine::ProfileSources;
use mealplan::errors::ErrorCode;
use mealplan::models::{CandidateRecipe, DietaryProfile, MealType, RawIngredient, ServingCount};
use mealplan::providers::{MockFailure, MockRecipeProvider};
use mealplan::services::{MealPlanner, PlanCancellation, PlanRequest};
use tokio::time::sleep;

fn servings(n: u32) -> ServingCount {
    ServingCount::try_from(n).unwrap()
}

fn planner(provider: MockRecipeProvider) -> (MealPlanner, Arc<MockRecipeProvider>) {
    let provider = Arc::new(provider);
    let planner = MealPlanner::new(provider.clone(), Duration::from_secs(5));
    (planner, provider)
}

fn rice_bowl() -> CandidateRecipe {
    CandidateRecipe::new(7, "Garlic Rice Bowl", 20, 2).with_ingredients(vec![
        RawIngredient::new(20_444, "rice", 2.0, "cups", "2 cups rice"),
        RawIngredient::new(11_215, "garlic", 3.0, "cloves", "3 cloves garlic"),
        RawIngredient::new(2047, "salt", 0.0, "", "salt to taste"),
    ])
}

#[tokio::test]
async fn test_plan_selects_and_scales() {
    let (planner, provider) = planner(MockRecipeProvider::new(vec![rice_bowl()]));
    let profile = DietaryProfile::default().with_target_servings(servings(4));

    let plan = planner.plan(&profile, &PlanRequest::default()).await.unwrap();

    assert_eq!(plan.recipe.id, 7);
    assert_eq!(plan.servings.get(), 4);
    assert!((plan.ingredients[0].amount - 4.0).abs() < f64::EPSILON);
    assert_eq!(plan.ingredients[0].original, "4 cups rice");
    assert_eq!(plan.ingredients[1].original, "6 cloves garlic");
    assert_eq!(plan.ingredients[2].original, "salt to taste");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_profile_constraints_reach_the_provider() {
    let (planner, provider) = planner(MockRecipeProvider::sample());
    let profile = ProfileSources {
        primary_allergies: vec!["Chicken".to_owned()],
        secondary_allergies: vec!["Peanut".to_owned()],
        diet_preference: None,
        diet_preferences: vec!["Balanced".to_owned(), "Vegetarian".to_owned()],
    }
    .into_profile(servings(2))
    .with_max_cook_minutes(40);

    let plan = planner
        .plan(&profile, &PlanRequest::for_meal(MealType::MainCourse))
        .await
        .unwrap();

    let query = provider.last_query().await.unwrap();
    assert_eq!(query.params.diet.as_deref(), Some("vegetarian"));
    assert_eq!(query.params.intolerances.as_deref(), Some("chicken,peanut"));
    assert_eq!(query.params.exclude_ingredients.as_deref(), Some("chicken"));
    assert_eq!(query.params.max_ready_time, Some(40));
    assert_eq!(query.meal_type, Some(MealType::MainCourse));

    // the mock drops the chicken dish, so the curry is first within budget
    assert_eq!(plan.recipe.id, 1002);
}

#[tokio::test]
async fn test_ingredient_hint_beats_provider_order() {
    let (planner, _) = planner(MockRecipeProvider::sample());
    let profile = DietaryProfile::default().with_ingredient_hints(["Salmon"]);

    let plan = planner.plan(&profile, &PlanRequest::default()).await.unwrap();
    assert_eq!(plan.recipe.title, "Salmon Rice Bowl");
}

#[tokio::test]
async fn test_time_budget_falls_back_to_fastest() {
    let (planner, _) = planner(MockRecipeProvider::new(vec![
        CandidateRecipe::new(1, "Braise", 180, 4),
        CandidateRecipe::new(2, "Roast", 90, 4),
        CandidateRecipe::new(3, "Stew", 120, 4),
    ]));
    let profile = DietaryProfile::default().with_max_cook_minutes(15);

    let plan = planner.plan(&profile, &PlanRequest::default()).await.unwrap();
    assert_eq!(plan.recipe.id, 2);
}

#[tokio::test]
async fn test_empty_result_is_no_candidates() {
    let (planner, _) = planner(MockRecipeProvider::new(Vec::new()));

    let err = planner
        .plan(&DietaryProfile::default(), &PlanRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoCandidates);
    assert_eq!(
        err.code.user_message(),
        "No recipes found. Try adjusting your preferences."
    );
}

#[tokio::test]
async fn test_provider_errors_collapse_to_provider_failure() {
    for failure in [MockFailure::Http, MockFailure::Status(500), MockFailure::Timeout] {
        let (planner, _) = planner(MockRecipeProvider::failing(failure));
        let err = planner
            .plan(&DietaryProfile::default(), &PlanRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProviderFailure, "{failure:?}");
        assert!(err.code.is_transient());
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_provider_hits_the_deadline() {
    let provider =
        Arc::new(MockRecipeProvider::new(vec![rice_bowl()]).with_delay(Duration::from_secs(60)));
    let planner = MealPlanner::new(provider, Duration::from_secs(2));

    let err = planner
        .plan(&DietaryProfile::default(), &PlanRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ProviderFailure);
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_resolves_as_cancelled() {
    let (planner, provider) = planner(
        MockRecipeProvider::new(vec![rice_bowl()]).with_delay(Duration::from_secs(3)),
    );
    let cancellation = PlanCancellation::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        sleep(Duration::from_secs(1)).await;
        trigger.cancel();
    });

    let err = planner
        .plan_cancellable(&DietaryProfile::default(), &PlanRequest::default(), &cancellation)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Cancelled);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_cancel_before_start_never_completes_a_plan() {
    let (planner, _) = planner(MockRecipeProvider::new(vec![rice_bowl()]));
    let cancellation = PlanCancellation::new();
    cancellation.cancel();

    let err = planner
        .plan_cancellable(&DietaryProfile::default(), &PlanRequest::default(), &cancellation)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Cancelled);
}

#[tokio::test]
async fn test_uncancelled_plan_completes() {
    let (planner, _) = planner(MockRecipeProvider::new(vec![rice_bowl()]));

    let plan = planner
        .plan_cancellable(
            &DietaryProfile::default(),
            &PlanRequest::default(),
            &PlanCancellation::new(),
        )
        .await
        .unwrap();
    assert_eq!(plan.recipe.id, 7);
}

#[tokio::test]
async fn test_plan_week_returns_one_plan_per_slot() {
    let (planner, provider) = planner(MockRecipeProvider::sample());
    let slots = [MealType::Breakfast, MealType::MainCourse, MealType::Salad];

    let request = PlanRequest {
        query: Some("garlic".to_owned()),
        ..PlanRequest::default()
    };

    let plans = planner
        .plan_week(
            &DietaryProfile::default(),
            &slots,
            &request,
            &PlanCancellation::new(),
        )
        .await
        .unwrap();

    assert_eq!(plans.len(), 3);
    assert_eq!(provider.calls(), 3);
    let last = provider.last_query().await.unwrap();
    assert_eq!(last.meal_type, Some(MealType::Salad));
    assert_eq!(last.query.as_deref(), Some("garlic"));
}

#[tokio::test]
async fn test_plan_week_is_all_or_nothing() {
    let (planner, provider) = planner(MockRecipeProvider::new(Vec::new()));

    let err = planner
        .plan_week(
            &DietaryProfile::default(),
            &[MealType::Breakfast, MealType::MainCourse],
            &PlanRequest::default(),
            &PlanCancellation::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NoCandidates);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_plan_week_stops_when_cancelled_mid_week() {
    let (planner, provider) = planner(
        MockRecipeProvider::new(vec![rice_bowl()]).with_delay(Duration::from_secs(2)),
    );
    let cancellation = PlanCancellation::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        sleep(Duration::from_secs(3)).await;
        trigger.cancel();
    });

    let err = planner
        .plan_week(
            &DietaryProfile::default(),
            &[MealType::Breakfast, MealType::MainCourse, MealType::Dessert],
            &PlanRequest::default(),
            &cancellation,
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Cancelled);
    assert_eq!(provider.calls(), 2);
}
