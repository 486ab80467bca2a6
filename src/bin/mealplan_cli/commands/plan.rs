// ABOUTME: Plan command for mealplan-cli
// ABOUTME: Builds a dietary profile from flags, runs the planner, and optionally fills the shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use clap::Args;
use mealplan::config::AppConfig;
use mealplan::engine::ProfileSources;
use mealplan::errors::{AppError, AppResult};
use mealplan::models::{DietaryProfile, MealPlan, MealType, ServingCount};
use mealplan::providers::http_client::initialize_shared_client;
use mealplan::providers::{HttpRecipeProvider, MockRecipeProvider, RecipeProvider};
use mealplan::services::{MealPlanner, PlanCancellation, PlanRequest};
use tokio::signal;
use tracing::{info, warn};

use crate::commands::open_shopping_list;
use crate::helpers::display::{display_merge_summary, display_plan};

/// Flags of the `plan` subcommand
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Allergy from the onboarding profile (repeat or comma-separate)
    #[arg(long = "allergy", value_delimiter = ',')]
    allergies: Vec<String>,

    /// Allergy from the settings store (repeat or comma-separate)
    #[arg(long = "settings-allergy", value_delimiter = ',')]
    settings_allergies: Vec<String>,

    /// Explicit diet preference; takes precedence over `--diet-option`
    #[arg(long)]
    diet: Option<String>,

    /// Multi-select diet preferences in priority order
    #[arg(long = "diet-option", value_delimiter = ',')]
    diet_options: Vec<String>,

    /// Ingredient to keep out of the recipe (repeat or comma-separate)
    #[arg(long = "exclude", value_delimiter = ',')]
    excluded: Vec<String>,

    /// Ingredient you would like to see (repeat or comma-separate)
    #[arg(long = "include", value_delimiter = ',')]
    included: Vec<String>,

    /// Preparation time budget in minutes
    #[arg(long)]
    max_minutes: Option<u32>,

    /// Servings to scale to (defaults to `MEALPLAN_DEFAULT_SERVINGS`)
    #[arg(long, allow_negative_numbers = true)]
    servings: Option<i64>,

    /// Meal slot; repeat to plan several slots at once
    #[arg(long = "meal-type")]
    meal_types: Vec<String>,

    /// Free-text search passed to the provider for every meal slot
    #[arg(long)]
    query: Option<String>,

    /// Add the planned ingredients to the shopping list
    #[arg(long)]
    add_to_list: bool,

    /// Use the built-in offline catalogue instead of the recipe API
    #[arg(long)]
    mock: bool,

    /// Print plans as JSON
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn profile(&self, config: &AppConfig) -> AppResult<DietaryProfile> {
        let servings = match self.servings {
            Some(requested) => ServingCount::try_from(requested)?,
            None => config.default_serving_count(),
        };

        let sources = ProfileSources {
            primary_allergies: self.allergies.clone(),
            secondary_allergies: self.settings_allergies.clone(),
            diet_preference: self.diet.clone(),
            diet_preferences: self.diet_options.clone(),
        };
        let mut profile = sources
            .into_profile(servings)
            .with_excluded_ingredients(&self.excluded)
            .with_ingredient_hints(&self.included);
        if let Some(minutes) = self.max_minutes {
            profile = profile.with_max_cook_minutes(minutes);
        }
        Ok(profile)
    }

    fn meal_types(&self) -> AppResult<Vec<MealType>> {
        self.meal_types
            .iter()
            .map(|raw| {
                MealType::parse(raw)
                    .ok_or_else(|| AppError::invalid_input(format!("Unknown meal type '{raw}'")))
            })
            .collect()
    }
}

fn provider(config: &AppConfig, mock: bool) -> AppResult<Arc<dyn RecipeProvider>> {
    if mock {
        info!("using offline recipe catalogue");
        return Ok(Arc::new(MockRecipeProvider::sample()));
    }
    if config.provider.api_key.is_empty() {
        warn!("RECIPE_API_KEY is not set; the recipe API will likely reject the request");
    }
    initialize_shared_client(
        config.provider.timeout_secs,
        config.provider.connect_timeout_secs,
    );
    Ok(Arc::new(HttpRecipeProvider::new(config.provider.clone())?))
}

/// Run the planner and print the result
///
/// Ctrl-C abandons the in-flight plan, or the whole week when several
/// meal types were requested.
pub async fn run(config: &AppConfig, args: PlanArgs) -> AppResult<()> {
    let profile = args.profile(config)?;
    let meal_types = args.meal_types()?;
    let planner = MealPlanner::from_config(provider(config, args.mock)?, config);

    let request = PlanRequest {
        meal_type: meal_types.first().copied(),
        query: args.query.clone(),
        number: None,
    };

    let cancellation = PlanCancellation::new();
    let on_interrupt = cancellation.clone();
    let watcher = tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = if meal_types.len() > 1 {
        planner
            .plan_week(&profile, &meal_types, &request, &cancellation)
            .await
    } else {
        planner
            .plan_cancellable(&profile, &request, &cancellation)
            .await
            .map(|plan| vec![plan])
    };
    watcher.abort();
    let plans: Vec<MealPlan> = result?;

    for plan in &plans {
        if args.json {
            println!("{}", serde_json::to_string_pretty(plan)?);
        } else {
            display_plan(plan);
        }
    }

    if args.add_to_list {
        let list = open_shopping_list(config).await?;
        for plan in &plans {
            let summary = list.add_plan(plan).await?;
            display_merge_summary(&plan.recipe.title, summary);
        }
    }
    Ok(())
}
