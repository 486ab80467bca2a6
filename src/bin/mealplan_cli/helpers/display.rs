// ABOUTME: Output formatting helpers for mealplan-cli
// ABOUTME: Renders meal plans, merge summaries and the grouped shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan::engine::{MergeSummary, ShoppingList};
use mealplan::models::{MealPlan, ShoppingListItem};

/// Display one plan with its scaled ingredient lines
pub fn display_plan(plan: &MealPlan) {
    let recipe = &plan.recipe;
    println!("\n{}", recipe.title);
    println!("{}", "=".repeat(60));
    println!("   Recipe ID: {}", recipe.id);
    println!("   Ready in: {} min", recipe.ready_in_minutes);
    println!(
        "   Servings: {} (recipe makes {})",
        plan.servings,
        recipe.base_servings()
    );
    if let Some(score) = recipe.health_score {
        println!("   Health score: {score:.0}");
    }
    if let Some(url) = &recipe.source_url {
        println!("   Source: {url}");
    }

    println!("\nIngredients:");
    for ingredient in &plan.ingredients {
        if ingredient.original.is_empty() {
            println!("  - {}", ingredient.name);
        } else {
            println!("  - {}", ingredient.original);
        }
    }
}

/// Display what a merge did to the shopping list
pub fn display_merge_summary(title: &str, summary: MergeSummary) {
    println!(
        "\nAdded '{title}' to the shopping list: {} new, {} combined",
        summary.inserted, summary.accumulated
    );
}

fn quantity(item: &ShoppingListItem) -> String {
    match (item.amount, item.unit.as_deref()) {
        (Some(amount), Some(unit)) => format!("{amount:.2} {unit}"),
        (Some(amount), None) => format!("{amount:.2}"),
        (None, Some(unit)) => unit.to_owned(),
        (None, None) => String::new(),
    }
}

/// Display the shopping list grouped by grocery section
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty");
        return;
    }

    for (category, items) in list.grouped_by_category() {
        println!("\n{}", category.as_str());
        println!("{}", "-".repeat(40));
        for item in items {
            let mark = if item.checked { "x" } else { " " };
            println!("  [{mark}] {} {}  ({})", item.name, quantity(item), item.id);
            if let Some(recipe) = &item.recipe_name {
                println!("        from {recipe}");
            }
        }
    }
    println!(
        "\n{} item(s), {} still to buy",
        list.len(),
        list.unchecked_count()
    );
}
