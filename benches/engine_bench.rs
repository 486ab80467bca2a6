// ABOUTME: Criterion benchmarks for the meal-plan engine hot paths
// ABOUTME: Measures ingredient scaling with quantity rewriting and shopping list merges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal-plan engine.
//!
//! Scaling rewrites one quantity per ingredient line; merging is a linear
//! identity lookup per entry, so both are measured across list sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealplan::engine::{merge_many, scale, ShoppingList};
use mealplan::models::{CandidateRecipe, RawIngredient, ServingCount, ShoppingListEntry};

const UNITS: [&str; 5] = ["cups", "tbsp", "g", "ml", ""];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn recipe_with(lines: usize) -> CandidateRecipe {
    let ingredients = (0..lines)
        .map(|index| {
            let unit = UNITS[index % UNITS.len()];
            let amount = 0.25 + (index % 7) as f64;
            RawIngredient::new(
                index as i64,
                format!("ingredient {index}"),
                amount,
                unit,
                format!("{amount} {unit} ingredient {index}, chopped"),
            )
        })
        .collect();
    CandidateRecipe::new(1, "Benchmark Stew", 45, 4).with_ingredients(ingredients)
}

#[allow(clippy::cast_precision_loss)]
fn entries(count: usize, distinct: usize) -> Vec<ShoppingListEntry> {
    (0..count)
        .map(|index| {
            let key = index % distinct;
            ShoppingListEntry::new(format!("Item {key}"))
                .with_quantity(1.0 + (index % 3) as f64, UNITS[key % UNITS.len()])
                .with_recipe((index / 10).to_string(), "Benchmark Stew")
        })
        .collect()
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    let servings = ServingCount::try_from(6_u32).unwrap_or_default();

    for lines in [8_usize, 32, 128] {
        let recipe = recipe_with(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &recipe, |b, recipe| {
            b.iter(|| scale(black_box(recipe), servings));
        });
    }

    group.finish();
}

fn bench_merging(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_many");

    for (count, distinct) in [(50_usize, 25_usize), (500, 100), (2000, 400)] {
        let batch = entries(count, distinct);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", format!("{count}x{distinct}")),
            &batch,
            |b, batch| {
                b.iter(|| merge_many(ShoppingList::new(), black_box(batch.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scaling, bench_merging);
criterion_main!(benches);
