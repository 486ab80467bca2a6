// ABOUTME: Serving scaler rescaling ingredient amounts and quantity text to a target serving count
// ABOUTME: Pure function over an immutable candidate recipe producing new scaled ingredient lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// First-numeric-token tokenizer and quantity formatting
pub mod quantity;

pub use quantity::{first_numeric_token, format_quantity, rewrite_first_quantity, NumericToken};

use mealplan_core::models::{CandidateRecipe, RawIngredient, ScaledIngredient, ServingCount};

/// Multiplier applied to every ingredient amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingRatio(f64);

impl ServingRatio {
    /// Ratio of target servings to the recipe's native servings
    ///
    /// A native count of zero is treated as one.
    #[must_use]
    pub fn new(target: ServingCount, base_servings: u32) -> Self {
        Self(f64::from(target.get()) / f64::from(base_servings.max(1)))
    }

    /// Ratio for a recipe
    #[must_use]
    pub fn for_recipe(recipe: &CandidateRecipe, target: ServingCount) -> Self {
        Self::new(target, recipe.base_servings())
    }

    /// Raw multiplier
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether scaling leaves amounts unchanged
    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.0 - 1.0).abs() < f64::EPSILON
    }

    /// Scale one ingredient line
    #[must_use]
    pub fn apply(self, ingredient: &RawIngredient) -> ScaledIngredient {
        let amount = ingredient.amount * self.0;
        ScaledIngredient {
            id: ingredient.id,
            name: ingredient.name.clone(),
            amount,
            unit: ingredient.unit.clone(),
            original: rewrite_first_quantity(&ingredient.original, amount),
        }
    }
}

/// Scale a recipe's ingredient list to `target` servings.
///
/// The ratio is `target / max(1, recipe.servings)`. Each line's `amount` is
/// multiplied by it, and the first numeric token of `original` is replaced by
/// the scaled amount rendered with two decimals (`.00` trimmed). Lines whose
/// text has no number keep their text as-is. The recipe is not modified.
#[must_use]
pub fn scale(recipe: &CandidateRecipe, target: ServingCount) -> Vec<ScaledIngredient> {
    let ratio = ServingRatio::for_recipe(recipe, target);
    recipe.ingredients.iter().map(|i| ratio.apply(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servings(n: u32) -> ServingCount {
        ServingCount::try_from(n).unwrap()
    }

    fn rice_recipe() -> CandidateRecipe {
        CandidateRecipe::new(7, "Rice Pilaf", 30, 2)
            .with_ingredient(RawIngredient::new(1, "rice", 2.0, "cups", "2 cups rice"))
            .with_ingredient(RawIngredient::new(2, "salt", 0.0, "", "salt to taste"))
            .with_ingredient(RawIngredient::new(3, "butter", 1.5, "tbsp", "1.5 tbsp butter"))
    }

    #[test]
    fn test_doubles_rice() {
        let scaled = scale(&rice_recipe(), servings(4));
        assert!((scaled[0].amount - 4.0).abs() < f64::EPSILON);
        assert_eq!(scaled[0].original, "4 cups rice");
        assert_eq!(scaled[0].unit, "cups");
        assert_eq!(scaled[2].original, "3 tbsp butter");
    }

    #[test]
    fn test_text_without_number_passes_through() {
        let scaled = scale(&rice_recipe(), servings(6));
        assert_eq!(scaled[1].original, "salt to taste");
    }

    #[test]
    fn test_zero_native_servings_counts_as_one() {
        let mut recipe = rice_recipe();
        recipe.servings = 0;
        let ratio = ServingRatio::for_recipe(&recipe, servings(3));
        assert!((ratio.value() - 3.0).abs() < f64::EPSILON);
        assert_eq!(scale(&recipe, servings(3))[0].original, "6 cups rice");
    }

    #[test]
    fn test_input_recipe_untouched() {
        let recipe = rice_recipe();
        let before = recipe.clone();
        let _ = scale(&recipe, servings(5));
        assert_eq!(recipe, before);
    }

    #[test]
    fn test_fractional_ratio_renders_two_decimals() {
        let recipe = CandidateRecipe::new(8, "Soup", 40, 3)
            .with_ingredient(RawIngredient::new(1, "stock", 1.0, "l", "1 l stock"));
        let scaled = scale(&recipe, servings(2));
        assert_eq!(scaled[0].original, "0.67 l stock");
    }

    #[test]
    fn test_eighth_of_a_cup_rounds_up() {
        let recipe = CandidateRecipe::new(9, "Sugar Syrup", 10, 8)
            .with_ingredient(RawIngredient::new(1, "sugar", 1.0, "cup", "1 cup sugar"));
        let scaled = scale(&recipe, servings(1));
        assert!((scaled[0].amount - 0.125).abs() < f64::EPSILON);
        assert_eq!(scaled[0].original, "0.13 cup sugar");
    }
}
