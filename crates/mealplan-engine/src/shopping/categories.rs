// ABOUTME: Grocery category assignment for shopping list rows by ingredient keyword
// ABOUTME: Ordered keyword table; the first matching section wins, otherwise Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::models::IngredientCategory;

/// Keyword table checked in order. More specific sections come first so that
/// "frozen peas" lands in Frozen and "garlic powder" in Spices.
const CATEGORY_KEYWORDS: &[(IngredientCategory, &[&str])] = &[
    (IngredientCategory::Frozen, &["frozen", "ice cream"]),
    (
        IngredientCategory::Spices,
        &[
            "powder", "paprika", "cumin", "cinnamon", "oregano", "thyme", "pepper flakes",
            "nutmeg", "turmeric", "bay leaf", "chili flakes", "seasoning", "salt",
            "black pepper", "dried",
        ],
    ),
    (
        IngredientCategory::Seafood,
        &[
            "salmon", "tuna", "shrimp", "prawn", "cod", "fish", "crab", "lobster", "scallop",
            "mussel", "clam", "anchov", "sardine", "tilapia",
        ],
    ),
    (
        IngredientCategory::Meat,
        &[
            "chicken", "beef", "pork", "turkey", "lamb", "bacon", "sausage", "ham", "steak",
            "mince", "prosciutto", "chorizo",
        ],
    ),
    (
        IngredientCategory::Dairy,
        &[
            "milk", "cheese", "butter", "yogurt", "yoghurt", "cream", "egg", "parmesan",
            "mozzarella", "feta", "ricotta",
        ],
    ),
    (
        IngredientCategory::Bakery,
        &["bread", "bun", "tortilla", "pita", "baguette", "croissant", "naan", "roll"],
    ),
    (
        IngredientCategory::Beverages,
        &["juice", "coffee", "tea", "wine", "beer", "soda", "sparkling water"],
    ),
    (
        IngredientCategory::Produce,
        &[
            "onion", "garlic", "tomato", "potato", "carrot", "lettuce", "spinach", "kale",
            "pepper", "cucumber", "zucchini", "broccoli", "cauliflower", "mushroom", "lemon",
            "lime", "apple", "banana", "berr", "avocado", "ginger", "cilantro", "parsley",
            "basil", "scallion", "celery", "cabbage", "squash", "corn", "pea",
        ],
    ),
    (
        IngredientCategory::Pantry,
        &[
            "rice", "pasta", "flour", "sugar", "oil", "vinegar", "sauce", "stock", "broth",
            "bean", "lentil", "chickpea", "oat", "quinoa", "honey", "syrup", "canned", "noodle",
            "nut", "seed", "baking", "yeast", "cornstarch",
        ],
    ),
];

/// Assign a grocery section to an ingredient name
#[must_use]
pub fn categorize(name: &str) -> IngredientCategory {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return IngredientCategory::Other;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map_or(IngredientCategory::Other, |(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ingredients() {
        assert_eq!(categorize("Red Onion"), IngredientCategory::Produce);
        assert_eq!(categorize("chicken thighs"), IngredientCategory::Meat);
        assert_eq!(categorize("Eggs"), IngredientCategory::Dairy);
        assert_eq!(categorize("basmati rice"), IngredientCategory::Pantry);
        assert_eq!(categorize("salmon fillet"), IngredientCategory::Seafood);
    }

    #[test]
    fn test_specific_sections_take_precedence() {
        assert_eq!(categorize("frozen peas"), IngredientCategory::Frozen);
        assert_eq!(categorize("garlic powder"), IngredientCategory::Spices);
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(categorize("xanthan gum"), IngredientCategory::Other);
        assert_eq!(categorize("   "), IngredientCategory::Other);
    }
}
