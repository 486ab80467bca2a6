// ABOUTME: Constraint mapping from a dietary profile to recipe-provider query parameters
// ABOUTME: Unknown labels degrade by omission; empty values are never emitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::constants::QUERY_LIST_SEPARATOR;
use mealplan_core::models::{AllergyLabel, DietLabel, DietaryProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Provider query parameters compiled from a profile
///
/// Every field is optional; a `None` field is left out of the request
/// entirely rather than sent as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Provider diet code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Comma-separated provider intolerance codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intolerances: Option<String>,
    /// Comma-separated ingredient names to exclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_ingredients: Option<String>,
    /// Maximum ready time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ready_time: Option<u32>,
    /// Comma-separated ingredient hints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ingredients: Option<String>,
}

impl QueryParams {
    /// Flatten into `(name, value)` pairs using the provider's parameter names
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(diet) = &self.diet {
            pairs.push(("diet", diet.clone()));
        }
        if let Some(intolerances) = &self.intolerances {
            pairs.push(("intolerances", intolerances.clone()));
        }
        if let Some(exclude) = &self.exclude_ingredients {
            pairs.push(("excludeIngredients", exclude.clone()));
        }
        if let Some(minutes) = self.max_ready_time {
            pairs.push(("maxReadyTime", minutes.to_string()));
        }
        if let Some(include) = &self.include_ingredients {
            pairs.push(("includeIngredients", include.clone()));
        }
        pairs
    }
}

/// Join values with the provider separator, returning `None` for an empty list
fn join_non_empty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(QUERY_LIST_SEPARATOR))
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_owned());
    }
}

/// First diet label with a provider code, in priority order
#[must_use]
pub fn map_diet(labels: &[String]) -> Option<&'static str> {
    labels.iter().find_map(|raw| {
        let code = DietLabel::parse(raw).and_then(|label| label.provider_code());
        if code.is_none() {
            debug!(label = %raw, "diet label has no provider code, skipping");
        }
        code
    })
}

/// Compile a dietary profile into provider query parameters.
///
/// This never fails. Labels that are unknown or have no provider code are
/// dropped, and any list that ends up empty is omitted.
#[must_use]
pub fn to_query_params(profile: &DietaryProfile) -> QueryParams {
    let mut intolerances = Vec::new();
    let mut derived_exclusions = Vec::new();

    for raw in &profile.allergies {
        let Some(label) = AllergyLabel::parse(raw) else {
            debug!(allergy = %raw, "allergy label not recognised, skipping");
            continue;
        };
        if let Some(code) = label.provider_code() {
            push_unique(&mut intolerances, code);
        }
        if let Some(ingredient) = label.excluded_ingredient() {
            push_unique(&mut derived_exclusions, ingredient);
        }
    }

    let mut exclusions: Vec<String> = profile.excluded_ingredients.iter().cloned().collect();
    for ingredient in &derived_exclusions {
        push_unique(&mut exclusions, ingredient);
    }

    let hints: Vec<String> = profile.desired_ingredient_hints.iter().cloned().collect();

    QueryParams {
        diet: map_diet(&profile.diet_labels).map(str::to_owned),
        intolerances: join_non_empty(&intolerances),
        exclude_ingredients: join_non_empty(&exclusions),
        max_ready_time: profile.max_cook_minutes,
        include_ingredients: join_non_empty(&hints),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_first_mappable_diet_wins() {
        let profile = DietaryProfile {
            diet_labels: vec![
                "Balanced".to_owned(),
                "Something Else".to_owned(),
                "Vegan".to_owned(),
                "Paleo".to_owned(),
            ],
            ..DietaryProfile::default()
        };
        assert_eq!(to_query_params(&profile).diet.as_deref(), Some("vegan"));
    }

    #[test]
    fn test_unmapped_intolerances_are_omitted_not_empty() {
        let profile = DietaryProfile {
            allergies: set(&["Nightshades", "Mustard"]),
            ..DietaryProfile::default()
        };
        let params = to_query_params(&profile);
        assert_eq!(params.intolerances, None);
        assert!(!params.to_pairs().iter().any(|(k, _)| *k == "intolerances"));
    }

    #[test]
    fn test_chicken_allergy_is_excluded_by_name_too() {
        let profile = DietaryProfile {
            allergies: set(&["Chicken", "Dairy"]),
            ..DietaryProfile::default()
        };
        let params = to_query_params(&profile);

        let intolerances = params.intolerances.unwrap();
        assert!(intolerances.split(',').any(|c| c == "chicken"));
        assert!(intolerances.split(',').any(|c| c == "dairy"));
        assert_eq!(params.exclude_ingredients.as_deref(), Some("chicken"));
    }

    #[test]
    fn test_derived_exclusion_not_duplicated() {
        let profile = DietaryProfile {
            allergies: set(&["Chicken", "chicken"]),
            excluded_ingredients: set(&["chicken", "olives"]),
            ..DietaryProfile::default()
        };
        let params = to_query_params(&profile);
        assert_eq!(params.exclude_ingredients.as_deref(), Some("chicken,olives"));
        assert_eq!(params.intolerances.as_deref(), Some("chicken"));
    }

    #[test]
    fn test_time_passes_through_and_is_never_invented() {
        let unconstrained = to_query_params(&DietaryProfile::default());
        assert_eq!(unconstrained.max_ready_time, None);
        assert!(unconstrained.to_pairs().is_empty());

        let bounded = to_query_params(&DietaryProfile::default().with_max_cook_minutes(25));
        assert_eq!(bounded.max_ready_time, Some(25));
    }

    #[test]
    fn test_hints_become_include_ingredients() {
        let profile = DietaryProfile::default().with_ingredient_hints(["salmon", "lemon"]);
        assert_eq!(
            to_query_params(&profile).include_ingredients.as_deref(),
            Some("lemon,salmon")
        );
    }
}
