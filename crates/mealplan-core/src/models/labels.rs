// ABOUTME: Closed enumerations for diet, allergy, and meal-type labels
// ABOUTME: Each label carries an exhaustive mapping to recipe-provider query codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase a label and drop separators so "Gluten-Free", "gluten free" and
/// "GLUTEN_FREE" compare equal.
fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Diet preference as selected by the user.
///
/// Some preferences are recognised by the app but have no provider
/// equivalent; those map to `None` and are skipped when building a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietLabel {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing grains
    GlutenFree,
    /// Very low carbohydrate, high fat
    Ketogenic,
    /// Paleo-compliant
    Paleo,
    /// Vegetarian plus fish
    Pescetarian,
    /// Paleo allowing some dairy
    Primal,
    /// Vegetarian allowing dairy, no eggs
    LactoVegetarian,
    /// Vegetarian allowing eggs, no dairy
    OvoVegetarian,
    /// Whole30 program
    Whole30,
    /// Low in fermentable carbohydrates
    LowFodmap,
    /// Balanced everyday eating
    Balanced,
    /// User explicitly has no preference
    NoPreference,
    /// Reduced carbohydrate
    LowCarb,
    /// Protein-forward meals
    HighProtein,
    /// Mediterranean style
    Mediterranean,
}

impl DietLabel {
    /// Every label, in declaration order
    pub const ALL: [Self; 16] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::Ketogenic,
        Self::Paleo,
        Self::Pescetarian,
        Self::Primal,
        Self::LactoVegetarian,
        Self::OvoVegetarian,
        Self::Whole30,
        Self::LowFodmap,
        Self::Balanced,
        Self::NoPreference,
        Self::LowCarb,
        Self::HighProtein,
        Self::Mediterranean,
    ];

    /// Parse a free-text label as stored by a preference source
    ///
    /// Matching ignores case, spaces, hyphens, and underscores. Returns `None`
    /// for text that is not a known diet.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = normalize_label(raw);
        let label = match key.as_str() {
            "vegetarian" => Self::Vegetarian,
            "vegan" | "plantbased" => Self::Vegan,
            "glutenfree" => Self::GlutenFree,
            "keto" | "ketogenic" => Self::Ketogenic,
            "paleo" | "paleolithic" => Self::Paleo,
            "pescetarian" | "pescatarian" => Self::Pescetarian,
            "primal" => Self::Primal,
            "lactovegetarian" => Self::LactoVegetarian,
            "ovovegetarian" => Self::OvoVegetarian,
            "whole30" => Self::Whole30,
            "lowfodmap" | "fodmap" => Self::LowFodmap,
            "balanced" => Self::Balanced,
            "nopreference" | "none" | "anything" => Self::NoPreference,
            "lowcarb" => Self::LowCarb,
            "highprotein" => Self::HighProtein,
            "mediterranean" => Self::Mediterranean,
            _ => return None,
        };
        Some(label)
    }

    /// Provider `diet` code for this label, if the provider supports it
    #[must_use]
    pub const fn provider_code(&self) -> Option<&'static str> {
        match self {
            Self::Vegetarian => Some("vegetarian"),
            Self::Vegan => Some("vegan"),
            Self::GlutenFree => Some("gluten free"),
            Self::Ketogenic => Some("ketogenic"),
            Self::Paleo => Some("paleo"),
            Self::Pescetarian => Some("pescetarian"),
            Self::Primal => Some("primal"),
            Self::LactoVegetarian => Some("lacto-vegetarian"),
            Self::OvoVegetarian => Some("ovo-vegetarian"),
            Self::Whole30 => Some("whole30"),
            Self::LowFodmap => Some("low fodmap"),
            Self::Balanced
            | Self::NoPreference
            | Self::LowCarb
            | Self::HighProtein
            | Self::Mediterranean => None,
        }
    }

    /// Human-readable name for display
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten Free",
            Self::Ketogenic => "Ketogenic",
            Self::Paleo => "Paleo",
            Self::Pescetarian => "Pescetarian",
            Self::Primal => "Primal",
            Self::LactoVegetarian => "Lacto-Vegetarian",
            Self::OvoVegetarian => "Ovo-Vegetarian",
            Self::Whole30 => "Whole30",
            Self::LowFodmap => "Low FODMAP",
            Self::Balanced => "Balanced",
            Self::NoPreference => "No Preference",
            Self::LowCarb => "Low Carb",
            Self::HighProtein => "High Protein",
            Self::Mediterranean => "Mediterranean",
        }
    }
}

impl fmt::Display for DietLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Allergy or intolerance as recorded by a preference source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergyLabel {
    /// Milk and milk products
    Dairy,
    /// Eggs
    Egg,
    /// Gluten
    Gluten,
    /// All cereal grains
    Grain,
    /// Peanuts
    Peanut,
    /// Fish and other seafood
    Seafood,
    /// Sesame
    Sesame,
    /// Crustaceans and molluscs
    Shellfish,
    /// Soy
    Soy,
    /// Sulfites
    Sulfite,
    /// Tree nuts
    TreeNut,
    /// Wheat
    Wheat,
    /// Chicken meat
    Chicken,
    /// Turkey meat
    Turkey,
}

impl AllergyLabel {
    /// Parse a free-text allergy label, ignoring case and separators
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = normalize_label(raw);
        let label = match key.as_str() {
            "dairy" | "milk" | "lactose" => Self::Dairy,
            "egg" | "eggs" => Self::Egg,
            "gluten" => Self::Gluten,
            "grain" | "grains" => Self::Grain,
            "peanut" | "peanuts" => Self::Peanut,
            "seafood" | "fish" => Self::Seafood,
            "sesame" => Self::Sesame,
            "shellfish" => Self::Shellfish,
            "soy" | "soya" => Self::Soy,
            "sulfite" | "sulfites" | "sulphite" => Self::Sulfite,
            "treenut" | "treenuts" | "nuts" => Self::TreeNut,
            "wheat" => Self::Wheat,
            "chicken" | "poultry" => Self::Chicken,
            "turkey" => Self::Turkey,
            _ => return None,
        };
        Some(label)
    }

    /// Provider `intolerances` code for this allergy
    #[must_use]
    pub const fn provider_code(&self) -> Option<&'static str> {
        match self {
            Self::Dairy => Some("dairy"),
            Self::Egg => Some("egg"),
            Self::Gluten => Some("gluten"),
            Self::Grain => Some("grain"),
            Self::Peanut => Some("peanut"),
            Self::Seafood => Some("seafood"),
            Self::Sesame => Some("sesame"),
            Self::Shellfish => Some("shellfish"),
            Self::Soy => Some("soy"),
            Self::Sulfite => Some("sulfite"),
            Self::TreeNut => Some("tree nut"),
            Self::Wheat => Some("wheat"),
            Self::Chicken => Some("chicken"),
            Self::Turkey => Some("turkey"),
        }
    }

    /// Literal ingredient name also excluded for named-protein allergies
    ///
    /// The provider does not reliably honour protein intolerance codes, so the
    /// ingredient is excluded by name as well.
    #[must_use]
    pub const fn excluded_ingredient(&self) -> Option<&'static str> {
        match self {
            Self::Chicken => Some("chicken"),
            Self::Turkey => Some("turkey"),
            Self::Dairy
            | Self::Egg
            | Self::Gluten
            | Self::Grain
            | Self::Peanut
            | Self::Seafood
            | Self::Sesame
            | Self::Shellfish
            | Self::Soy
            | Self::Sulfite
            | Self::TreeNut
            | Self::Wheat => None,
        }
    }
}

/// Meal slot a recipe is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Lunch or dinner main
    #[default]
    MainCourse,
    /// Side dish
    SideDish,
    /// Dessert
    Dessert,
    /// Small bite between meals
    Snack,
    /// Soup
    Soup,
    /// Salad
    Salad,
}

impl MealType {
    /// Provider `type` code for this meal slot
    #[must_use]
    pub const fn provider_code(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MainCourse => "main course",
            Self::SideDish => "side dish",
            Self::Dessert => "dessert",
            Self::Snack => "snack",
            Self::Soup => "soup",
            Self::Salad => "salad",
        }
    }

    /// Parse a meal type name, ignoring case and separators
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "breakfast" => Some(Self::Breakfast),
            "main" | "maincourse" | "lunch" | "dinner" => Some(Self::MainCourse),
            "side" | "sidedish" => Some(Self::SideDish),
            "dessert" => Some(Self::Dessert),
            "snack" => Some(Self::Snack),
            "soup" => Some(Self::Soup),
            "salad" => Some(Self::Salad),
            _ => None,
        }
    }
}
