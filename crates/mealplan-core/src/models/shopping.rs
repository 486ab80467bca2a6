// ABOUTME: Shopping list item models with merge identity and grocery categories
// ABOUTME: Items are keyed by lower-cased name plus unit, never by their id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::recipe::{CandidateRecipe, ScaledIngredient};

/// Merge identity of a shopping list row: `(name.to_lowercase(), unit)`
///
/// The same ingredient in two different units stays two rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIdentity {
    /// Lower-cased ingredient name
    pub name: String,
    /// Unit exactly as supplied
    pub unit: Option<String>,
}

impl ItemIdentity {
    /// Build the identity for a name/unit pair
    #[must_use]
    pub fn new(name: &str, unit: Option<&str>) -> Self {
        Self {
            name: name.to_lowercase(),
            unit: unit.map(str::to_owned),
        }
    }
}

impl fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} ({unit})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Grocery store section used to group the shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Fresh fruit, vegetables, herbs
    Produce,
    /// Milk, cheese, eggs, butter
    Dairy,
    /// Meat and poultry
    Meat,
    /// Fish and shellfish
    Seafood,
    /// Bread and baked goods
    Bakery,
    /// Dry goods, canned goods, oils
    Pantry,
    /// Frozen food
    Frozen,
    /// Dried herbs, spices, seasonings
    Spices,
    /// Drinks
    Beverages,
    /// Anything not recognised
    #[default]
    Other,
}

impl IngredientCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Bakery => "Bakery",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Spices => "Spices",
            Self::Beverages => "Beverages",
            Self::Other => "Other",
        }
    }
}

/// Persistent shopping list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Row identifier, stable across merges
    pub id: Uuid,
    /// Ingredient name as first inserted
    pub name: String,
    /// Accumulated amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit; part of the merge identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Recipe that last contributed to this row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    /// Title of the recipe that last contributed to this row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    /// Whether the user ticked this row off
    #[serde(default)]
    pub checked: bool,
    /// Original ingredient line from the last contributing recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Grocery section
    #[serde(default)]
    pub category: IngredientCategory,
    /// When the row was first created
    pub added_at: DateTime<Utc>,
}

impl ShoppingListItem {
    /// Merge identity of this row
    #[must_use]
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity::new(&self.name, self.unit.as_deref())
    }
}

/// Incoming item offered to the shopping list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntry {
    /// Ingredient name
    pub name: String,
    /// Amount to add; missing counts as zero
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Contributing recipe id
    #[serde(default)]
    pub recipe_id: Option<String>,
    /// Contributing recipe title
    #[serde(default)]
    pub recipe_name: Option<String>,
    /// Original ingredient line
    #[serde(default)]
    pub original: Option<String>,
}

impl ShoppingListEntry {
    /// Create an entry with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the amount and unit
    #[must_use]
    pub fn with_quantity(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.amount = Some(amount);
        self.unit = Some(unit.into());
        self
    }

    /// Set the contributing recipe
    #[must_use]
    pub fn with_recipe(mut self, recipe_id: impl Into<String>, recipe_name: impl Into<String>) -> Self {
        self.recipe_id = Some(recipe_id.into());
        self.recipe_name = Some(recipe_name.into());
        self
    }

    /// Set the original ingredient line
    #[must_use]
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// Build an entry from a scaled ingredient of a selected recipe
    ///
    /// An empty provider unit becomes `None`.
    #[must_use]
    pub fn from_scaled(ingredient: &ScaledIngredient, recipe: &CandidateRecipe) -> Self {
        let unit = Some(ingredient.unit.trim())
            .filter(|u| !u.is_empty())
            .map(str::to_owned);
        Self {
            name: ingredient.name.clone(),
            amount: Some(ingredient.amount),
            unit,
            recipe_id: Some(recipe.id.to_string()),
            recipe_name: Some(recipe.title.clone()),
            original: Some(ingredient.original.clone()),
        }
    }

    /// Merge identity of this entry
    #[must_use]
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity::new(&self.name, self.unit.as_deref())
    }
}
