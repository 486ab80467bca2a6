// ABOUTME: Shopping list aggregate merging incoming items by (lower-cased name, unit)
// ABOUTME: Accumulates amounts, keeps row ids and checked state, tracks last contributing recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Keyword-based grocery categories
pub mod categories;

pub use categories::categorize;

use std::collections::BTreeMap;

use chrono::Utc;
use mealplan_core::models::{IngredientCategory, ItemIdentity, ShoppingListEntry, ShoppingListItem};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// What a single merge did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new row was appended
    Inserted(Uuid),
    /// An existing row absorbed the entry
    Accumulated(Uuid),
}

impl MergeOutcome {
    /// Id of the row that was touched
    #[must_use]
    pub const fn id(self) -> Uuid {
        match self {
            Self::Inserted(id) | Self::Accumulated(id) => id,
        }
    }
}

/// Counts from a batch merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Rows appended
    pub inserted: usize,
    /// Rows that absorbed an entry
    pub accumulated: usize,
}

/// Ordered shopping list with at most one row per `(lower(name), unit)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

/// Replace `slot` only when `incoming` is a non-empty string
fn overwrite_if_present(slot: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *slot = Some(value);
    }
}

impl ShoppingList {
    /// Empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a list from stored rows.
    ///
    /// Rows sharing an identity are folded into the first one so the
    /// uniqueness invariant holds even for hand-edited data.
    #[must_use]
    pub fn from_items(items: Vec<ShoppingListItem>) -> Self {
        let mut list = Self::new();
        for item in items {
            match list.position(&item.identity()) {
                Some(index) => {
                    debug!(item = %item.name, "folding duplicate stored shopping list row");
                    let existing = &mut list.items[index];
                    existing.amount =
                        Some(existing.amount.unwrap_or(0.0) + item.amount.unwrap_or(0.0));
                    existing.checked |= item.checked;
                }
                None => list.items.push(item),
            }
        }
        list
    }

    /// Rows in insertion order
    #[must_use]
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    /// Consume the list into its rows
    #[must_use]
    pub fn into_items(self) -> Vec<ShoppingListItem> {
        self.items
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, identity: &ItemIdentity) -> Option<usize> {
        self.items.iter().position(|item| {
            item.unit == identity.unit && item.name.to_lowercase() == identity.name
        })
    }

    /// Find the row with the given merge identity
    #[must_use]
    pub fn find(&self, identity: &ItemIdentity) -> Option<&ShoppingListItem> {
        self.position(identity).map(|index| &self.items[index])
    }

    /// Find a row by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Merge one incoming entry.
    ///
    /// A matching row gets `amount = old.unwrap_or(0) + new.unwrap_or(0)`, and
    /// its recipe id, recipe name and original line are replaced only by
    /// non-empty incoming values. Its id, name casing, `checked` flag and
    /// category stay as they were. Otherwise a new unchecked row is appended
    /// with a fresh id.
    pub fn merge_one(&mut self, entry: ShoppingListEntry) -> MergeOutcome {
        if let Some(index) = self.position(&entry.identity()) {
            let existing = &mut self.items[index];
            existing.amount = Some(existing.amount.unwrap_or(0.0) + entry.amount.unwrap_or(0.0));
            overwrite_if_present(&mut existing.recipe_id, entry.recipe_id);
            overwrite_if_present(&mut existing.recipe_name, entry.recipe_name);
            overwrite_if_present(&mut existing.original, entry.original);
            return MergeOutcome::Accumulated(existing.id);
        }

        let id = Uuid::new_v4();
        let category = categorize(&entry.name);
        self.items.push(ShoppingListItem {
            id,
            name: entry.name,
            amount: entry.amount,
            unit: entry.unit,
            recipe_id: entry.recipe_id,
            recipe_name: entry.recipe_name,
            checked: false,
            original: entry.original,
            category,
            added_at: Utc::now(),
        });
        MergeOutcome::Inserted(id)
    }

    /// Merge entries left to right, as if by repeated [`Self::merge_one`]
    pub fn merge_many<I>(&mut self, entries: I) -> MergeSummary
    where
        I: IntoIterator<Item = ShoppingListEntry>,
    {
        let mut summary = MergeSummary::default();
        for entry in entries {
            match self.merge_one(entry) {
                MergeOutcome::Inserted(_) => summary.inserted += 1,
                MergeOutcome::Accumulated(_) => summary.accumulated += 1,
            }
        }
        debug!(
            inserted = summary.inserted,
            accumulated = summary.accumulated,
            total = self.items.len(),
            "merged entries into shopping list"
        );
        summary
    }

    /// Flip the checked flag of a row, returning its new state
    pub fn toggle_checked(&mut self, id: Uuid) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Remove a row by id
    pub fn remove(&mut self, id: Uuid) -> Option<ShoppingListItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every checked row, returning how many were removed
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Drop every row
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Rows still to buy
    #[must_use]
    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    /// Rows grouped by grocery section, insertion order kept within each group
    #[must_use]
    pub fn grouped_by_category(&self) -> BTreeMap<IngredientCategory, Vec<&ShoppingListItem>> {
        let mut groups: BTreeMap<IngredientCategory, Vec<&ShoppingListItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category).or_default().push(item);
        }
        groups
    }
}

impl From<Vec<ShoppingListItem>> for ShoppingList {
    fn from(items: Vec<ShoppingListItem>) -> Self {
        Self::from_items(items)
    }
}

/// Value-returning form of [`ShoppingList::merge_one`]
#[must_use]
pub fn merge_one(mut list: ShoppingList, entry: ShoppingListEntry) -> ShoppingList {
    list.merge_one(entry);
    list
}

/// Value-returning form of [`ShoppingList::merge_many`]
#[must_use]
pub fn merge_many<I>(mut list: ShoppingList, entries: I) -> ShoppingList
where
    I: IntoIterator<Item = ShoppingListEntry>,
{
    list.merge_many(entries);
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eggs(name: &str, amount: f64) -> ShoppingListEntry {
        ShoppingListEntry::new(name).with_quantity(amount, "dozen")
    }

    #[test]
    fn test_same_identity_accumulates() {
        let mut list = ShoppingList::new();
        let first = list.merge_one(eggs("Eggs", 1.0));
        let second = list.merge_one(eggs("eggs", 2.0));

        assert!(matches!(first, MergeOutcome::Inserted(_)));
        assert_eq!(second, MergeOutcome::Accumulated(first.id()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "Eggs");
        assert_eq!(list.items()[0].amount, Some(3.0));
    }

    #[test]
    fn test_different_units_stay_apart() {
        let mut list = ShoppingList::new();
        list.merge_one(eggs("eggs", 1.0));
        list.merge_one(ShoppingListEntry::new("eggs").with_quantity(6.0, "pieces"));
        list.merge_one(ShoppingListEntry::new("eggs"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_missing_amount_counts_as_zero() {
        let mut list = ShoppingList::new();
        list.merge_one(ShoppingListEntry::new("salt"));
        assert_eq!(list.items()[0].amount, None);

        list.merge_one(ShoppingListEntry::new("Salt"));
        assert_eq!(list.items()[0].amount, Some(0.0));
    }

    #[test]
    fn test_checked_survives_merge() {
        let mut list = ShoppingList::new();
        let id = list.merge_one(eggs("eggs", 1.0)).id();
        assert_eq!(list.toggle_checked(id), Some(true));

        list.merge_one(eggs("EGGS", 1.0));
        assert!(list.get(id).unwrap().checked);
        assert_eq!(list.unchecked_count(), 0);
    }

    #[test]
    fn test_provenance_last_non_empty_wins() {
        let mut list = ShoppingList::new();
        list.merge_one(eggs("eggs", 1.0).with_recipe("1", "Omelette"));
        list.merge_one(eggs("eggs", 1.0).with_recipe("2", "Frittata"));
        list.merge_one(eggs("eggs", 1.0).with_recipe("", ""));

        let row = &list.items()[0];
        assert_eq!(row.recipe_id.as_deref(), Some("2"));
        assert_eq!(row.recipe_name.as_deref(), Some("Frittata"));
    }

    #[test]
    fn test_remove_and_clear_checked() {
        let mut list = ShoppingList::new();
        let a = list.merge_one(eggs("eggs", 1.0)).id();
        let b = list.merge_one(ShoppingListEntry::new("milk")).id();
        list.merge_one(ShoppingListEntry::new("bread"));

        list.toggle_checked(b);
        assert_eq!(list.clear_checked(), 1);
        assert!(list.get(b).is_none());

        assert_eq!(list.remove(a).map(|item| item.name), Some("eggs".to_owned()));
        assert!(list.remove(a).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_grouped_by_category() {
        let mut list = ShoppingList::new();
        list.merge_many([
            ShoppingListEntry::new("onion"),
            ShoppingListEntry::new("cheddar cheese"),
            ShoppingListEntry::new("garlic"),
        ]);
        let groups = list.grouped_by_category();
        let produce: Vec<&str> = groups[&IngredientCategory::Produce]
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(produce, vec!["onion", "garlic"]);
        assert_eq!(groups[&IngredientCategory::Dairy].len(), 1);
    }

    #[test]
    fn test_from_items_folds_duplicates() {
        let mut source = ShoppingList::new();
        source.merge_one(eggs("eggs", 1.0));
        let mut rows = source.into_items();
        let mut duplicate = rows[0].clone();
        duplicate.id = Uuid::new_v4();
        duplicate.name = "EGGS".to_owned();
        duplicate.checked = true;
        rows.push(duplicate);

        let list = ShoppingList::from_items(rows);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].amount, Some(2.0));
        assert!(list.items()[0].checked);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut list = ShoppingList::new();
        list.merge_one(eggs("eggs", 1.0));
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());

        let back: ShoppingList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }
}
