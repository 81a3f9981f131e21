// ABOUTME: Core data models for recipes, shopping list items, and favorites
// ABOUTME: Recipe is an opaque provider payload; list items are session-owned records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Domain models shared by the recipe client, the session store, and the handlers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recipe payload returned by the provider
///
/// The provider's fields (`title`, `image`, `usedIngredients`, ...) pass through untouched.
/// Only `id` is ever read by this service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Map<String, Value>);

impl Recipe {
    /// Wrap a decoded JSON object
    #[must_use]
    pub const fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Provider recipe id, if present and integral
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// Look up a provider field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Underlying field map
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Recipe {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Entry in a session's shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Unique within the owning session
    pub id: u64,
    /// Item name, never empty
    pub name: String,
    /// Free-form quantity, possibly empty
    pub quantity: String,
    /// Ticked off the list
    #[serde(default)]
    pub checked: bool,
}

/// Recipe saved to a session's favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Provider recipe id, unique within the owning session
    pub id: i64,
    /// Recipe title at the time it was saved
    pub title: String,
    /// Recipe image URL at the time it was saved
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_passes_fields_through() {
        let raw = json!({"id": 42, "title": "Soup", "usedIngredientCount": 2});
        let recipe: Recipe = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(recipe.id(), Some(42));
        assert_eq!(recipe.get("title"), Some(&json!("Soup")));
        assert_eq!(serde_json::to_value(&recipe).unwrap(), raw);
    }

    #[test]
    fn test_recipe_without_integer_id() {
        let recipe: Recipe = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(recipe.id(), None);
    }

    #[test]
    fn test_shopping_item_checked_defaults_to_false() {
        let item: ShoppingListItem =
            serde_json::from_value(json!({"id": 0, "name": "Eggs", "quantity": "12"})).unwrap();
        assert!(!item.checked);
    }
}
