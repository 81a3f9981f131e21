// ABOUTME: External API client modules (Spoonacular recipe search)
// ABOUTME: Defines the RecipeProvider seam used by the route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! External API Clients
//!
//! Handlers never talk to `reqwest` directly: they hold an `Arc<dyn RecipeProvider>`,
//! which is a [`SpoonacularClient`] in production and a [`MockRecipeProvider`] in tests.

pub mod spoonacular_client;

pub use spoonacular_client::{MockRecipeProvider, SpoonacularClient};

use crate::constants::recipe_api;
use crate::errors::ApiError;
use crate::models::Recipe;
use async_trait::async_trait;

/// Parameters of a find-by-ingredients search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSearch {
    /// Ingredients in the order the user gave them
    pub ingredients: Vec<String>,
    /// Maximum number of recipes to return
    pub count: u32,
    /// 1 maximizes used ingredients, 2 minimizes missing ingredients
    pub ranking: u8,
    /// Ignore typical pantry items (water, salt, flour)
    pub ignore_pantry: bool,
}

impl IngredientSearch {
    /// Search with provider defaults (10 results, ranking 1, pantry ignored)
    #[must_use]
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients,
            count: recipe_api::DEFAULT_SEARCH_COUNT,
            ranking: recipe_api::DEFAULT_RANKING,
            ignore_pantry: true,
        }
    }

    /// Override the result count
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Comma-joined ingredient query; an empty list yields an empty string
    #[must_use]
    pub fn query_string(&self) -> String {
        self.ingredients.join(",")
    }
}

/// Source of recipe data
///
/// Every call is a single attempt; nothing is cached or retried.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Find recipes using the given ingredients
    ///
    /// The ingredient list is not validated here; an empty list is sent as an empty query.
    ///
    /// # Errors
    ///
    /// `ApiError::Unconfigured` without a usable key (no request is made),
    /// `ApiError::Transport` on network failure, timeout, non-2xx status, or bad JSON.
    async fn search_by_ingredients(&self, search: &IngredientSearch)
        -> Result<Vec<Recipe>, ApiError>;

    /// Fetch full information for one recipe
    ///
    /// # Errors
    ///
    /// Same conditions as [`RecipeProvider::search_by_ingredients`].
    async fn get_recipe_information(&self, recipe_id: i64) -> Result<Recipe, ApiError>;

    /// Best-effort inspiration list; every failure degrades to an empty list
    async fn get_random_recipes(&self, count: u32) -> Vec<Recipe>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_search_defaults() {
        let search = IngredientSearch::new(vec!["egg".into(), "rice".into()]);
        assert_eq!(search.count, 10);
        assert_eq!(search.ranking, 1);
        assert!(search.ignore_pantry);
        assert_eq!(search.query_string(), "egg,rice");
    }

    #[test]
    fn test_empty_search_has_empty_query() {
        assert_eq!(IngredientSearch::new(Vec::new()).query_string(), "");
    }
}
