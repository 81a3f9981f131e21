// ABOUTME: Spoonacular recipe API client for ingredient search and recipe details
// ABOUTME: Single-attempt requests with a fixed timeout, plus a mock provider for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Spoonacular API Client
//!
//! Thin pass-through client: decoded payloads are returned as-is. The key is checked
//! before every call so an unconfigured deployment never touches the network.
//!
//! # API Reference
//! <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use kitchen_helper::config::RecipeApiConfig;
//! use kitchen_helper::external::{IngredientSearch, RecipeProvider, SpoonacularClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RecipeApiConfig::new(
//!     Some("your_api_key".to_owned()),
//!     "https://api.spoonacular.com/recipes",
//! );
//! let client = SpoonacularClient::new(config);
//! let search = IngredientSearch::new(vec!["egg".to_owned(), "rice".to_owned()]);
//! let recipes = client.search_by_ingredients(&search).await?;
//! # Ok(())
//! # }
//! ```

use super::{IngredientSearch, RecipeProvider};
use crate::config::RecipeApiConfig;
use crate::constants::recipe_api;
use crate::errors::ApiError;
use crate::models::Recipe;
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

const SEARCH_FAILED: &str = "Failed to fetch recipes";
const DETAILS_FAILED: &str = "Failed to fetch recipe details";
const RANDOM_FAILED: &str = "Failed to fetch random recipes";

/// Shapes the `/random` endpoint has been seen to return
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RandomRecipesResponse {
    Many(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
    Single(Recipe),
}

impl RandomRecipesResponse {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::Many(recipes) | Self::Wrapped { recipes } => recipes,
            Self::Single(recipe) => vec![recipe],
        }
    }
}

/// Spoonacular API client
pub struct SpoonacularClient {
    config: RecipeApiConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new client; the HTTP client is built once and reused
    #[must_use]
    pub fn new(config: RecipeApiConfig) -> Self {
        let http_client = create_client_with_timeout(config.timeout());
        Self {
            config,
            http_client,
        }
    }

    /// Usable API key, or `Unconfigured`
    fn api_key(&self) -> Result<&str, ApiError> {
        if !self.config.is_configured() {
            return Err(ApiError::Unconfigured);
        }
        self.config.api_key.as_deref().ok_or(ApiError::Unconfigured)
    }

    /// GET `{base_url}/{path}` and decode the JSON body
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> Result<T, ApiError> {
        let api_key = self.api_key()?;
        let url = format!("{}/{path}", self.config.base_url);

        debug!(service = recipe_api::SERVICE_NAME, %url, "Calling recipe API");

        let response = self
            .http_client
            .get(&url)
            .query(&[("apiKey", api_key)])
            .query(params)
            .timeout(self.config.timeout())
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(service = recipe_api::SERVICE_NAME, error = %e, "{operation}");
                ApiError::transport(operation, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(service = recipe_api::SERVICE_NAME, %status, "{operation}");
            return Err(ApiError::transport(operation, format!("HTTP {status}")));
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            warn!(service = recipe_api::SERVICE_NAME, error = %e, "{operation}");
            ApiError::transport(operation, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search_by_ingredients(
        &self,
        search: &IngredientSearch,
    ) -> Result<Vec<Recipe>, ApiError> {
        let params = [
            ("ingredients", search.query_string()),
            ("number", search.count.to_string()),
            ("ranking", search.ranking.to_string()),
            ("ignorePantry", search.ignore_pantry.to_string()),
        ];

        self.get_json("findByIngredients", &params, SEARCH_FAILED)
            .await
    }

    async fn get_recipe_information(&self, recipe_id: i64) -> Result<Recipe, ApiError> {
        self.get_json(&format!("{recipe_id}/information"), &[], DETAILS_FAILED)
            .await
    }

    async fn get_random_recipes(&self, count: u32) -> Vec<Recipe> {
        let params = [("number", count.to_string())];

        match self
            .get_json::<RandomRecipesResponse>("random", &params, RANDOM_FAILED)
            .await
        {
            Ok(response) => response.into_recipes(),
            Err(e) => {
                warn!(error = %e, "Random recipes unavailable, continuing without inspiration");
                Vec::new()
            }
        }
    }
}

/// Mock recipe provider for testing (no API calls)
///
/// Searches return every canned recipe; details look recipes up by id.
/// [`MockRecipeProvider::failing`] makes every call fail with the given error.
pub struct MockRecipeProvider {
    recipes: Vec<Recipe>,
    failure: Option<ApiError>,
    search_calls: AtomicUsize,
    random_calls: AtomicUsize,
}

impl MockRecipeProvider {
    /// Provider answering with the given recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            failure: None,
            search_calls: AtomicUsize::new(0),
            random_calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose every call fails with `error`
    #[must_use]
    pub const fn failing(error: ApiError) -> Self {
        Self {
            recipes: Vec::new(),
            failure: Some(error),
            search_calls: AtomicUsize::new(0),
            random_calls: AtomicUsize::new(0),
        }
    }

    /// Number of ingredient searches received
    #[must_use]
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of random-recipe requests received
    #[must_use]
    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl Default for MockRecipeProvider {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    async fn search_by_ingredients(
        &self,
        _search: &IngredientSearch,
    ) -> Result<Vec<Recipe>, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.recipes.clone())
    }

    async fn get_recipe_information(&self, recipe_id: i64) -> Result<Recipe, ApiError> {
        self.check_failure()?;
        self.recipes
            .iter()
            .find(|recipe| recipe.id() == Some(recipe_id))
            .cloned()
            .ok_or_else(|| ApiError::transport(DETAILS_FAILED, "HTTP 404 Not Found"))
    }

    async fn get_random_recipes(&self, count: u32) -> Vec<Recipe> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        if self.failure.is_some() {
            return Vec::new();
        }
        self.recipes.iter().take(count as usize).cloned().collect()
    }
}
