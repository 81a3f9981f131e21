// ABOUTME: Home page handler: ingredient search, favorites filter, and random inspiration
// ABOUTME: Accepts ingredients as a JSON array or a comma-separated form field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Home page routes
//!
//! `GET /` shows the session lists plus a few random recipes. `POST /` runs an
//! ingredient search; search failures are reported in `error_message`, never as an
//! error status.

use super::is_json_request;
use crate::constants::{filters, messages, recipe_api};
use crate::errors::AppError;
use crate::external::IngredientSearch;
use crate::models::{FavoriteItem, Recipe, ShoppingListItem};
use crate::resources::ServerResources;
use crate::session::SessionId;
use crate::utils::input::{normalize_ingredients, parse_ingredient_list, FormFields};
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// JSON submission body
#[derive(Debug, Deserialize)]
struct IngredientsPayload {
    #[serde(default)]
    ingredients: Option<Vec<String>>,
}

/// Home page view-model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    /// Search results, narrowed to favorites when `filter_type` is `favorites`
    pub recipes: Vec<Recipe>,
    /// Ingredients of a successful search
    pub ingredients_list: Vec<String>,
    /// Validation or search failure shown to the user
    pub error_message: Option<String>,
    /// Session shopping list
    pub shopping_list: Vec<ShoppingListItem>,
    /// Session favorites
    pub favorites: Vec<FavoriteItem>,
    /// `all` or `favorites`
    pub filter_type: String,
    /// Shopping list size
    pub total_items: usize,
    /// Checked shopping list items
    pub done_items: usize,
    /// Inspiration for a plain page load
    pub random_recipes: Vec<Recipe>,
}

/// Home page routes
pub struct HomeRoutes;

impl HomeRoutes {
    /// Create the home page routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_home).post(Self::handle_home))
            .with_state(resources)
    }

    /// Handle `GET /` and `POST /`
    async fn handle_home(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        RawQuery(query): RawQuery,
        method: Method,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Json<HomeView>, AppError> {
        let filter_type = FormFields::parse(query.unwrap_or_default().as_bytes())
            .get("filter")
            .unwrap_or(filters::ALL)
            .to_owned();
        let is_submission = method == Method::POST;

        let mut recipes = Vec::new();
        let mut ingredients_list = Vec::new();
        let mut error_message = None;

        if is_submission {
            let ingredients = Self::parse_ingredients(&headers, &body)?;

            if ingredients.is_empty() {
                error_message = Some(messages::MISSING_INGREDIENTS.to_owned());
            } else {
                let search = IngredientSearch::new(ingredients);
                match resources.recipes.search_by_ingredients(&search).await {
                    Ok(found) => {
                        info!(
                            ingredients = %search.query_string(),
                            count = found.len(),
                            "Ingredient search completed"
                        );
                        recipes = found;
                        ingredients_list = search.ingredients;
                    }
                    Err(e) => error_message = Some(e.to_string()),
                }
            }
        }

        let state = resources.sessions.get(session_id).await;

        // A filter-only GET has no recipes to narrow
        if filter_type == filters::FAVORITES && !recipes.is_empty() {
            recipes = state.filter_recipes_by_favorites(recipes);
        }

        let random_recipes = if !is_submission && recipes.is_empty() && error_message.is_none()
        {
            resources
                .recipes
                .get_random_recipes(recipe_api::DEFAULT_RANDOM_COUNT)
                .await
        } else {
            Vec::new()
        };

        Ok(Json(HomeView {
            recipes,
            ingredients_list,
            error_message,
            total_items: state.total_items(),
            done_items: state.done_items(),
            shopping_list: state.shopping_list,
            favorites: state.favorites,
            filter_type,
            random_recipes,
        }))
    }

    /// Ingredients from a JSON array or a comma-separated form field
    ///
    /// Only the first `ingredients` form field is read. Query parameters are not consulted.
    fn parse_ingredients(headers: &HeaderMap, body: &[u8]) -> Result<Vec<String>, AppError> {
        if is_json_request(headers) {
            let payload: IngredientsPayload = serde_json::from_slice(body).map_err(|e| {
                debug!(error = %e, "Rejected home page JSON body");
                AppError::invalid_input(format!("Invalid JSON body: {e}")).with_source(e)
            })?;
            return Ok(normalize_ingredients(
                payload.ingredients.unwrap_or_default(),
            ));
        }

        let form = FormFields::parse(body);
        Ok(parse_ingredient_list(form.get("ingredients").unwrap_or_default()))
    }
}
