// ABOUTME: JSON ingredient search endpoint
// ABOUTME: Returns the provider's recipe array as-is, or an error body with 400/500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use super::is_json_request;
use crate::constants::messages;
use crate::errors::{AppError, ErrorResponse};
use crate::external::IngredientSearch;
use crate::resources::ServerResources;
use crate::utils::input::normalize_ingredients;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Request body for `POST /api/search`
#[derive(Debug, Deserialize)]
struct SearchRequest {
    #[serde(default)]
    ingredients: Option<Vec<String>>,
}

/// JSON search routes
pub struct SearchRoutes;

impl SearchRoutes {
    /// Create the search API routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/search", post(Self::handle_search))
            .with_state(resources)
    }

    /// Handle `POST /api/search`
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        if !is_json_request(&headers) {
            return Err(AppError::invalid_input(messages::JSON_REQUIRED));
        }

        let request: SearchRequest = serde_json::from_slice(&body)
            .map_err(|e| {
                AppError::invalid_input(format!("Invalid JSON body: {e}")).with_source(e)
            })?;

        let ingredients = normalize_ingredients(request.ingredients.unwrap_or_default());
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(messages::INGREDIENTS_REQUIRED));
        }

        let search = IngredientSearch::new(ingredients);
        match resources.recipes.search_by_ingredients(&search).await {
            Ok(recipes) => Ok((StatusCode::OK, Json(recipes)).into_response()),
            Err(e) => {
                warn!(error = %e, "API search failed");
                let error = AppError::from(e);
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::from(&error)),
                )
                    .into_response())
            }
        }
    }
}
