// ABOUTME: Recipe detail page handler
// ABOUTME: Fetches full recipe information and reports whether it is a session favorite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use crate::models::Recipe;
use crate::resources::ServerResources;
use crate::session::SessionId;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Recipe detail view-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetailView {
    /// Provider payload, untouched
    pub recipe: Recipe,
    /// Whether the recipe is in this session's favorites
    pub is_favorite: bool,
}

/// Error page view-model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorView {
    /// Message shown to the user
    pub error_message: String,
}

/// Recipe detail routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe detail routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipe/:recipe_id", get(Self::handle_recipe_detail))
            .with_state(resources)
    }

    /// Handle `GET /recipe/:recipe_id`
    async fn handle_recipe_detail(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        Path(recipe_id): Path<i64>,
    ) -> Response {
        match resources.recipes.get_recipe_information(recipe_id).await {
            Ok(recipe) => {
                let is_favorite = resources.sessions.get(session_id).await.is_favorite(recipe_id);
                Json(RecipeDetailView {
                    recipe,
                    is_favorite,
                })
                .into_response()
            }
            Err(e) => {
                warn!(recipe.id = recipe_id, error = %e, "Recipe detail unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorView {
                        error_message: e.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
