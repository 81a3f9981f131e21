// ABOUTME: Favorites mutation handlers (add, remove)
// ABOUTME: Redirect to a caller-supplied local return_url, or home
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use super::redirect_back;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::session::{SessionCommand, SessionId};
use crate::utils::input::FormFields;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Redirect,
    routing::post,
    Extension, Router,
};
use std::sync::Arc;

/// `recipe_id` field of an add request; `None` when absent or blank
fn recipe_id(form: &FormFields) -> Result<Option<i64>, AppError> {
    match form.get("recipe_id").map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            AppError::invalid_input(format!("recipe_id must be an integer, got '{raw}'"))
        }),
    }
}

/// Favorites routes
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create the favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/favorites/add", post(Self::handle_add))
            .route("/favorites/remove/:recipe_id", post(Self::handle_remove))
            .with_state(resources)
    }

    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        body: Bytes,
    ) -> Result<Redirect, AppError> {
        let form = FormFields::parse(&body);
        if let Some(id) = recipe_id(&form)? {
            resources
                .sessions
                .apply(
                    session_id,
                    SessionCommand::AddFavorite {
                        id,
                        title: form.get_or_empty("recipe_title"),
                        image: form.get_or_empty("recipe_image"),
                    },
                )
                .await;
        }

        Ok(redirect_back(form.get("return_url")))
    }

    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        Path(recipe_id): Path<i64>,
        body: Bytes,
    ) -> Redirect {
        resources
            .sessions
            .apply(session_id, SessionCommand::RemoveFavorite { id: recipe_id })
            .await;

        redirect_back(FormFields::parse(&body).get("return_url"))
    }
}
