// ABOUTME: Shopping list mutation handlers (add, remove, toggle)
// ABOUTME: Each applies one session command and redirects back to the home page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use super::redirect_back;
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

/// Shopping list routes
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Create the shopping list routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/shopping-list/add", post(Self::handle_add))
            .route("/shopping-list/remove/:item_id", post(Self::handle_remove))
            .route("/shopping-list/toggle/:item_id", post(Self::handle_toggle))
            .with_state(resources)
    }

    /// Missing fields read as empty; a blank name adds nothing but still redirects
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        body: Bytes,
    ) -> Redirect {
        let form = FormFields::parse(&body);
        resources
            .sessions
            .apply(
                session_id,
                SessionCommand::AddShoppingItem {
                    name: form.get_or_empty("item_name"),
                    quantity: form.get_or_empty("item_quantity"),
                },
            )
            .await;
        redirect_back(None)
    }

    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        Path(item_id): Path<u64>,
    ) -> Redirect {
        resources
            .sessions
            .apply(session_id, SessionCommand::RemoveShoppingItem { id: item_id })
            .await;
        redirect_back(None)
    }

    async fn handle_toggle(
        State(resources): State<Arc<ServerResources>>,
        Extension(session_id): Extension<SessionId>,
        Path(item_id): Path<u64>,
    ) -> Redirect {
        resources
            .sessions
            .apply(session_id, SessionCommand::ToggleShoppingItem { id: item_id })
            .await;
        redirect_back(None)
    }
}
