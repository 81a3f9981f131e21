// ABOUTME: Router assembly and HTTP server lifecycle
// ABOUTME: Merges route groups, layers session and trace middleware, serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use crate::config::ServerConfig;
use crate::middleware::session_middleware;
use crate::resources::ServerResources;
use crate::routes::{
    FavoritesRoutes, HealthRoutes, HomeRoutes, PageRoutes, RecipeRoutes, SearchRoutes,
    ShoppingListRoutes,
};
use anyhow::{Context, Result};
use axum::{
    extract::{MatchedPath, Request},
    middleware, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{info, warn, Span};

/// Build the application router
///
/// Every route runs inside an `http_request` span and behind the session middleware,
/// so handlers can always extract `Extension<SessionId>`.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HomeRoutes::routes(Arc::clone(&resources)))
        .merge(SearchRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(ShoppingListRoutes::routes(Arc::clone(&resources)))
        .merge(FavoritesRoutes::routes(Arc::clone(&resources)))
        .merge(PageRoutes::routes())
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .layer(middleware::from_fn_with_state(resources, session_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    let path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %path,
                        session_id = tracing::field::Empty,
                    )
                })
                .on_request(|_request: &Request, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}

/// Bind to the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %listener.local_addr()?, "Kitchen Helper listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Kitchen Helper stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
