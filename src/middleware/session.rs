// ABOUTME: Tower middleware resolving the per-browser session from the session cookie
// ABOUTME: Injects SessionId into request extensions and issues a cookie for new sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Session Middleware
//!
//! Every request gets a [`SessionId`] extension. A missing or unparseable cookie starts a
//! new session, and the response carries a `Set-Cookie` header for it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{Router, routing::get, middleware, Extension};
//! use kitchen_helper::middleware::session_middleware;
//! use kitchen_helper::resources::ServerResources;
//! use kitchen_helper::session::SessionId;
//! use std::sync::Arc;
//!
//! async fn handler(Extension(session_id): Extension<SessionId>) -> String {
//!     session_id.to_string()
//! }
//!
//! # fn example(resources: Arc<ServerResources>) {
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn_with_state(resources, session_middleware));
//! # }
//! ```

use crate::config::SessionConfig;
use crate::resources::ServerResources;
use crate::session::SessionId;
use axum::{
    extract::{Request, State},
    http::{header::SET_COOKIE, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use tracing::{debug, warn};

/// Session middleware
///
/// Never rejects a request: a bad cookie is treated like no cookie.
pub async fn session_middleware(
    State(resources): State<Arc<ServerResources>>,
    mut req: Request,
    next: Next,
) -> Response {
    let session_config = &resources.config.session;
    let jar = CookieJar::from_headers(req.headers());

    let existing = jar
        .get(&session_config.cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session_id, is_new) = existing.map_or_else(
        || {
            let id = SessionId::new();
            debug!(session.id = %id, "Starting new session");
            (id, true)
        },
        |id| (id, false),
    );

    tracing::Span::current().record("session_id", session_id.to_string());
    req.extensions_mut().insert(session_id);

    let mut response = next.run(req).await;

    if is_new {
        let cookie = session_cookie(session_config, session_id);
        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Failed to encode session cookie"),
        }
    }

    response
}

/// Build the session cookie for `session_id`
#[must_use]
pub fn session_cookie(config: &SessionConfig, session_id: SessionId) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}
