// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides canned recipes, a router wired to a mock provider, and request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `kitchen_helper`

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use kitchen_helper::{
    config::{Environment, ServerConfig},
    external::{MockRecipeProvider, RecipeProvider},
    models::Recipe,
    resources::ServerResources,
    server::build_router,
    session::{InMemorySessionStore, SessionStore},
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Configuration used by every router test
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Recipe from a JSON literal
pub fn recipe(value: Value) -> Recipe {
    serde_json::from_value(value).unwrap()
}

/// Three search results with ids 1, 2, 3
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(json!({"id": 1, "title": "Omelette", "usedIngredientCount": 1})),
        recipe(json!({"id": 2, "title": "Fried Rice", "usedIngredientCount": 2})),
        recipe(json!({"id": 3, "title": "Rice Pudding", "usedIngredientCount": 1})),
    ]
}

/// Router wired to a mock recipe provider and a fresh in-memory session store
pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockRecipeProvider>,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestApp {
    pub fn new(provider: MockRecipeProvider) -> Self {
        init_test_logging();

        let provider = Arc::new(provider);
        let sessions = Arc::new(InMemorySessionStore::default());
        let resources = Arc::new(ServerResources::with_components(
            test_config(),
            Arc::clone(&provider) as Arc<dyn RecipeProvider>,
            Arc::clone(&sessions) as Arc<dyn SessionStore>,
        ));

        Self {
            router: build_router(resources),
            provider,
            sessions,
        }
    }

    pub fn with_sample_recipes() -> Self {
        Self::new(MockRecipeProvider::new(sample_recipes()))
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Start a session with a plain `GET /` and return its cookie pair
    pub async fn start_session(&self) -> String {
        let response = self.send(get("/", None)).await;
        session_cookie(&response).expect("new session should set a cookie")
    }
}

/// `GET` request, optionally carrying a cookie
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// URL-encoded form `POST`
pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

/// `POST` without a `Content-Type` header
pub fn post_raw(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

/// JSON `POST`
pub fn post_json(uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` pair of the session cookie set by `response`, if any
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToOwned::to_owned)
}

/// Raw `Set-Cookie` header
pub fn set_cookie_header(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// `Location` header of a redirect
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Decode a JSON response body
pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
