// ABOUTME: Route module organization for the Kitchen Helper HTTP endpoints
// ABOUTME: One route group per domain plus the small helpers the handlers share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Route module for Kitchen Helper
//!
//! Each domain module contains only route definitions and thin handler functions that
//! delegate to the recipe provider and the session store. Pages answer with JSON
//! view-models; mutations answer with a `303 See Other` redirect.

/// Favorites mutation routes
pub mod favorites;
/// Health check route
pub mod health;
/// Home page: ingredient search, filter, and inspiration
pub mod home;
/// Static and contact pages
pub mod pages;
/// Recipe detail page
pub mod recipes;
/// JSON search endpoint
pub mod search;
/// Shopping list mutation routes
pub mod shopping_list;

pub use favorites::FavoritesRoutes;
pub use health::HealthRoutes;
pub use home::{HomeRoutes, HomeView};
pub use pages::{AboutView, ContactView, PageRoutes};
pub use recipes::{ErrorView, RecipeDetailView, RecipeRoutes};
pub use search::SearchRoutes;
pub use shopping_list::ShoppingListRoutes;

use crate::utils::input::return_location;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use axum::response::Redirect;

/// Whether the request declares a JSON body (`application/json` or any `+json` type)
pub(crate) fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

/// `303 See Other` to the sanitized return location
pub(crate) fn redirect_back(return_url: Option<&str>) -> Redirect {
    Redirect::to(&return_location(return_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_is_json_request() {
        assert!(is_json_request(&headers("application/json")));
        assert!(is_json_request(&headers("application/json; charset=utf-8")));
        assert!(is_json_request(&headers("application/vnd.api+json")));
        assert!(!is_json_request(&headers(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_request(&HeaderMap::new()));
    }
}
