// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the recipe provider, sessions, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Constants grouped by domain.

/// Recipe provider (Spoonacular) defaults
pub mod recipe_api {
    /// Default provider base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";
    /// Placeholder key shipped in sample configuration; treated as unconfigured
    pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
    /// Single-attempt request ceiling in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Default number of recipes returned by an ingredient search
    pub const DEFAULT_SEARCH_COUNT: u32 = 10;
    /// Default ranking strategy (1 = maximize used ingredients)
    pub const DEFAULT_RANKING: u8 = 1;
    /// Default number of inspiration recipes
    pub const DEFAULT_RANDOM_COUNT: u32 = 5;
    /// Service name used in log fields and error messages
    pub const SERVICE_NAME: &str = "Spoonacular API";
}

/// Session cookie and storage defaults
pub mod session {
    /// Default session cookie name
    pub const DEFAULT_COOKIE_NAME: &str = "kitchen_session";
    /// Default upper bound on sessions held in memory
    pub const DEFAULT_MAX_ENTRIES: usize = 10_000;
}

/// Network defaults
pub mod network {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
}

/// Route paths
pub mod routes {
    /// Home page and default redirect target
    pub const HOME: &str = "/";
}

/// Home page `filter` query values
pub mod filters {
    /// Show every search result
    pub const ALL: &str = "all";
    /// Narrow search results to saved favorites
    pub const FAVORITES: &str = "favorites";
}

/// Messages shown to users
pub mod messages {
    /// Ingredient form submitted without usable input
    pub const MISSING_INGREDIENTS: &str = "Please provide at least one ingredient.";
    /// `/api/search` called without an ingredients array
    pub const INGREDIENTS_REQUIRED: &str = "Ingredients list is required";
    /// `/api/search` called with a non-JSON body
    pub const JSON_REQUIRED: &str = "Request must be JSON";
    /// Recipe provider key missing or placeholder
    pub const API_KEY_NOT_CONFIGURED: &str =
        "API key not configured. Please set SPOONACULAR_API_KEY environment variable.";
}
