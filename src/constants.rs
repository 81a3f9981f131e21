// ABOUTME: Application constants for the Kitchen Helper service
// ABOUTME: Re-exports kitchen-core constants and adds service identity values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! # Constants Module
//!
//! Domain constants live in `kitchen-core`; this module re-exports them and adds the
//! values that only the server binary cares about.

pub use kitchen_core::constants::*;

/// Service identity used in logs
pub mod service_names {
    /// Service name reported at startup and in structured logs
    pub const KITCHEN_HELPER: &str = "kitchen-helper";
    /// Crate name used for the default log directive
    pub const CRATE_TARGET: &str = "kitchen_helper";
}

/// Environment variable names
pub mod env_vars {
    /// Bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Recipe provider API key
    pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Recipe provider base URL
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Recipe provider request timeout
    pub const RECIPE_API_TIMEOUT_SECS: &str = "RECIPE_API_TIMEOUT_SECS";
    /// Session cookie name
    pub const SESSION_COOKIE_NAME: &str = "SESSION_COOKIE_NAME";
    /// Session cookie `Secure` flag
    pub const SESSION_COOKIE_SECURE: &str = "SESSION_COOKIE_SECURE";
    /// In-memory session bound
    pub const SESSION_MAX_ENTRIES: &str = "SESSION_MAX_ENTRIES";
}
