// ABOUTME: Main library entry point for the Kitchen Helper recipe service
// ABOUTME: Ingredient search via Spoonacular plus session-scoped shopping list and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

#![deny(unsafe_code)]

//! # Kitchen Helper
//!
//! A small web service: submit a list of ingredients, get matching recipes from the
//! Spoonacular recipe-search API, and keep a shopping list and a favorites list for the
//! current browser session.
//!
//! ## Architecture
//!
//! - **External**: the recipe API client behind the `RecipeProvider` trait
//! - **Session**: per-session state and the `SessionStore` trait with an in-memory LRU store
//! - **Middleware**: session cookie resolution
//! - **Routes**: one thin handler per endpoint, producing JSON view-models
//! - **Config** / **Logging**: environment-driven configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kitchen_helper::config::environment::ServerConfig;
//! use kitchen_helper::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling re-exported from `kitchen-core`
pub mod errors;

/// External recipe API client
pub mod external;

/// Logging setup and structured output
pub mod logging;

/// HTTP middleware (session cookie resolution)
pub mod middleware;

/// Domain models re-exported from `kitchen-core`
pub mod models;

/// Shared handler dependencies
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Session state and session storage
pub mod session;

/// Utility functions and helpers
pub mod utils;
