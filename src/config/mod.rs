// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes environment-driven server, recipe provider, and session configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Configuration module
//!
//! All configuration comes from environment variables; see [`environment::ServerConfig`].

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, RecipeApiConfig, ServerConfig, SessionConfig};
