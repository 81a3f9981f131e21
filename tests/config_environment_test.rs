// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, production cookie defaults, and parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kitchen_helper::config::environment::{Environment, ServerConfig};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "HTTP_HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "SPOONACULAR_API_KEY",
    "SPOONACULAR_BASE_URL",
    "RECIPE_API_TIMEOUT_SECS",
    "SESSION_COOKIE_NAME",
    "SESSION_COOKIE_SECURE",
    "SESSION_MAX_ENTRIES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:5000");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.recipe_api.base_url, "https://api.spoonacular.com/recipes");
    assert_eq!(config.recipe_api.timeout_secs, 10);
    assert!(!config.recipe_api.is_configured());
    assert_eq!(config.session.cookie_name, "kitchen_session");
    assert!(!config.session.cookie_secure);
    assert_eq!(config.session.max_entries, 10_000);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("SPOONACULAR_API_KEY", "  abc123  ");
    env::set_var("SPOONACULAR_BASE_URL", "http://localhost:9000/recipes/");
    env::set_var("RECIPE_API_TIMEOUT_SECS", "3");
    env::set_var("SESSION_MAX_ENTRIES", "50");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.recipe_api.api_key.as_deref(), Some("abc123"));
    assert!(config.recipe_api.is_configured());
    assert_eq!(config.recipe_api.base_url, "http://localhost:9000/recipes");
    assert_eq!(config.recipe_api.timeout_secs, 3);
    assert_eq!(config.session.max_entries, 50);
}

#[test]
#[serial]
fn test_placeholder_key_is_not_configured() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "YOUR_API_KEY_HERE");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.recipe_api.is_configured());
}

#[test]
#[serial]
fn test_production_defaults_to_secure_cookie() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    assert!(config.session.cookie_secure);

    env::set_var("SESSION_COOKIE_SECURE", "false");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.session.cookie_secure);
}

#[test]
#[serial]
fn test_invalid_values_are_errors() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("HTTP_PORT"));

    clear_env();
    env::set_var("SESSION_COOKIE_SECURE", "maybe");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_env();
    env::set_var("RECIPE_API_TIMEOUT_SECS", "0");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("RECIPE_API_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_summary_never_contains_key() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "very-secret-key");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(summary.contains("key configured"));
    assert!(!summary.contains("very-secret-key"));
}
