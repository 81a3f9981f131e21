// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Environment-based configuration management

use crate::constants::{env_vars, network, recipe_api, session};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment; session cookies default to `Secure`
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recipe provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeApiConfig {
    /// Provider API key; `None` when the variable is unset or empty
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Provider base URL without trailing slash
    pub base_url: String,
    /// Single-attempt request ceiling in seconds
    pub timeout_secs: u64,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: recipe_api::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: recipe_api::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RecipeApiConfig {
    /// Config pointing at `base_url` with the given key and default timeout
    #[must_use]
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    /// A key is usable when present, non-empty, and not the sample placeholder
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty() && key != recipe_api::PLACEHOLDER_API_KEY)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn from_env() -> Result<Self> {
        let api_key = env::var(env_vars::SPOONACULAR_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());
        let base_url = env_var_or(env_vars::SPOONACULAR_BASE_URL, recipe_api::DEFAULT_BASE_URL);
        let timeout_secs = parse_env(
            env_vars::RECIPE_API_TIMEOUT_SECS,
            recipe_api::DEFAULT_TIMEOUT_SECS,
        )?;
        ensure!(
            timeout_secs > 0,
            "Invalid {} value: must be at least 1 second",
            env_vars::RECIPE_API_TIMEOUT_SECS
        );

        Ok(Self {
            timeout_secs,
            ..Self::new(api_key, base_url)
        })
    }
}

/// Session cookie and storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    pub cookie_name: String,
    /// Set the `Secure` attribute on the session cookie
    pub cookie_secure: bool,
    /// Upper bound on sessions kept in memory (least recently used are evicted)
    pub max_entries: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: session::DEFAULT_COOKIE_NAME.to_owned(),
            cookie_secure: false,
            max_entries: session::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl SessionConfig {
    fn from_env(environment: Environment) -> Result<Self> {
        Ok(Self {
            cookie_name: env_var_or(env_vars::SESSION_COOKIE_NAME, session::DEFAULT_COOKIE_NAME),
            cookie_secure: parse_env(env_vars::SESSION_COOKIE_SECURE, environment.is_production())?,
            max_entries: parse_env(env_vars::SESSION_MAX_ENTRIES, session::DEFAULT_MAX_ENTRIES)?,
        })
    }
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Recipe provider settings
    pub recipe_api: RecipeApiConfig,
    /// Session settings
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            recipe_api: RecipeApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed, or if the
    /// recipe API timeout is zero
    pub fn from_env() -> Result<Self> {
        let environment =
            Environment::from_str_or_default(&env_var_or(env_vars::ENVIRONMENT, "development"));

        Ok(Self {
            host: env_var_or(env_vars::HTTP_HOST, network::DEFAULT_HOST),
            http_port: parse_env(env_vars::HTTP_PORT, network::DEFAULT_HTTP_PORT)?,
            environment,
            recipe_api: RecipeApiConfig::from_env()?,
            session: SessionConfig::from_env(environment)?,
        })
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line configuration summary; never includes the API key itself
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Kitchen Helper configuration: environment={}, bind={}, recipe_api={} ({}), \
             timeout={}s, session_cookie={}, secure_cookie={}, max_sessions={}",
            self.environment,
            self.bind_address(),
            self.recipe_api.base_url,
            if self.recipe_api.is_configured() {
                "key configured"
            } else {
                "key missing"
            },
            self.recipe_api.timeout_secs,
            self.session.cookie_name,
            self.session.cookie_secure,
            self.session.max_entries,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_recipe_api_configured() {
        let mut config = RecipeApiConfig::new(Some("abc123".into()), "http://localhost/");
        assert!(config.is_configured());
        assert_eq!(config.base_url, "http://localhost");

        config.api_key = Some(recipe_api::PLACEHOLDER_API_KEY.into());
        assert!(!config.is_configured());

        config.api_key = Some(String::new());
        assert!(!config.is_configured());

        config.api_key = None;
        assert!(!config.is_configured());
    }

    #[test]
    fn test_summary_redacts_api_key() {
        let config = ServerConfig {
            recipe_api: RecipeApiConfig::new(Some("super-secret".into()), "http://x"),
            ..ServerConfig::default()
        };

        let summary = config.summary();
        assert!(summary.contains("key configured"));
        assert!(!summary.contains("super-secret"));
    }
}
