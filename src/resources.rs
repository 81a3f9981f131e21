// ABOUTME: Shared dependencies handed to every route handler and middleware
// ABOUTME: Bundles configuration, the recipe provider, and the session store behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use crate::config::ServerConfig;
use crate::external::{RecipeProvider, SpoonacularClient};
use crate::session::{InMemorySessionStore, SessionStore};
use std::sync::Arc;

/// Centralized resource container used as axum state
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe search backend
    pub recipes: Arc<dyn RecipeProvider>,
    /// Session storage
    pub sessions: Arc<dyn SessionStore>,
}

impl ServerResources {
    /// Production resources: Spoonacular client and an LRU-bounded in-memory store
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let recipes = Arc::new(SpoonacularClient::new(config.recipe_api.clone()));
        let sessions = Arc::new(InMemorySessionStore::new(config.session.max_entries));
        Self::with_components(config, recipes, sessions)
    }

    /// Resources with explicit components, used to inject mocks in tests
    #[must_use]
    pub fn with_components(
        config: ServerConfig,
        recipes: Arc<dyn RecipeProvider>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            recipes,
            sessions,
        }
    }
}
