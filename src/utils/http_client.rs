// ABOUTME: Shared HTTP client utilities with timeout configuration
// ABOUTME: Builds the reqwest client used for outbound recipe provider calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client whose whole request (connect + body) is bounded by `timeout`
///
/// Falls back to a default client if the builder fails (TLS backend initialization).
#[must_use]
pub fn create_client_with_timeout(timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("kitchen-helper/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build HTTP client, using defaults");
            Client::new()
        })
}
