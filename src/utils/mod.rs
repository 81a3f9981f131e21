// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains the shared HTTP client builder and request input parsing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

/// HTTP client configuration and helpers
pub mod http_client;
/// Form and JSON input normalization
pub mod input;
