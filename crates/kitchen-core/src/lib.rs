// ABOUTME: Core types and constants for the Kitchen Helper recipe service
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

#![deny(unsafe_code)]

//! # Kitchen Core
//!
//! Foundation crate providing shared types for the Kitchen Helper service.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the recipe
//!   client boundary error `ApiError`
//! - **models**: Recipes, shopping list items, and favorites
//! - **constants**: Provider defaults, session defaults, and user-facing messages

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `ShoppingListItem`, `FavoriteItem`)
pub mod models;
