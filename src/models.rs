// ABOUTME: Domain models re-exported from the kitchen-core crate
// ABOUTME: Recipe payloads, shopping list items, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

pub use kitchen_core::models::*;
