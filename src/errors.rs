// ABOUTME: Unified error handling re-exported from the kitchen-core crate
// ABOUTME: Keeps crate::errors paths stable for handlers and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

pub use kitchen_core::errors::*;
