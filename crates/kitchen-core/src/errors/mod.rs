// ABOUTME: Unified error handling with standard error codes and HTTP responses
// ABOUTME: Defines AppError, ErrorCode, and the recipe client boundary error ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! # Unified Error Handling System
//!
//! `AppError` is the error every handler returns; it carries an `ErrorCode` that decides
//! the HTTP status. `ApiError` is narrower: it is the only error the recipe API client
//! can produce, so handlers can match on it before deciding how to surface it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExternalServiceError => 502,
            Self::ConfigMissing => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigMissing => "Required configuration is missing",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// Discriminant of [`ApiError`] for callers that only care about the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// No usable API key
    Unconfigured,
    /// Network failure, timeout, non-2xx status, or undecodable body
    TransportError,
}

/// Failure reported by the recipe API client
///
/// `Unconfigured` is returned before any network traffic happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// API key missing or still set to the placeholder value
    #[error("{}", messages::API_KEY_NOT_CONFIGURED)]
    Unconfigured,
    /// The request was attempted and failed
    #[error("{detail}")]
    Transport {
        /// User-presentable description, prefixed with the failed operation
        detail: String,
    },
}

impl ApiError {
    /// Build a transport error from any displayable cause
    pub fn transport(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            detail: format!("{operation}: {cause}"),
        }
    }

    /// Failure class of this error
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Unconfigured => ApiErrorKind::Unconfigured,
            Self::Transport { .. } => ApiErrorKind::TransportError,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        let code = match error {
            ApiError::Unconfigured => ErrorCode::ConfigMissing,
            ApiError::Transport { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string())
    }
}

/// HTTP error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable error code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            code: error.code,
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(code = ?self.code, error = %self, "request failed");
            } else {
                tracing::debug!(code = ?self.code, error = %self, "request rejected");
            }

            (status, Json(ErrorResponse::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
        assert_eq!(ErrorCode::ConfigMissing.http_status(), 500);
    }

    #[test]
    fn test_api_error_maps_to_app_error() {
        let unconfigured = AppError::from(ApiError::Unconfigured);
        assert_eq!(unconfigured.code, ErrorCode::ConfigMissing);
        assert!(unconfigured.message.contains("SPOONACULAR_API_KEY"));

        let transport = AppError::from(ApiError::transport("Failed to fetch recipes", "timeout"));
        assert_eq!(transport.code, ErrorCode::ExternalServiceError);
        assert_eq!(transport.message, "Failed to fetch recipes: timeout");
    }

    #[test]
    fn test_api_error_kind() {
        assert_eq!(ApiError::Unconfigured.kind(), ApiErrorKind::Unconfigured);
        assert_eq!(
            ApiError::transport("op", "boom").kind(),
            ApiErrorKind::TransportError
        );
    }

    #[test]
    fn test_source_is_chained() {
        use std::error::Error as _;

        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::invalid_input("Invalid JSON body").with_source(parse_error);

        assert!(error.source().is_some());
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_input("bad ingredients");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["error"], "bad ingredients");
        assert_eq!(json["code"], "INVALID_INPUT");
    }
}
