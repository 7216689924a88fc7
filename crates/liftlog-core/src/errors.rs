// ABOUTME: Error type shared by the store, loader, and HTTP layers
// ABOUTME: AppError pairs an ErrorCode (which fixes the HTTP status) with a message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Errors
//!
//! Store reads, CSV ingestion, and configuration all fail with [`AppError`].
//! The [`ErrorCode`] decides how the dashboard sees the failure: bad query
//! parameters are a 400, an unreachable store is a 503, anything the caller
//! cannot fix is a 500.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Machine-readable failure category, serialized in `SCREAMING_SNAKE_CASE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Query parameter or environment value rejected
    InvalidInput,
    /// CSV content that could not be parsed
    InvalidFormat,
    /// Missing file or row
    ResourceNotFound,
    /// Store unreachable after retries
    ExternalServiceUnavailable,
    /// Unusable configuration
    ConfigError,
    /// Serve loop or other unexpected failure
    InternalError,
    /// Query or transaction failure
    DatabaseError,
    /// File system failure
    StorageError,
    /// JSON encoding failure
    SerializationError,
}

impl ErrorCode {
    /// HTTP status for responses carrying this code
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceUnavailable => 503,
            Self::ConfigError
            | Self::InternalError
            | Self::DatabaseError
            | Self::StorageError
            | Self::SerializationError => 500,
        }
    }

    /// Short prefix used when displaying an error
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid format",
            Self::ResourceNotFound => "Not found",
            Self::ExternalServiceUnavailable => "Store unavailable",
            Self::ConfigError => "Configuration error",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database error",
            Self::StorageError => "Storage error",
            Self::SerializationError => "Serialization error",
        }
    }
}

/// Error returned by every fallible operation in the service
#[derive(Debug, Error)]
pub struct AppError {
    /// Failure category
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// File, table, or endpoint the failure concerns
    pub resource: Option<String>,
    /// Underlying error
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build an error from a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource: None,
            source: None,
        }
    }

    /// Name the file or table the error concerns
    #[must_use]
    pub fn with_resource_id(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Chain the underlying error
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// `"{what} not found"`
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", what.into()),
        )
    }

    /// See [`ErrorCode::InvalidInput`]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// See [`ErrorCode::InvalidFormat`]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// See [`ErrorCode::InternalError`]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// See [`ErrorCode::DatabaseError`]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// See [`ErrorCode::StorageError`]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// See [`ErrorCode::ConfigError`]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// See [`ErrorCode::ExternalServiceUnavailable`]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceUnavailable, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.code.summary();
        match &self.resource {
            Some(resource) => write!(f, "{summary} ({resource}): {}", self.message),
            None => write!(f, "{summary}: {}", self.message),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
            .with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}

/// JSON body of an error response: `{"error": {"code", "message", "resource"?}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorBody,
}

/// Inner object of [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure category
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Affected resource, omitted when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorBody {
                code: error.code,
                message: error.message,
                resource: error.resource,
            },
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "Request failed");
        } else {
            tracing::warn!(code = ?self.code, error = %self, "Request rejected");
        }

        let body = axum::Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
