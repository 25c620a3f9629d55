//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  View layer                  Rust Backend                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  updateProduct(form)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad form? ────── ValidationError ───────────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  No id? ───────── CoreError::MissingProductId ── ApiError ──────►│  │
//! │  │         │                                         ▲              │  │
//! │  │         ▼                                         │              │  │
//! │  │  HTTP failed? ─── ClientError (logged) ───────────┘              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  toast.error(e.message)   // "Failed to update product"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Network detail goes to the log; the user only ever sees a short message.

use serde::Serialize;
use tracing::error;

use catalog_client::ClientError;
use catalog_core::{CoreError, ValidationError};

use crate::config::ConfigError;
use crate::storage::StorageError;

/// API error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "name must be at least 2 characters"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product does not exist on the API
    NotFound,

    /// Form or argument validation failed
    ValidationError,

    /// Update/delete without a product id
    MissingId,

    /// Request to the product API failed
    NetworkError,

    /// Preferences could not be persisted
    StorageError,

    /// Configuration could not be loaded or is invalid
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Maps a failed API call made while trying to `action`.
    ///
    /// Not-found keeps its message. Every other failure is logged with full
    /// detail and reported as `"Failed to {action}"`.
    pub fn request_failed(action: &str, err: ClientError) -> Self {
        match err {
            ClientError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            other => {
                error!(
                    action,
                    error = %other,
                    retryable = other.is_retryable(),
                    "Product API request failed"
                );
                ApiError::new(ErrorCode::NetworkError, format!("Failed to {}", action))
            }
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::request_failed("reach the product API", err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::MissingProductId { .. } => {
                ApiError::new(ErrorCode::MissingId, err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        error!(error = %err, "Preference storage failed");
        ApiError::new(ErrorCode::StorageError, "Failed to save favorites")
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
