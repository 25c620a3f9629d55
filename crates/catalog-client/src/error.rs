//! # Client Error Types
//!
//! Error types for product API calls.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / HTTP status / bad JSON                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ClientError (this module) ← Adds categorization                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in dashboard) ← Serialized for the view                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Toast: "Failed to fetch products"                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Product API errors.
///
/// Every non-2xx response is an error. Nothing here is retried
/// automatically; [`ClientError::is_retryable`] is informational.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered 404.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist
    /// - Product was deleted by someone else
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any other non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection refused, DNS failure, TLS failure, and similar.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Response body was not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Base URL could not be parsed or cannot carry a path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Creates a NotFound error for a resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        ClientError::NotFound {
            resource: resource.into(),
        }
    }

    /// True for failures where trying again later could succeed.
    ///
    /// ```text
    /// Network, Timeout, HTTP 5xx, HTTP 429  → retryable
    /// NotFound, other 4xx, Decode, InvalidUrl → not retryable
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) | ClientError::Timeout => true,
            ClientError::Http { status, .. } => *status >= 500 || *status == 429,
            ClientError::NotFound { .. } | ClientError::Decode(_) | ClientError::InvalidUrl(_) => {
                false
            }
        }
    }
}

/// Convert reqwest errors to ClientError.
///
/// ## Error Mapping
/// ```text
/// timeout          → ClientError::Timeout
/// body decode      → ClientError::Decode
/// status (if any)  → ClientError::Http
/// Other            → ClientError::Network
/// ```
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for product API operations.
pub type ClientResult<T> = Result<T, ClientError>;
