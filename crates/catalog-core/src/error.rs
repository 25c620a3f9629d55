//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form / input validation failures               │
//! │                                                                         │
//! │  catalog-client errors (separate crate)                                │
//! │  └── ClientError      - HTTP / network failures                        │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Toast                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id is loaded.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// An update or delete was attempted on a product without an identifier.
    ///
    /// ## When This Occurs
    /// - The product was never persisted (no `id` from the API)
    /// - The view lost track of the selected row
    ///
    /// Always raised before any network call is made.
    #[error("Cannot {operation} a product without a valid ID")]
    MissingProductId { operation: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a MissingProductId error for the given operation ("update", "delete").
    pub fn missing_id(operation: impl Into<String>) -> Self {
        CoreError::MissingProductId {
            operation: operation.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Why a form field or filter argument was rejected.
///
/// Raised by the product form checks and by filter parsing. These never
/// reach the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Blank after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Name or category below the minimum length.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Rating or page size outside its bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Price below one minor unit.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a price that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// e.g. a rating bucket other than `all` or `1`..`5`.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
