//! # Validation Module
//!
//! Product form validation and small argument checks.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  └── Immediate user feedback (field hints)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Dashboard command (Rust)                                     │
//! │  └── THIS MODULE: validate_draft / validate_product_id                 │
//! │           │                                                             │
//! │           ▼  only valid products ever leave the process                │
//! │  Layer 3: Product API                                                  │
//! │  └── Whatever the remote store enforces                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::types::ProductDraft;
//! use catalog_core::validation::validate_draft;
//!
//! let draft = ProductDraft {
//!     name: "Desk Lamp".to_string(),
//!     description: String::new(),
//!     price: 24.5,
//!     category: "Home".to_string(),
//!     rating: 4.0,
//! };
//! let product = validate_draft(&draft).unwrap();
//! assert_eq!(product.price.unwrap().value(), 24.5);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Price;
use crate::types::{Product, ProductDraft, ProductId};
use crate::MAX_PAGE_SIZE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 200;
const CATEGORY_MIN: usize = 2;
const RATING_MIN: f64 = 0.1;
const RATING_MAX: f64 = 5.0;
const PRICE_MIN: f64 = 0.01;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Trimmed length between 2 and 200 characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Mug ").unwrap(), "Mug");
/// assert!(validate_product_name("A").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    let len = name.chars().count();
    if len < NAME_MIN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: NAME_MIN,
        });
    }

    if len > NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: NAME_MAX,
        });
    }

    Ok(name.to_string())
}

/// Validates a category name (trimmed length of at least 2).
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() < CATEGORY_MIN {
        return Err(ValidationError::TooShort {
            field: "category".to_string(),
            min: CATEGORY_MIN,
        });
    }

    Ok(category.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a form price (major units). The amount is kept as typed.
///
/// ## Rules
/// - Must be a finite number
/// - Must be at least 0.01
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
///
/// assert_eq!(validate_price(10.99).unwrap().value(), 10.99);
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<Price> {
    let price = Price::new(price).ok_or_else(|| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if price.value() < PRICE_MIN {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a star rating.
///
/// ## Rules
/// - Finite, between 0.1 and 5 inclusive
pub fn validate_rating(rating: f64) -> ValidationResult<f64> {
    if !rating.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: RATING_MIN,
            max: RATING_MAX,
        });
    }

    Ok(rating)
}

/// Validates a page size.
///
/// ## Rules
/// - Must be between 1 and MAX_PAGE_SIZE (100)
pub fn validate_page_size(page_size: usize) -> ValidationResult<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "page_size".to_string(),
            min: 1.0,
            max: MAX_PAGE_SIZE as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Identity Validators
// =============================================================================

/// Ensures a product has a usable id before an update or delete.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Table row: Delete                                                      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_product_id(product.id, "delete") ← THIS FUNCTION             │
/// │       │                                                                 │
/// │       ├── None / ""  → Error: "Cannot delete a product without ..."    │
/// │       │                (no request is sent)                             │
/// │       │                                                                 │
/// │       └── Some(id)   → DELETE /products/{id}                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_product_id(id: Option<&ProductId>, operation: &str) -> CoreResult<ProductId> {
    match id {
        Some(id) if !id.as_str().trim().is_empty() => Ok(id.clone()),
        _ => Err(CoreError::missing_id(operation)),
    }
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates a product form and builds the product to send to the API.
///
/// Fields are checked in form order and the first failure is returned.
/// An empty description becomes absent. The result carries no id; callers
/// attach one for updates.
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<Product> {
    let name = validate_product_name(&draft.name)?;
    let price = validate_price(draft.price)?;
    let category = validate_category(&draft.category)?;
    let rating = validate_rating(draft.rating)?;

    let description = draft.description.trim();
    let description = if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    };

    Ok(Product {
        id: None,
        name,
        description,
        price: Some(price),
        category: Some(category),
        rating: Some(rating),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
