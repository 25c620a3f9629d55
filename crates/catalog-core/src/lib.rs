//! # catalog-core: Pure Logic for the Product Catalog Dashboard
//!
//! Everything the dashboard decides about products lives here, as pure
//! functions and plain state with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Catalog Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard view (frontend)                    │   │
//! │  │    Filter panel ──► Product table ──► Pagination ──► Dialogs   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / CatalogView                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/dashboard                               │   │
//! │  │    load_products, set_price_filter, create_product, etc.       │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌───────▼──────────────────┐    │
//! │  │   ★ catalog-core (THIS CRATE) ★ │  │     catalog-client       │    │
//! │  │                                 │  │  REST calls (reqwest)    │    │
//! │  │  types  filter  engine  store   │  └──────────────────────────┘    │
//! │  │  money  validation  error       │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO NETWORK • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductId, ProductDraft
//! - [`money`] - Integer price type
//! - [`filter`] - Filter criteria and sort order
//! - [`engine`] - Filter / sort / paginate pipeline
//! - [`store`] - Product store and the view snapshot
//! - [`validation`] - Product form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Money, Product, ProductStore, PriceFilter};
//!
//! let mut store = ProductStore::new(10);
//! store.set_products(vec![
//!     Product::named("Pen").with_price(Money::from_cents(150)),
//!     Product::named("Chair").with_price(Money::from_cents(8900)),
//! ]);
//!
//! store.set_price_filter(PriceFilter::Under20);
//! assert_eq!(store.visible().len(), 1);
//! assert_eq!(store.visible()[0].name, "Pen");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod filter;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{PageRequest, PageSlice};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{CategoryFilter, FilterCriteria, PriceFilter, RatingFilter, SortOrder};
pub use money::{Money, Price};
pub use store::{CatalogView, ProductStore};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size the store accepts.
pub const MAX_PAGE_SIZE: usize = 100;
