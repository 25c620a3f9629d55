//! # catalog-client: Product API Client
//!
//! Async access to the remote product catalog REST API.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Data Flow                           │
//! │                                                                         │
//! │  Dashboard command (load_products)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 catalog-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌───────────┐  │   │
//! │  │   │ ClientConfig  │───►│ HttpProductRepo    │   │ ClientErr │  │   │
//! │  │   │ base_url      │    │ impl ProductRepo   │──►│ status →  │  │   │
//! │  │   │ timeout, UA   │    │ (reqwest)          │   │ category  │  │   │
//! │  │   └───────────────┘    └────────────────────┘   └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   https://mock-data-josw.onrender.com  /products  /categories   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Base URL, timeout, user agent
//! - [`error`] - Client error types
//! - [`repository`] - The `ProductRepository` trait and its HTTP implementation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use repository::product::HttpProductRepository;
pub use repository::{ProductPage, ProductRepository};
