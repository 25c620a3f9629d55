//! # Repository Module
//!
//! The product data-access seam and its HTTP implementation.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Dashboard command                                                     │
//! │       │                                                                 │
//! │       │  repo.fetch_products(None)                                     │
//! │       ▼                                                                 │
//! │  dyn ProductRepository  ◄── mock in tests                              │
//! │  ├── fetch_products(page)                                              │
//! │  ├── get_product_by_id(id)                                             │
//! │  ├── create_product(product)                                           │
//! │  ├── update_product(id, product)                                       │
//! │  ├── delete_product(id)                                                │
//! │  └── get_categories()                                                  │
//! │       │                                                                 │
//! │       │  HTTPS + JSON                                                   │
//! │       ▼                                                                 │
//! │  HttpProductRepository ──► {base}/products, {base}/categories          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

use async_trait::async_trait;
use catalog_core::{PageRequest, Product, ProductId};

use crate::error::ClientResult;

/// A batch of products plus the server's total count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Total number of products on the server. Equals `products.len()`
    /// when the whole set was fetched or the server sent no count.
    pub total_count: usize,
}

/// Data access for products.
///
/// Implementations must be shareable across tasks; the dashboard holds one
/// behind an `Arc`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetches products. `None` fetches the whole set.
    async fn fetch_products(&self, page: Option<PageRequest>) -> ClientResult<ProductPage>;

    async fn get_product_by_id(&self, id: &ProductId) -> ClientResult<Product>;

    /// Creates a product and returns it as stored (with its new id).
    async fn create_product(&self, product: &Product) -> ClientResult<Product>;

    /// Replaces the product with the given id.
    async fn update_product(&self, id: &ProductId, product: &Product) -> ClientResult<Product>;

    async fn delete_product(&self, id: &ProductId) -> ClientResult<()>;

    /// Category names, deduplicated in server order.
    async fn get_categories(&self) -> ClientResult<Vec<String>>;
}
