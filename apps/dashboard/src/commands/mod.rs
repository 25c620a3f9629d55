//! # Commands Module
//!
//! Everything the view layer can ask the dashboard to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── products.rs   ◄─── Load, refresh, view, create, update, delete
//! ├── filters.rs    ◄─── Category/price/rating/search, sort, paging
//! └── favorites.rs  ◄─── Toggle and list favorites
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View layer                                                             │
//! │  ──────────                                                             │
//! │  onPriceChange('under20')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn set_price_filter(                                                   │
//! │      catalog: &CatalogState,    ◄── only the state it needs            │
//! │      price: PriceFilter,                                               │
//! │  ) -> CatalogView                                                       │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  View re-renders from CatalogView                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that talk to the API are `async` and take the repository as
//! `&dyn ProductRepository`; filter commands are synchronous.

pub mod favorites;
pub mod filters;
pub mod products;

pub use favorites::{favorite_products, list_favorites, toggle_favorite};
pub use filters::{
    get_catalog_view, reset_filters, set_category_filter, set_page, set_page_size,
    set_price_filter, set_rating_filter, set_search_filter, set_sort_order,
};
pub use products::{
    create_product, delete_product, find_loaded_product, load_categories, load_products, refresh,
    update_product, view_product,
};
