//! # State Module
//!
//! Shared state behind the dashboard commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │      CatalogState        │        │         Favorites            │  │
//! │  │                          │        │                              │  │
//! │  │  Arc<Mutex<              │        │  Mutex<Vec<ProductId>>       │  │
//! │  │    ProductStore,         │        │  Arc<dyn KeyValueStore>      │  │
//! │  │    generation            │        │    "favoriteProductIds"      │  │
//! │  │  >>                      │        │                              │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Locks are held only for synchronous store work, never across .await │
//! │  • Product loads carry a LoadTicket; stale completions are dropped     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod favorites;

pub use catalog::{CatalogState, LoadTicket};
pub use favorites::{Favorites, FAVORITES_KEY};
