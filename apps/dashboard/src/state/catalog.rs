//! # Catalog State
//!
//! The shared [`ProductStore`] plus a load generation counter.
//!
//! ## Load Tickets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  refresh #1 ── begin_load() → ticket 1 ─────────── slow ──────┐         │
//! │  refresh #2 ── begin_load() → ticket 2 ── fast ──┐            │         │
//! │                                                  ▼            ▼         │
//! │                                finish_load(2) applied   finish_load(1)  │
//! │                                loading = false          ignored (stale) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the latest ticket may write products or clear the loading flag.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{debug, warn};

use catalog_core::{CatalogView, Product, ProductStore};

/// Identifies one product load. Issued by [`CatalogState::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct CatalogInner {
    store: ProductStore,
    generation: u64,
}

/// Thread-safe catalog state.
///
/// Cloning shares the same store.
#[derive(Debug, Clone)]
pub struct CatalogState {
    inner: Arc<Mutex<CatalogInner>>,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        CatalogState {
            inner: Arc::new(Mutex::new(CatalogInner {
                store: ProductStore::new(page_size),
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CatalogInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductStore) -> R,
    {
        f(&self.lock().store)
    }

    /// Write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductStore) -> R,
    {
        f(&mut self.lock().store)
    }

    pub fn view(&self) -> CatalogView {
        self.with_store(ProductStore::view)
    }

    // =========================================================================
    // Load Lifecycle
    // =========================================================================

    /// Starts a load: bumps the generation and raises the loading flag.
    pub fn begin_load(&self) -> LoadTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.store.set_loading(true);
        debug!(generation = inner.generation, "Product load started");
        LoadTicket(inner.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.lock().generation == ticket.0
    }

    /// Applies a completed load if `ticket` is still the latest.
    ///
    /// Returns `false` (and changes nothing) for a stale ticket.
    pub fn finish_load(&self, ticket: LoadTicket, products: Vec<Product>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            warn!(
                ticket = ticket.0,
                latest = inner.generation,
                "Discarding stale product load"
            );
            return false;
        }

        inner.store.set_products(products);
        inner.store.mark_loaded(Utc::now());
        inner.store.set_loading(false);
        true
    }

    /// Ends a failed load. Existing products are kept.
    pub fn fail_load(&self, ticket: LoadTicket) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            debug!(ticket = ticket.0, "Stale product load failed, ignoring");
            return false;
        }
        inner.store.set_loading(false);
        true
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(catalog_core::DEFAULT_PAGE_SIZE)
    }
}
