//! # Favorites
//!
//! Favorite product ids, persisted through a [`KeyValueStore`] as a JSON
//! array under [`FAVORITES_KEY`].

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use catalog_core::ProductId;

use crate::storage::{KeyValueStore, StorageError};

pub const FAVORITES_KEY: &str = "favoriteProductIds";

pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
    ids: Mutex<Vec<ProductId>>,
}

impl Favorites {
    /// Loads saved favorites. A missing or unreadable entry yields an empty
    /// set; the problem is logged, never returned.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ProductId>>(&raw) {
                Ok(mut ids) => {
                    dedup_in_order(&mut ids);
                    ids
                }
                Err(e) => {
                    warn!(error = %e, "Saved favorites are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read saved favorites, starting empty");
                Vec::new()
            }
        };

        debug!(count = ids.len(), "Favorites loaded");
        Favorites {
            store,
            ids: Mutex::new(ids),
        }
    }

    /// Adds or removes `id`, then persists the whole set.
    ///
    /// Returns whether `id` is now a favorite. If persisting fails the
    /// in-memory set is restored and the error returned.
    pub fn toggle(&self, id: &ProductId) -> Result<bool, StorageError> {
        let mut ids = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = ids.clone();

        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(i) => {
                ids.remove(i);
                false
            }
            None => {
                ids.push(id.clone());
                true
            }
        };

        let persisted = serde_json::to_string(&*ids)
            .map_err(StorageError::from)
            .and_then(|raw| self.store.set(FAVORITES_KEY, &raw));

        if let Err(e) = persisted {
            *ids = previous;
            return Err(e);
        }

        debug!(id = %id, favorite = now_favorite, "Favorite toggled");
        Ok(now_favorite)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    /// Favorite ids, in the order they were added.
    pub fn ids(&self) -> Vec<ProductId> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites").field("ids", &self.ids()).finish()
    }
}

fn dedup_in_order(ids: &mut Vec<ProductId>) {
    let mut seen = Vec::with_capacity(ids.len());
    ids.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });
}
