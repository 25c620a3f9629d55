//! # Favorite Commands

use tracing::debug;

use catalog_core::{Product, ProductId};

use crate::error::ApiError;
use crate::state::{CatalogState, Favorites};

/// Returns whether the product is a favorite after the toggle.
pub fn toggle_favorite(favorites: &Favorites, id: &ProductId) -> Result<bool, ApiError> {
    debug!(id = %id, "toggle_favorite command");
    Ok(favorites.toggle(id)?)
}

pub fn list_favorites(favorites: &Favorites) -> Vec<ProductId> {
    favorites.ids()
}

/// Favorite products present in the loaded catalog, in favorite order.
///
/// Ids whose product is no longer loaded are skipped.
pub fn favorite_products(catalog: &CatalogState, favorites: &Favorites) -> Vec<Product> {
    let ids = favorites.ids();
    catalog.with_store(|store| {
        ids.iter()
            .filter_map(|id| store.find(id).cloned())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
    use std::sync::Arc;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("read-only".into()))
        }
    }

    #[test]
    fn test_favorite_products_follow_catalog() {
        let catalog = CatalogState::new(10);
        let ticket = catalog.begin_load();
        catalog.finish_load(
            ticket,
            vec![
                Product::named("Desk Lamp").with_id(1),
                Product::named("Notebook").with_id(2),
            ],
        );

        let favorites = Favorites::load(Arc::new(MemoryStore::new()));
        toggle_favorite(&favorites, &ProductId::from(2)).unwrap();
        toggle_favorite(&favorites, &ProductId::from(99)).unwrap();

        assert_eq!(list_favorites(&favorites).len(), 2);

        let products = favorite_products(&catalog, &favorites);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Notebook");
    }

    #[test]
    fn test_storage_failure_maps_to_storage_error() {
        let favorites = Favorites::load(Arc::new(ReadOnlyStore));
        let err = toggle_favorite(&favorites, &ProductId::from(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(list_favorites(&favorites).is_empty());
    }
}
