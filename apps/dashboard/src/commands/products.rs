//! # Product Commands
//!
//! Loading the catalog and product CRUD.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Update Product Flow                                  │
//! │                                                                         │
//! │  update_product(id, draft)                                             │
//! │       │                                                                 │
//! │       ├── id missing?   ──► MISSING_ID        (no request sent)        │
//! │       ├── draft invalid? ─► VALIDATION_ERROR  (no request sent)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PUT /products/{id}                                                    │
//! │       │                                                                 │
//! │       ├── failed ──► NETWORK_ERROR "Failed to update product"          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_products()  (refetch full set, new LoadTicket)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use catalog_client::ProductRepository;
use catalog_core::validation::{validate_draft, validate_product_id};
use catalog_core::{CatalogView, CoreError, Product, ProductDraft, ProductId};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Fetches the whole product set and applies it to the store.
///
/// A response that arrives after a newer load started is dropped; the
/// returned view then reflects whatever the newer load applied.
pub async fn load_products(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
) -> Result<CatalogView, ApiError> {
    let start = Instant::now();
    let ticket = catalog.begin_load();

    debug!(generation = ticket.generation(), "load_products command");

    match repo.fetch_products(None).await {
        Ok(page) => {
            let count = page.products.len();
            let applied = catalog.finish_load(ticket, page.products);
            info!(
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                count,
                applied,
                "load_products complete"
            );
            Ok(catalog.view())
        }
        Err(e) => {
            catalog.fail_load(ticket);
            Err(ApiError::request_failed("fetch products", e))
        }
    }
}

/// Fetches category names for the filter dropdown.
pub async fn load_categories(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
) -> Result<Vec<String>, ApiError> {
    debug!("load_categories command");

    let categories = repo
        .get_categories()
        .await
        .map_err(|e| ApiError::request_failed("fetch categories", e))?;

    catalog.with_store_mut(|store| store.set_categories(categories));
    Ok(catalog.with_store(|store| store.categories().to_vec()))
}

/// Loads products and categories concurrently.
///
/// Category failures only lose the dropdown contents; product failures are
/// returned.
pub async fn refresh(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
) -> Result<CatalogView, ApiError> {
    let (products, categories) =
        tokio::join!(load_products(repo, catalog), load_categories(repo, catalog));

    if let Err(e) = categories {
        warn!(error = %e, "Categories unavailable, keeping previous list");
    }

    products?;
    Ok(catalog.view())
}

/// Fetches a single product for the detail view.
pub async fn view_product(
    repo: &dyn ProductRepository,
    id: &ProductId,
) -> Result<Product, ApiError> {
    debug!(id = %id, "view_product command");

    repo.get_product_by_id(id)
        .await
        .map_err(|e| ApiError::request_failed("fetch product", e))
}

/// Looks a product up in the loaded catalog without a request, e.g. to
/// pre-fill the edit form.
pub fn find_loaded_product(catalog: &CatalogState, id: &ProductId) -> Result<Product, ApiError> {
    catalog
        .with_store(|store| store.find(id).cloned())
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
}

/// Validates the form, creates the product, then refetches the catalog.
pub async fn create_product(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
    draft: &ProductDraft,
) -> Result<Product, ApiError> {
    debug!(name = %draft.name, "create_product command");

    let product = validate_draft(draft)?;
    let created = repo
        .create_product(&product)
        .await
        .map_err(|e| ApiError::request_failed("create product", e))?;

    if created.is_persisted() {
        info!(id = ?created.id, name = %created.name, "Product created");
    } else {
        warn!(name = %created.name, "Created product came back without an id");
    }
    refetch_after("create", repo, catalog).await;
    Ok(created)
}

/// Replaces an existing product, then refetches the catalog.
pub async fn update_product(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
    id: Option<&ProductId>,
    draft: &ProductDraft,
) -> Result<Product, ApiError> {
    debug!(id = ?id, "update_product command");

    let id = validate_product_id(id, "update")?;
    let product = validate_draft(draft)?;

    let updated = repo
        .update_product(&id, &product)
        .await
        .map_err(|e| ApiError::request_failed("update product", e))?;

    info!(id = %id, "Product updated");
    refetch_after("update", repo, catalog).await;
    Ok(updated)
}

/// Deletes a product, then refetches the catalog.
pub async fn delete_product(
    repo: &dyn ProductRepository,
    catalog: &CatalogState,
    id: Option<&ProductId>,
) -> Result<(), ApiError> {
    debug!(id = ?id, "delete_product command");

    let id = validate_product_id(id, "delete")?;
    repo.delete_product(&id)
        .await
        .map_err(|e| ApiError::request_failed("delete product", e))?;

    info!(id = %id, "Product deleted");
    refetch_after("delete", repo, catalog).await;
    Ok(())
}

/// The mutation already succeeded, so a failed refetch only leaves the table
/// stale until the next load.
async fn refetch_after(operation: &str, repo: &dyn ProductRepository, catalog: &CatalogState) {
    if let Err(e) = load_products(repo, catalog).await {
        warn!(operation, error = %e, "Refetch after mutation failed");
    }
}
