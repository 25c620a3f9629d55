//! # Filter Commands
//!
//! Filter, sort and pagination changes. All synchronous: each one updates the
//! store and returns the new view.

use tracing::debug;

use catalog_core::{CatalogView, CategoryFilter, PriceFilter, RatingFilter, SortOrder};

use crate::error::ApiError;
use crate::state::CatalogState;

/// `"all"` (or empty) clears the category filter.
pub fn set_category_filter(catalog: &CatalogState, category: &str) -> CatalogView {
    debug!(category, "set_category_filter command");
    catalog.with_store_mut(|store| {
        store.set_category_filter(CategoryFilter::from(category));
        store.view()
    })
}

pub fn set_price_filter(catalog: &CatalogState, price: PriceFilter) -> CatalogView {
    debug!(?price, "set_price_filter command");
    catalog.with_store_mut(|store| {
        store.set_price_filter(price);
        store.view()
    })
}

/// Accepts `"all"` or a star count `"1"` to `"5"`.
pub fn set_rating_filter(catalog: &CatalogState, rating: &str) -> Result<CatalogView, ApiError> {
    debug!(rating, "set_rating_filter command");
    let rating: RatingFilter = rating.parse()?;
    Ok(catalog.with_store_mut(|store| {
        store.set_rating_filter(rating);
        store.view()
    }))
}

pub fn set_search_filter(catalog: &CatalogState, search: &str) -> CatalogView {
    debug!(search, "set_search_filter command");
    catalog.with_store_mut(|store| {
        store.set_search_filter(search);
        store.view()
    })
}

pub fn set_sort_order(catalog: &CatalogState, order: SortOrder) -> CatalogView {
    debug!(?order, "set_sort_order command");
    catalog.with_store_mut(|store| {
        store.set_sort_order(order);
        store.view()
    })
}

/// Out-of-range pages are clamped by the store.
pub fn set_page(catalog: &CatalogState, page: usize) -> CatalogView {
    debug!(page, "set_page command");
    catalog.with_store_mut(|store| {
        store.set_current_page(page);
        store.view()
    })
}

pub fn set_page_size(catalog: &CatalogState, page_size: usize) -> Result<CatalogView, ApiError> {
    debug!(page_size, "set_page_size command");
    catalog.with_store_mut(|store| -> Result<CatalogView, ApiError> {
        store.set_page_size(page_size)?;
        Ok(store.view())
    })
}

/// Clears every filter and the sort order.
pub fn reset_filters(catalog: &CatalogState) -> CatalogView {
    debug!("reset_filters command");
    catalog.with_store_mut(|store| {
        store.reset_filters();
        store.view()
    })
}

pub fn get_catalog_view(catalog: &CatalogState) -> CatalogView {
    catalog.view()
}
