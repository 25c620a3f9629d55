//! # Product Store
//!
//! Single source of truth for the catalog view: the full product set, the
//! active filters, sort order, pagination, and the derived visible page.
//!
//! ## Recompute on Every Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  set_products ─────────┐                                               │
//! │  set_*_filter ──┐      │                                               │
//! │  set_sort_order ┼─► page = 1 ──┐                                        │
//! │  set_page_size ─┤              ├──► engine::run ──► visible page       │
//! │  reset_filters ─┘              │                    total_matched      │
//! │  set_current_page ─────────────┘                    total_pages        │
//! │                                                     current_page       │
//! │                                                     (clamped)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and do no I/O. The derived fields are
//! always consistent with the inputs after any call returns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::engine::{self, PageRequest};
use crate::filter::{CategoryFilter, FilterCriteria, PriceFilter, RatingFilter, SortOrder};
use crate::types::{Product, ProductId};
use crate::validation::{validate_page_size, ValidationResult};
use crate::DEFAULT_PAGE_SIZE;

// =============================================================================
// Product Store
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    categories: Vec<String>,
    loading: bool,
    criteria: FilterCriteria,
    sort_order: SortOrder,
    current_page: usize,
    page_size: usize,
    visible: Vec<Product>,
    total_matched: usize,
    total_pages: usize,
    last_loaded_at: Option<DateTime<Utc>>,
}

impl Default for ProductStore {
    fn default() -> Self {
        ProductStore::new(DEFAULT_PAGE_SIZE)
    }
}

impl ProductStore {
    /// Creates an empty store. A `page_size` of 0 falls back to the default.
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        let mut store = ProductStore {
            products: Vec::new(),
            categories: Vec::new(),
            loading: false,
            criteria: FilterCriteria::default(),
            sort_order: SortOrder::None,
            current_page: 1,
            page_size,
            visible: Vec::new(),
            total_matched: 0,
            total_pages: 1,
            last_loaded_at: None,
        };
        store.recompute();
        store
    }

    // -------------------------------------------------------------------------
    // Product set
    // -------------------------------------------------------------------------

    /// Replaces the full product set.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    /// Records when the product set was last fetched.
    pub fn mark_loaded(&mut self, at: DateTime<Utc>) {
        self.last_loaded_at = Some(at);
    }

    /// Replaces the category list, dropping duplicates and keeping first-seen order.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        self.categories = unique;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // -------------------------------------------------------------------------
    // Filters and sort (all reset to page 1)
    // -------------------------------------------------------------------------

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.reset_page();
    }

    pub fn set_price_filter(&mut self, price: PriceFilter) {
        self.criteria.price = price;
        self.reset_page();
    }

    pub fn set_rating_filter(&mut self, rating: RatingFilter) {
        self.criteria.rating = rating;
        self.reset_page();
    }

    pub fn set_search_filter(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.reset_page();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.reset_page();
    }

    /// Restores every filter and the sort order to defaults.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort_order = SortOrder::None;
        self.reset_page();
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Moves to a page. Out-of-range pages are clamped.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.recompute();
    }

    /// Changes the page size and returns to page 1.
    ///
    /// ## Errors
    /// Rejects sizes outside `1..=MAX_PAGE_SIZE`; the store is left unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> ValidationResult<()> {
        validate_page_size(page_size)?;
        self.page_size = page_size;
        self.reset_page();
        Ok(())
    }

    fn reset_page(&mut self) {
        self.current_page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        let slice = engine::run(
            &self.products,
            &self.criteria,
            self.sort_order,
            PageRequest::new(self.current_page, self.page_size),
        );

        self.visible = slice.items;
        self.total_matched = slice.total_matched;
        self.total_pages = slice.total_pages;
        self.current_page = slice.page;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The products on the current page.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_products(&self) -> usize {
        self.products.len()
    }

    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }

    /// Looks up a product in the full set by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_ref() == Some(id))
    }

    /// Snapshot for the view layer.
    pub fn view(&self) -> CatalogView {
        CatalogView {
            products: self.visible.clone(),
            categories: self.categories.clone(),
            loading: self.loading,
            filters: self.criteria.clone(),
            sort_order: self.sort_order,
            current_page: self.current_page,
            page_size: self.page_size,
            total_products: self.products.len(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            last_loaded_at: self.last_loaded_at,
        }
    }
}

// =============================================================================
// Catalog View DTO
// =============================================================================

/// What the dashboard page renders.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// The current page of products.
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub filters: FilterCriteria,
    pub sort_order: SortOrder,
    #[ts(type = "number")]
    pub current_page: usize,
    #[ts(type = "number")]
    pub page_size: usize,
    /// Size of the full, unfiltered set.
    #[ts(type = "number")]
    pub total_products: usize,
    #[ts(type = "number")]
    pub total_matched: usize,
    #[ts(type = "number")]
    pub total_pages: usize,
    #[ts(as = "Option<String>")]
    pub last_loaded_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Unit Tests
// =============================================================================
