//! # Filter / Sort / Paginate Engine
//!
//! The single pure function that turns the full product set plus the view's
//! selections into the page the user sees.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  all products ──► filter_products ──► sort_products ──► paginate       │
//! │   (N items)        (criteria)          (stable)         (clamped page) │
//! │                        │                                     │          │
//! │                        └── total_matched ──► total_pages ────┘          │
//! │                                                                         │
//! │  total_pages = max(1, ceil(total_matched / page_size))                 │
//! │  page        = clamp(requested, 1, total_pages)                        │
//! │  items       = matched[(page-1)*size .. page*size]                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here allocates more than the visible page: filtering and sorting
//! work on references and only the sliced items are cloned.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::filter::{FilterCriteria, SortOrder};
use crate::money::Price;
use crate::types::Product;

// =============================================================================
// Page Request / Page Slice
// =============================================================================

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        PageRequest { page, page_size }
    }
}

/// One page of results plus the counts the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_matched: usize,
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub page: usize,
}

// =============================================================================
// Engine Functions
// =============================================================================

/// Keeps the products that pass every criterion, in input order.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// Stable sort by price. Unpriced products go last in both directions.
pub fn sort_products<P: Borrow<Product>>(items: &mut [P], order: SortOrder) {
    let descending = match order {
        SortOrder::None => return,
        SortOrder::PriceAsc => false,
        SortOrder::PriceDesc => true,
    };

    items.sort_by(|a, b| compare_prices(a.borrow().price, b.borrow().price, descending));
}

fn compare_prices(a: Option<Price>, b: Option<Price>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Number of pages needed for `total` items. Never less than 1.
///
/// A `page_size` of 0 is treated as 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slices out the requested page, clamping the page into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let size = page_size.max(1);
    let total_matched = items.len();
    let total_pages = page_count(total_matched, size);
    let page = page.clamp(1, total_pages);

    let start = (page - 1).saturating_mul(size).min(total_matched);
    let end = start.saturating_add(size).min(total_matched);

    PageSlice {
        items: items[start..end].to_vec(),
        total_matched,
        total_pages,
        page,
    }
}

/// Runs the whole pipeline.
///
/// ## Example
/// ```rust
/// use catalog_core::engine::{run, PageRequest};
/// use catalog_core::filter::{FilterCriteria, SortOrder};
/// use catalog_core::types::Product;
///
/// let products: Vec<Product> = (0..25).map(|i| Product::named(format!("P{}", i))).collect();
/// let page = run(&products, &FilterCriteria::default(), SortOrder::None, PageRequest::new(3, 10));
///
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn run(
    products: &[Product],
    criteria: &FilterCriteria,
    order: SortOrder,
    request: PageRequest,
) -> PageSlice<Product> {
    let mut matched = filter_products(products, criteria);
    sort_products(&mut matched, order);

    let slice = paginate(&matched, request.page, request.page_size);
    PageSlice {
        items: slice.items.into_iter().cloned().collect(),
        total_matched: slice.total_matched,
        total_pages: slice.total_pages,
        page: slice.page,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, PriceFilter, RatingFilter};
    use crate::money::Money;

    fn product(id: i64, price_cents: Option<i64>) -> Product {
        let mut p = Product::named(format!("Product {}", id)).with_id(id);
        p.price = price_cents.map(|cents| Money::from_cents(cents).into());
        p
    }

    fn ids(items: &[Product]) -> Vec<String> {
        items
            .iter()
            .filter_map(|p| p.id.as_ref().map(|id| id.to_string()))
            .collect()
    }

    /// A varied catalog for property-style checks.
    fn sample_catalog() -> Vec<Product> {
        let categories = ["Electronics", "books", "Kitchen"];
        (0..40)
            .map(|i| {
                let mut p = product(i, if i % 7 == 0 { None } else { Some(i * 173 % 9000) });
                p.category = Some(categories[i as usize % 3].to_string());
                p.rating = if i % 5 == 0 { None } else { Some((i % 11) as f64 / 2.0) };
                if i % 4 == 0 {
                    p.name = format!("Phone {}", i);
                }
                p
            })
            .collect()
    }

    fn all_criteria() -> Vec<FilterCriteria> {
        let mut out = Vec::new();
        for price in [PriceFilter::All, PriceFilter::Under20, PriceFilter::Under50, PriceFilter::Above50] {
            for rating in [RatingFilter::All, RatingFilter::Stars(1), RatingFilter::Stars(3), RatingFilter::Stars(5)] {
                for category in [CategoryFilter::All, CategoryFilter::from("BOOKS")] {
                    for search in ["", "phone"] {
                        out.push(FilterCriteria {
                            category: category.clone(),
                            price,
                            rating,
                            search: search.to_string(),
                        });
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_under20_scenario() {
        let products = vec![product(1, Some(1500)), product(2, Some(2500)), product(3, Some(5500))];
        let criteria = FilterCriteria {
            price: PriceFilter::Under20,
            ..Default::default()
        };

        let page = run(&products, &criteria, SortOrder::None, PageRequest::new(1, 10));
        assert_eq!(ids(&page.items), vec!["1"]);
        assert_eq!(page.total_matched, 1);
    }

    #[test]
    fn test_rating_scenario() {
        let ratings = [Some(1.0), Some(2.5), Some(3.0), None];
        let products: Vec<Product> = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let mut p = product(i as i64, Some(100));
                p.rating = *r;
                p
            })
            .collect();
        let criteria = FilterCriteria {
            rating: RatingFilter::Stars(3),
            ..Default::default()
        };

        let page = run(&products, &criteria, SortOrder::None, PageRequest::new(1, 10));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items.iter().filter(|p| p.rating == Some(3.0)).count(), 1);
        assert!(page.items.iter().all(|p| p.rating.unwrap() > 2.0));
    }

    #[test]
    fn test_third_page_of_twenty_five() {
        let products: Vec<Product> = (0..25).map(|i| product(i, Some(100))).collect();
        let page = run(&products, &FilterCriteria::default(), SortOrder::None, PageRequest::new(3, 10));

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_matched, 25);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let products: Vec<Product> = (0..12).map(|i| product(i, Some(100))).collect();
        let page = run(&products, &FilterCriteria::default(), SortOrder::None, PageRequest::new(5, 10));

        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first() {
        let products: Vec<Product> = (0..3).map(|i| product(i, Some(100))).collect();
        let page = paginate(&products, 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_empty_set_has_one_page() {
        let page = run(&[], &FilterCriteria::default(), SortOrder::PriceAsc, PageRequest::new(4, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_matched, 0);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let products: Vec<Product> = (0..3).map(|i| product(i, Some(100))).collect();
        let page = paginate(&products, 2, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page_count(0, 0), 1);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let products = vec![product(1, Some(3000)), product(2, Some(1000)), product(3, Some(2000))];

        let mut asc = products.clone();
        sort_products(&mut asc, SortOrder::PriceAsc);
        assert_eq!(ids(&asc), vec!["2", "3", "1"]);

        let mut desc = products.clone();
        sort_products(&mut desc, SortOrder::PriceDesc);
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);

        let mut none = products.clone();
        sort_products(&mut none, SortOrder::None);
        assert_eq!(ids(&none), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_is_stable_and_unpriced_last() {
        let products = vec![
            product(1, None),
            product(2, Some(500)),
            product(3, Some(500)),
            product(4, Some(100)),
            product(5, None),
        ];

        let mut asc = products.clone();
        sort_products(&mut asc, SortOrder::PriceAsc);
        assert_eq!(ids(&asc), vec!["4", "2", "3", "1", "5"]);

        let mut desc = products;
        sort_products(&mut desc, SortOrder::PriceDesc);
        assert_eq!(ids(&desc), vec!["2", "3", "4", "1", "5"]);
    }

    #[test]
    fn test_sort_orders_sub_cent_prices_exactly() {
        let mut products = vec![product(1, Some(2000)), product(2, None)];
        products[1].price = Price::new(19.996);

        let mut asc = products.clone();
        sort_products(&mut asc, SortOrder::PriceAsc);
        assert_eq!(ids(&asc), vec!["2", "1"]);

        let mut desc = products;
        sort_products(&mut desc, SortOrder::PriceDesc);
        assert_eq!(ids(&desc), vec!["1", "2"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = sample_catalog();
        for criteria in all_criteria() {
            let once: Vec<Product> = filter_products(&catalog, &criteria).into_iter().cloned().collect();
            let twice: Vec<Product> = filter_products(&once, &criteria).into_iter().cloned().collect();
            assert_eq!(once, twice, "criteria {:?}", criteria);
        }
    }

    #[test]
    fn test_filtering_is_conjunction_of_single_filters() {
        let catalog = sample_catalog();
        for criteria in all_criteria() {
            let combined = filter_products(&catalog, &criteria);

            let singles = [
                FilterCriteria { search: criteria.search.clone(), ..Default::default() },
                FilterCriteria { category: criteria.category.clone(), ..Default::default() },
                FilterCriteria { price: criteria.price, ..Default::default() },
                FilterCriteria { rating: criteria.rating, ..Default::default() },
            ];
            let expected: Vec<&Product> = catalog
                .iter()
                .filter(|p| singles.iter().all(|c| c.matches(p)))
                .collect();

            assert_eq!(combined, expected, "criteria {:?}", criteria);
        }
    }

    #[test]
    fn test_default_criteria_keep_everything() {
        let catalog = sample_catalog();
        assert_eq!(filter_products(&catalog, &FilterCriteria::default()).len(), catalog.len());
    }

    #[test]
    fn test_pages_partition_the_matched_set() {
        let catalog = sample_catalog();
        for criteria in all_criteria() {
            for size in [1, 3, 10, 50] {
                let first = run(&catalog, &criteria, SortOrder::PriceAsc, PageRequest::new(1, size));
                let mut collected = Vec::new();
                for page in 1..=first.total_pages {
                    let slice = run(&catalog, &criteria, SortOrder::PriceAsc, PageRequest::new(page, size));
                    assert!(slice.items.len() <= size);
                    collected.extend(slice.items);
                }

                let mut all = filter_products(&catalog, &criteria);
                sort_products(&mut all, SortOrder::PriceAsc);
                let expected: Vec<Product> = all.into_iter().cloned().collect();

                assert_eq!(collected, expected);
                assert_eq!(first.total_pages, page_count(expected.len(), size));
            }
        }
    }
}
