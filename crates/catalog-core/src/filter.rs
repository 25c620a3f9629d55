//! # Filter Criteria
//!
//! The four catalog filters and the sort order the view can select.
//!
//! ## How Filters Combine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product ──► search ──► category ──► price ──► rating ──► matched      │
//! │                                                                         │
//! │  Every filter is a plain predicate. A product is visible only when     │
//! │  ALL four accept it; "all" / "" accept everything.                     │
//! │                                                                         │
//! │  price buckets (exact price)      rating buckets ("N")                 │
//! │  ─────────────────────────        ─────────────────────                │
//! │  under20   price <  20            N-1 < rating <= N                    │
//! │  under50   20 <= price < 50       missing / NaN rating never matches   │
//! │  above50   price >= 50                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Price;
use crate::types::Product;

const UNDER_20: f64 = 20.0;
const UNDER_50: f64 = 50.0;

// =============================================================================
// Category Filter
// =============================================================================

/// Category selection. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Returns true if a product with this category passes the filter.
    ///
    /// Products without a category never match a named category.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(wanted) => category
                .map(|c| c.to_lowercase() == wanted.to_lowercase())
                .unwrap_or(false),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

// =============================================================================
// Price Filter
// =============================================================================

/// Price bucket selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum PriceFilter {
    #[default]
    All,
    /// price < 20
    Under20,
    /// 20 <= price < 50
    Under50,
    /// price >= 50
    Above50,
}

impl PriceFilter {
    /// Returns true if a product with this price passes the filter.
    ///
    /// An absent price only passes `All`.
    pub fn matches(&self, price: Option<Price>) -> bool {
        match (self, price.map(|p| p.value())) {
            (PriceFilter::All, _) => true,
            (_, None) => false,
            (PriceFilter::Under20, Some(value)) => value < UNDER_20,
            (PriceFilter::Under50, Some(value)) => (UNDER_20..UNDER_50).contains(&value),
            (PriceFilter::Above50, Some(value)) => value >= UNDER_50,
        }
    }
}

// =============================================================================
// Rating Filter
// =============================================================================

/// Star rating bucket. `Stars(n)` accepts ratings in `(n-1, n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RatingFilter {
    #[default]
    All,
    Stars(u8),
}

impl RatingFilter {
    pub fn matches(&self, rating: Option<f64>) -> bool {
        match (self, rating) {
            (RatingFilter::All, _) => true,
            (RatingFilter::Stars(_), None) => false,
            (RatingFilter::Stars(n), Some(r)) => {
                let upper = f64::from(*n);
                r.is_finite() && r > upper - 1.0 && r <= upper
            }
        }
    }
}

impl TryFrom<String> for RatingFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for RatingFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(RatingFilter::All);
        }

        match s.parse::<u8>() {
            Ok(n @ 1..=5) => Ok(RatingFilter::Stars(n)),
            _ => Err(ValidationError::NotAllowed {
                field: "rating".to_string(),
                allowed: ["all", "1", "2", "3", "4", "5"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str("all"),
            RatingFilter::Stars(n) => write!(f, "{}", n),
        }
    }
}

impl From<RatingFilter> for String {
    fn from(filter: RatingFilter) -> Self {
        filter.to_string()
    }
}

// =============================================================================
// Sort Order
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The full set of active filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[ts(as = "String")]
    pub category: CategoryFilter,
    pub price: PriceFilter,
    #[ts(as = "String")]
    pub rating: RatingFilter,
    /// Case-insensitive substring of the product name. Used as given.
    pub search: String,
}

impl FilterCriteria {
    /// Returns true if the product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(&product.name)
            && self.category.matches(product.category.as_deref())
            && self.price.matches(product.price)
            && self.rating.matches(product.rating)
    }

    fn matches_search(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// True when no filter narrows the set.
    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
