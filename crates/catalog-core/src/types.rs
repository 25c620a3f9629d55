//! # Domain Types
//!
//! Core domain types used throughout the product catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ProductId     │   │  ProductDraft   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id?            │   │  "7" or 7 on    │   │  raw form input │       │
//! │  │  name           │   │  the wire, one  │   │  validated into │       │
//! │  │  price? (Price) │   │  string inside  │   │  a Product      │       │
//! │  │  category?      │   └─────────────────┘   └─────────────────┘       │
//! │  │  rating?        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Ingestion
//! The product API is a loosely typed JSON store. Records may carry a price
//! as `29.99` or `"29.99"`, an id as `7` or `"7"`, or omit fields entirely.
//! Deserialization never fails on those shapes; unusable values become
//! absent (`None`) and simply fail the filters that need them.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use ts_rs::TS;

use crate::money::Price;

// =============================================================================
// Product Id
// =============================================================================

/// Canonical product identifier.
///
/// The remote API may hand out numeric or string ids; both normalize to the
/// decimal string form so `7`, `7.0` and `"7"` are the same product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the id as a string slice (used in request paths).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(ProductId(s)),
            Value::Number(n) => Ok(ProductId(number_id(&n))),
            other => Err(de::Error::custom(format!(
                "product id must be a string or number, got {}",
                other
            ))),
        }
    }
}

/// Integral numbers print without a fraction, whatever JSON form they took.
fn number_id(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Identifier assigned by the API. Absent until the product is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<ProductId>,

    /// Display name. Missing on the wire means empty.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Price in major units, kept exactly as received.
    #[serde(default, with = "price_wire")]
    #[ts(type = "number | null")]
    pub price: Option<Price>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,

    /// Star rating, nominally 0-5.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub rating: Option<f64>,
}

impl Product {
    /// Creates an unpersisted product with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: None,
            price: None,
            category: None,
            rating: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Price>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// True once the API has assigned an id.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Raw product form input, before validation.
///
/// Turned into a [`Product`] by [`crate::validation::validate_draft`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in major units as typed into the form.
    pub price: f64,
    pub category: String,
    pub rating: f64,
}

impl From<&Product> for ProductDraft {
    /// Pre-fills the edit form from an existing product.
    fn from(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.map(|p| p.value()).unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            rating: product.rating.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Wire Helpers
// =============================================================================

/// Reads a JSON number or numeric string as a finite `f64`.
fn number_from_value(value: Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_from_value(Value::deserialize(deserializer)?))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

mod price_wire {
    use super::*;

    pub fn serialize<S>(price: &Option<Price>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match price {
            Some(price) => serializer.serialize_f64(price.value()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(number_from_value(Value::deserialize(deserializer)?).and_then(Price::new))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
