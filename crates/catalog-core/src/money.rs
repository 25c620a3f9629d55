//! # Money Module
//!
//! Two price representations with separate jobs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  API JSON "price": 19.996                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Price(19.996)   exact wire value                                       │
//! │        ├──► price buckets   19.996 < 20 → "under20"                     │
//! │        ├──► price sort      f64::total_cmp, so 19.996 sorts before 20   │
//! │        └──► PUT / POST body unchanged                                   │
//! │                                                                         │
//! │  Money(2000)     whole cents                                            │
//! │        └──► display only ("GH¢20.00")                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding to cents happens only when a price is shown, never before a
//! comparison or a write.
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::{Money, Price};
//!
//! let price = Price::new(19.996).unwrap();
//! assert!(price.value() < 20.0);
//! assert_eq!(price.to_money().unwrap().cents(), 2000);
//!
//! let listed = Price::from(Money::from_cents(1099));
//! assert_eq!(listed.value(), 10.99);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents / pesewas).
///
///
/// Used for display. Filtering and sorting work on [`Price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount into Money.
    ///
    /// Rounds to the nearest cent. Returns `None` for NaN, infinities and
    /// values that do not fit in an `i64` cent count.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(19.99).unwrap().cents(), 1999);
    /// assert_eq!(Money::from_major(20.0).unwrap().cents(), 2000);
    /// assert!(Money::from_major(f64::NAN).is_none());
    /// ```
    pub fn from_major(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units.
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major_part(), 10);
    /// assert_eq!(Money::from_cents(-550).major_part(), -5);
    /// ```
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Price Type
// =============================================================================

/// A product price in major units, exactly as the API reports it.
///
/// Always finite. Not rounded, so bucket edges and sort order see the real
/// value (`19.996` is under 20).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Returns `None` for NaN and infinities.
    pub fn new(amount: f64) -> Option<Self> {
        amount.is_finite().then_some(Price(amount))
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Rounds to whole cents for display. `None` if the value does not fit.
    pub fn to_money(&self) -> Option<Money> {
        Money::from_major(self.0)
    }

    /// Total order over prices (all finite, so this matches `<`).
    pub fn total_cmp(&self, other: &Price) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<Money> for Price {
    fn from(money: Money) -> Self {
        Price(money.to_major())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering ("10.99", "-5.50").
///
/// ## Note
/// The currency symbol is a display concern owned by the dashboard config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
