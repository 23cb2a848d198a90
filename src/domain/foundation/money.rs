//! Money value object using integer minor units.
//!
//! Charge amounts arrive and leave the pipeline as f64 dollar values, but all
//! comparison happens on integer cents. Conversion rounds half away from zero
//! to 2 decimal places, which reproduces the externally observable behavior of
//! formatting to 2 decimals and comparing with a 0.001 tolerance: once both
//! sides are whole cents, any real mismatch is at least a full cent apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency amount held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Creates a Money from a raw cent count.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a Money from a dollar amount, rounding half away from zero
    /// to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a dollar value.
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Adds two amounts.
    pub fn plus(&self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Subtracts another amount, flooring the result at zero.
    pub fn saturating_minus(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// True if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_dollars())
    }
}
