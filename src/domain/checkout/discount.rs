//! Discount value objects.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Money, Timestamp};

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Value is a percentage of the base cost.
    Percentage,
    /// Value is a flat dollar amount.
    FixedAmount,
}

impl FromStr for DiscountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed_amount" => Ok(DiscountKind::FixedAmount),
            other => Err(format!("unknown discount kind '{other}'")),
        }
    }
}

/// Which events a discount may be redeemed against.
///
/// Universality is its own variant rather than an empty restriction, so a
/// discount restricted to zero events applies nowhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DiscountScope {
    /// Applies to every event.
    Universal,
    /// Applies only to the listed events.
    RestrictedTo { events: HashSet<EventId> },
}

impl DiscountScope {
    /// Creates a scope restricted to the given events.
    pub fn restricted_to(events: impl IntoIterator<Item = EventId>) -> Self {
        DiscountScope::RestrictedTo {
            events: events.into_iter().collect(),
        }
    }

    /// True if the scope permits the given event.
    pub fn applies_to(&self, event: &EventId) -> bool {
        match self {
            DiscountScope::Universal => true,
            DiscountScope::RestrictedTo { events } => events.contains(event),
        }
    }
}

/// A code-activated price reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub code: String,
    pub active: bool,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub kind: DiscountKind,
    /// Percentage points or flat dollars, per `kind`.
    pub value: f64,
    /// Checkout subtotal required before the code may be redeemed.
    pub minimum_purchase: Option<Money>,
    /// Cap on total redemptions across all checkouts.
    pub maximum_uses: Option<u32>,
    pub scope: DiscountScope,
}

impl Discount {
    /// Creates an active, universally applicable discount with no window,
    /// minimum, or usage cap.
    pub fn new(code: impl Into<String>, kind: DiscountKind, value: f64) -> Self {
        Self {
            code: code.into(),
            active: true,
            starts_at: None,
            ends_at: None,
            kind,
            value,
            minimum_purchase: None,
            maximum_uses: None,
            scope: DiscountScope::Universal,
        }
    }
}
