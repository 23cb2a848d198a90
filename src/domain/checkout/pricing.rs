//! Expected charge computation.
//!
//! The formula and its order of operations are load-bearing: coverages are
//! computed in f64, summed, subtracted from the base cost, clamped at zero,
//! and only then rounded to cents. Rounding each coverage individually would
//! diverge from the observable amounts on stacked percentage discounts.

use crate::domain::checkout::DiscountKind;
use crate::domain::foundation::Money;

/// A price reduction expressed as a kind plus a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub kind: DiscountKind,
    pub value: f64,
}

impl Coverage {
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            value,
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            kind: DiscountKind::FixedAmount,
            value,
        }
    }

    /// Dollar amount this coverage removes from the given base cost.
    fn dollars_against(&self, base_cost: f64) -> f64 {
        match self.kind {
            DiscountKind::Percentage => base_cost * (self.value / 100.0),
            DiscountKind::FixedAmount => self.value,
        }
    }
}

/// Inputs to the expected-charge computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInputs {
    /// Unit price per seat, in dollars.
    pub event_price: f64,
    /// Selected, non-waitlisted attendee count.
    pub seats: u32,
    /// Prepaid voucher seats being redeemed.
    pub voucher_quantity: u32,
    /// Code-activated discount, already validated upstream.
    pub discount: Option<Coverage>,
    /// Admin override, already authorized upstream.
    pub admin_discount: Option<Coverage>,
}

/// Computes the charge the client must submit.
///
/// ```text
/// base     = seats x event_price
/// coverage = vouchers x event_price + discount + admin override
/// expected = max(0, base - coverage)
/// ```
pub fn expected_charge(inputs: PriceInputs) -> Money {
    let base_cost = inputs.seats as f64 * inputs.event_price;
    let voucher_coverage = inputs.voucher_quantity as f64 * inputs.event_price;
    let discount_coverage = inputs
        .discount
        .map(|coverage| coverage.dollars_against(base_cost))
        .unwrap_or(0.0);
    let admin_coverage = inputs
        .admin_discount
        .map(|coverage| coverage.dollars_against(base_cost))
        .unwrap_or(0.0);

    let total_coverage = voucher_coverage + discount_coverage + admin_coverage;
    let expected = (base_cost - total_coverage).max(0.0);

    Money::from_dollars(expected)
}
