//! The payment request submitted at checkout.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::DiscountKind;

/// Payment fields submitted by the client when finalizing a checkout.
///
/// The pipeline treats every field as untrusted input: the discount must
/// still be redeemable, the admin override must be authorized, and `amount`
/// must reconcile against the recomputed expected charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    /// Total the client intends to be charged, in dollars.
    pub amount: f64,
    pub discount_code: Option<String>,
    /// Percentage points or flat dollars, per the resolved discount's kind.
    pub discount_amount: f64,
    pub admin_discount_kind: Option<DiscountKind>,
    pub admin_discount_value: f64,
    pub admin_discount_reason: Option<String>,
    /// Prepaid company voucher seats to redeem.
    pub voucher_quantity: u32,
}

impl ProcessPaymentRequest {
    /// A plain request with no discounts or vouchers.
    pub fn for_amount(amount: f64) -> Self {
        Self {
            amount,
            discount_code: None,
            discount_amount: 0.0,
            admin_discount_kind: None,
            admin_discount_value: 0.0,
            admin_discount_reason: None,
            voucher_quantity: 0,
        }
    }

    /// Attaches a discount code and submitted discount amount.
    pub fn with_discount(mut self, code: impl Into<String>, amount: f64) -> Self {
        self.discount_code = Some(code.into());
        self.discount_amount = amount;
        self
    }

    /// Attaches an admin discount override.
    pub fn with_admin_discount(
        mut self,
        kind: DiscountKind,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        self.admin_discount_kind = Some(kind);
        self.admin_discount_value = value;
        self.admin_discount_reason = Some(reason.into());
        self
    }

    /// Attaches a voucher redemption.
    pub fn with_vouchers(mut self, quantity: u32) -> Self {
        self.voucher_quantity = quantity;
        self
    }

    /// Trimmed discount code, `None` when absent or blank.
    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// True if an admin discount override with a positive value is present.
    pub fn has_admin_discount(&self) -> bool {
        self.admin_discount_kind.is_some() && self.admin_discount_value > 0.0
    }
}
