//! Redeemability check for the submitted discount code.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Money;
use crate::ports::DiscountLookup;

/// Rejects discount codes that cannot be redeemed here and now.
///
/// Checks run in a fixed order and the first failure wins: existence and
/// active flag, validity window at `as_of`, event scope, usage cap, minimum
/// purchase. A request without a code (or with a blank one) passes without
/// any lookup.
pub struct DiscountRedemptionValidator {
    discounts: Arc<dyn DiscountLookup>,
}

impl DiscountRedemptionValidator {
    pub fn new(discounts: Arc<dyn DiscountLookup>) -> Self {
        Self { discounts }
    }
}

#[async_trait]
impl CheckoutValidator for DiscountRedemptionValidator {
    fn name(&self) -> &'static str {
        "discount_redemption"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let Some(code) = ctx.request.discount_code() else {
            return Ok(());
        };
        let event = ctx.event()?;

        let discount = self
            .discounts
            .find_by_code(code)
            .await?
            .filter(|discount| discount.active)
            .ok_or_else(|| CheckoutError::InvalidDiscountCode { code: code.into() })?;

        if let Some(starts_at) = discount.starts_at {
            if ctx.as_of.is_before(&starts_at) {
                return Err(CheckoutError::DiscountNotYetActive { code: code.into() });
            }
        }
        if let Some(ends_at) = discount.ends_at {
            if ctx.as_of.is_after(&ends_at) {
                return Err(CheckoutError::DiscountExpired { code: code.into() });
            }
        }

        if !discount.scope.applies_to(&event.id) {
            return Err(CheckoutError::DiscountNotValidForEvent { code: code.into() });
        }

        if let Some(maximum_uses) = discount.maximum_uses {
            let used = self.discounts.count_usage(code).await?;
            if used >= maximum_uses {
                return Err(CheckoutError::DiscountMaxUsageReached { code: code.into() });
            }
        }

        if let Some(minimum) = discount.minimum_purchase {
            let subtotal =
                Money::from_dollars(ctx.checkout.seats_needed() as f64 * event.price);
            if subtotal.cents() < minimum.cents() {
                return Err(CheckoutError::MinimumPurchaseNotMet { subtotal, minimum });
            }
        }

        Ok(())
    }
}
