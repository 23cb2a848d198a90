//! Redeemability check for prepaid voucher seats.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::ports::VoucherLookup;

/// Rejects voucher redemptions the company's pool cannot cover.
///
/// The pool is the sum of `total_seats` across the company's currently
/// redeemable vouchers minus the seats already consumed, floored at zero.
/// A checkout that resolves to no event is treated as not voucher eligible
/// rather than as a broken reference, since eligibility cannot be
/// established either way.
pub struct VoucherRedemptionValidator {
    vouchers: Arc<dyn VoucherLookup>,
}

impl VoucherRedemptionValidator {
    pub fn new(vouchers: Arc<dyn VoucherLookup>) -> Self {
        Self { vouchers }
    }
}

#[async_trait]
impl CheckoutValidator for VoucherRedemptionValidator {
    fn name(&self) -> &'static str {
        "voucher_redemption"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let requested = ctx.request.voucher_quantity;
        if requested == 0 {
            return Ok(());
        }

        let Ok(event) = ctx.event() else {
            return Err(CheckoutError::EventNotVoucherEligible);
        };
        if !event.is_voucher_eligible {
            return Err(CheckoutError::EventNotVoucherEligible);
        }

        let pool: u32 = self
            .vouchers
            .find_active_for_company(&ctx.company.id, ctx.as_of)
            .await?
            .iter()
            .map(|voucher| voucher.total_seats)
            .sum();
        let used = self.vouchers.count_usage(&ctx.company.id).await?;
        let remaining = pool.saturating_sub(used);
        if requested > remaining {
            return Err(CheckoutError::InsufficientVoucherSeats {
                requested,
                remaining,
            });
        }
        Ok(())
    }
}
