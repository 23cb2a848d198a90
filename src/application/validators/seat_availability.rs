//! Capacity check against confirmed seats plus live holds.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::ports::{EnrollmentLookup, HoldCounter};

/// Rejects checkouts needing more seats than the session has left.
///
/// Available capacity is `max_enrollments` minus confirmed enrollments minus
/// seats held by other live checkouts, floored at zero. A session without
/// `max_enrollments` is unlimited and always passes. The validator's own
/// checkout is excluded from the hold count so it never competes with
/// itself.
pub struct SeatAvailabilityValidator {
    enrollments: Arc<dyn EnrollmentLookup>,
    holds: Arc<dyn HoldCounter>,
}

impl SeatAvailabilityValidator {
    pub fn new(enrollments: Arc<dyn EnrollmentLookup>, holds: Arc<dyn HoldCounter>) -> Self {
        Self { enrollments, holds }
    }
}

#[async_trait]
impl CheckoutValidator for SeatAvailabilityValidator {
    fn name(&self) -> &'static str {
        "seat_availability"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let session = ctx.event_session()?;
        let Some(max_enrollments) = session.max_enrollments else {
            return Ok(());
        };
        let requested = ctx.checkout.seats_needed();
        if requested == 0 {
            return Ok(());
        }

        let confirmed = self.enrollments.count_confirmed(&session.id).await?;
        let held = self
            .holds
            .count_in_progress_holds(&session.id, &ctx.checkout.id, ctx.as_of)
            .await?;
        let available = max_enrollments.saturating_sub(confirmed + held);
        if requested > available {
            return Err(CheckoutError::NotEnoughSeats {
                requested,
                available,
            });
        }
        Ok(())
    }
}
