//! The rule validators that gate checkout settlement.
//!
//! Each validator inspects the [`ValidationContext`] plus its lookup ports
//! and either passes or fails with one typed [`CheckoutError`]. Validators
//! are stateless with respect to each other and side-effect-free; the
//! pipeline composes them explicitly in the canonical order (no runtime
//! discovery).

use async_trait::async_trait;

use crate::application::ValidationContext;
use crate::domain::checkout::CheckoutError;

mod admin_discount_authorization;
mod attendee_already_enrolled;
mod attendee_already_waitlisted;
mod discount_redemption;
mod price_reconciliation;
mod seat_availability;
mod unique_attendee_emails;
mod voucher_redemption;

pub use admin_discount_authorization::AdminDiscountAuthorizationValidator;
pub use attendee_already_enrolled::AttendeeAlreadyEnrolledValidator;
pub use attendee_already_waitlisted::AttendeeAlreadyWaitlistedValidator;
pub use discount_redemption::DiscountRedemptionValidator;
pub use price_reconciliation::PriceReconciliationValidator;
pub use seat_availability::SeatAvailabilityValidator;
pub use unique_attendee_emails::UniqueAttendeeEmailsValidator;
pub use voucher_redemption::VoucherRedemptionValidator;

/// One rule check in the checkout pipeline.
#[async_trait]
pub trait CheckoutValidator: Send + Sync {
    /// Stable name used for logging and order instrumentation.
    fn name(&self) -> &'static str;

    /// Passes, or fails with exactly one typed error. Must be idempotent
    /// against unchanged lookup data.
    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError>;
}
