//! The settlement gate: validate, then atomically reserve seats.

use std::sync::Arc;

use tracing::info;

use crate::application::{ValidationContext, ValidationPipeline};
use crate::config::CheckoutConfig;
use crate::domain::checkout::{CheckoutError, LookupError};
use crate::domain::foundation::{CheckoutId, Money, Timestamp};
use crate::ports::{
    ReservationError, ReserveSeatsRequest, SeatReservation, SeatReservationStore,
};

/// The verdict of a successful authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutAuthorization {
    /// The charge the payment provider should collect, already reconciled
    /// against the submitted amount.
    pub expected_charge: Money,
    /// The seat hold backing this authorization; `None` when the checkout
    /// needs no seats.
    pub reservation: Option<SeatReservation>,
}

/// Gates payment on the full pipeline plus an atomic seat reservation.
///
/// A validator's capacity read and the later enrollment write are separate
/// steps, so two concurrent checkouts could each observe the last seat as
/// free and both proceed. The gate closes that window: after the pipeline
/// passes it converts the checkout's seat need into a TTL-bounded hold via
/// [`SeatReservationStore::reserve`], whose own capacity re-check is
/// atomic. Exactly one of two racing checkouts for the last seat wins.
pub struct SettlementGate {
    pipeline: ValidationPipeline,
    reservations: Arc<dyn SeatReservationStore>,
    config: CheckoutConfig,
}

impl SettlementGate {
    pub fn new(
        pipeline: ValidationPipeline,
        reservations: Arc<dyn SeatReservationStore>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            pipeline,
            reservations,
            config,
        }
    }

    /// Runs the pipeline and, on success, reserves the checkout's seats.
    ///
    /// Re-authorizing the same checkout replaces its previous hold, so the
    /// operation is idempotent for an unchanged checkout.
    pub async fn authorize(
        &self,
        ctx: &ValidationContext<'_>,
    ) -> Result<CheckoutAuthorization, CheckoutError> {
        self.pipeline.validate(ctx).await?;

        // Reconciliation has passed, so the submitted amount IS the expected
        // charge.
        let expected_charge = Money::from_dollars(ctx.request.amount);
        let seats = ctx.checkout.seats_needed();
        if seats == 0 {
            return Ok(CheckoutAuthorization {
                expected_charge,
                reservation: None,
            });
        }

        let session = ctx.event_session()?;
        let reservation = self
            .reservations
            .reserve(ReserveSeatsRequest {
                session: session.id,
                checkout: ctx.checkout.id,
                seats,
                capacity: session.max_enrollments,
                expires_at: ctx.as_of.plus_minutes(self.config.hold_ttl_minutes),
                as_of: ctx.as_of,
            })
            .await
            .map_err(|error| match error {
                ReservationError::InsufficientSeats {
                    requested,
                    available,
                } => CheckoutError::NotEnoughSeats {
                    requested,
                    available,
                },
                ReservationError::Store(lookup) => lookup.into(),
                other => LookupError::new("seat_reservations", other.to_string()).into(),
            })?;

        info!(
            checkout = %ctx.checkout.id,
            seats,
            charge = %expected_charge,
            "checkout authorized"
        );
        Ok(CheckoutAuthorization {
            expected_charge,
            reservation: Some(reservation),
        })
    }

    /// Releases the checkout's seat hold after cancellation or payment
    /// failure. Safe to call when no hold exists.
    pub async fn release(&self, checkout: &CheckoutId) -> Result<(), LookupError> {
        self.reservations.release(checkout).await
    }

    /// Converts the checkout's hold into confirmed seats after payment
    /// succeeds. `as_of` is the observation instant the hold's liveness is
    /// judged at, like everywhere else in the flow.
    pub async fn confirm(
        &self,
        checkout: &CheckoutId,
        as_of: Timestamp,
    ) -> Result<(), ReservationError> {
        self.reservations.confirm(checkout, as_of).await
    }
}
