//! Seat reservation port.
//!
//! Counting seats at validation time and persisting the enrollment later
//! leaves a gap two concurrent checkouts can both slip through. This port
//! closes it: after the pipeline passes, the settlement gate converts the
//! checkout's seat need into an explicit short-lived reservation, created
//! atomically against a consistent view of capacity. The reservation ages
//! out on its own TTL, is released on cancellation, and is confirmed into a
//! permanent enrollment only on payment success.
//!
//! Validators never touch this port; `reserve` is the single sanctioned
//! mutation in the whole pipeline flow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::checkout::LookupError;
use crate::domain::foundation::{CheckoutId, EventSessionId, Timestamp};

/// Request to atomically reserve seats for a checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveSeatsRequest {
    pub session: EventSessionId,
    pub checkout: CheckoutId,
    /// Seats to hold; the store re-checks these against capacity under its
    /// own consistency guarantee.
    pub seats: u32,
    /// Session capacity; `None` means unlimited and always grants.
    pub capacity: Option<u32>,
    /// When the hold lapses if neither confirmed nor released.
    pub expires_at: Timestamp,
    /// Observation instant used to age out competing holds.
    pub as_of: Timestamp,
}

/// A granted short-lived seat hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatReservation {
    pub session: EventSessionId,
    pub checkout: CheckoutId,
    pub seats: u32,
    pub expires_at: Timestamp,
}

/// Failure to grant, confirm, or release a reservation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    /// Capacity was exhausted between validation and reservation, or the
    /// validator's read was already stale.
    #[error("insufficient seats: requested {requested}, {available} available")]
    InsufficientSeats { requested: u32, available: u32 },

    /// No live reservation exists for the checkout.
    #[error("no live reservation for checkout {checkout}")]
    HoldNotFound { checkout: CheckoutId },

    /// The reservation lapsed before it was confirmed.
    #[error("reservation for checkout {checkout} expired")]
    HoldExpired { checkout: CheckoutId },

    #[error(transparent)]
    Store(#[from] LookupError),
}

/// Atomic check-and-reserve store for session seats.
#[async_trait]
pub trait SeatReservationStore: Send + Sync {
    /// Re-checks capacity and records a hold in one atomic step.
    ///
    /// Re-reserving for the same checkout replaces its previous hold rather
    /// than stacking a second one.
    async fn reserve(&self, request: ReserveSeatsRequest)
        -> Result<SeatReservation, ReservationError>;

    /// Releases the checkout's hold, if any. Releasing a missing or expired
    /// hold is a no-op.
    async fn release(&self, checkout: &CheckoutId) -> Result<(), LookupError>;

    /// Converts the checkout's live hold into confirmed seats after payment
    /// succeeds. Liveness is judged at `as_of`, the same observation instant
    /// the rest of the flow pins.
    async fn confirm(
        &self,
        checkout: &CheckoutId,
        as_of: Timestamp,
    ) -> Result<(), ReservationError>;
}
