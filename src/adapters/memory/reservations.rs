//! In-memory seat reservation ledger.
//!
//! Implements both [`SeatReservationStore`] and [`HoldCounter`] from one
//! mutex-guarded ledger, so the capacity a validator observes and the
//! capacity `reserve` re-checks come from the same data. Holding the lock
//! across the whole check-and-insert is what makes `reserve` atomic here; a
//! database adapter would reach for a serializable transaction or a
//! conditional update instead.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::checkout::LookupError;
use crate::domain::foundation::{CheckoutId, EventSessionId, Timestamp};
use crate::ports::{
    HoldCounter, ReservationError, ReserveSeatsRequest, SeatReservation, SeatReservationStore,
};

#[derive(Debug, Clone)]
struct HoldRecord {
    session: EventSessionId,
    seats: u32,
    expires_at: Timestamp,
}

impl HoldRecord {
    fn is_live_at(&self, as_of: Timestamp) -> bool {
        !self.expires_at.is_before(&as_of)
    }
}

#[derive(Debug, Default)]
struct Ledger {
    holds: HashMap<CheckoutId, HoldRecord>,
    confirmed: HashMap<EventSessionId, u32>,
}

impl Ledger {
    fn seats_taken(&self, session: &EventSessionId, excluding: &CheckoutId, as_of: Timestamp) -> u32 {
        let held: u32 = self
            .holds
            .iter()
            .filter(|(checkout, hold)| {
                *checkout != excluding && hold.session == *session && hold.is_live_at(as_of)
            })
            .map(|(_, hold)| hold.seats)
            .sum();
        held + self.confirmed.get(session).copied().unwrap_or(0)
    }
}

/// In-memory implementation of the reservation store and hold counter.
#[derive(Debug, Default)]
pub struct InMemorySeatReservations {
    ledger: Mutex<Ledger>,
}

impl InMemorySeatReservations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds seats already confirmed for a session.
    pub fn seed_confirmed(&self, session: EventSessionId, seats: u32) {
        let mut ledger = self.lock();
        *ledger.confirmed.entry(session).or_insert(0) += seats;
    }

    /// Seeds a live hold belonging to another checkout.
    pub fn seed_hold(
        &self,
        session: EventSessionId,
        checkout: CheckoutId,
        seats: u32,
        expires_at: Timestamp,
    ) {
        self.lock().holds.insert(
            checkout,
            HoldRecord {
                session,
                seats,
                expires_at,
            },
        );
    }

    /// Confirmed seat count for a session, for assertions.
    pub fn confirmed_seats(&self, session: &EventSessionId) -> u32 {
        self.lock().confirmed.get(session).copied().unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SeatReservationStore for InMemorySeatReservations {
    async fn reserve(
        &self,
        request: ReserveSeatsRequest,
    ) -> Result<SeatReservation, ReservationError> {
        let mut ledger = self.lock();
        ledger
            .holds
            .retain(|_, hold| hold.is_live_at(request.as_of));

        if let Some(capacity) = request.capacity {
            let taken = ledger.seats_taken(&request.session, &request.checkout, request.as_of);
            let available = capacity.saturating_sub(taken);
            if request.seats > available {
                return Err(ReservationError::InsufficientSeats {
                    requested: request.seats,
                    available,
                });
            }
        }

        ledger.holds.insert(
            request.checkout,
            HoldRecord {
                session: request.session,
                seats: request.seats,
                expires_at: request.expires_at,
            },
        );
        Ok(SeatReservation {
            session: request.session,
            checkout: request.checkout,
            seats: request.seats,
            expires_at: request.expires_at,
        })
    }

    async fn release(&self, checkout: &CheckoutId) -> Result<(), LookupError> {
        self.lock().holds.remove(checkout);
        Ok(())
    }

    async fn confirm(
        &self,
        checkout: &CheckoutId,
        as_of: Timestamp,
    ) -> Result<(), ReservationError> {
        let mut ledger = self.lock();
        let hold = ledger
            .holds
            .remove(checkout)
            .ok_or(ReservationError::HoldNotFound {
                checkout: *checkout,
            })?;
        if !hold.is_live_at(as_of) {
            return Err(ReservationError::HoldExpired {
                checkout: *checkout,
            });
        }
        *ledger.confirmed.entry(hold.session).or_insert(0) += hold.seats;
        Ok(())
    }
}

#[async_trait]
impl HoldCounter for InMemorySeatReservations {
    async fn count_in_progress_holds(
        &self,
        session: &EventSessionId,
        excluding: &CheckoutId,
        as_of: Timestamp,
    ) -> Result<u32, LookupError> {
        let ledger = self.lock();
        Ok(ledger
            .holds
            .iter()
            .filter(|(checkout, hold)| {
                *checkout != excluding && hold.session == *session && hold.is_live_at(as_of)
            })
            .map(|(_, hold)| hold.seats)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: u64) -> Timestamp {
        Timestamp::from_unix_secs(secs)
    }

    fn request(
        session: EventSessionId,
        checkout: CheckoutId,
        seats: u32,
        capacity: Option<u32>,
    ) -> ReserveSeatsRequest {
        ReserveSeatsRequest {
            session,
            checkout,
            seats,
            capacity,
            expires_at: at(1_000).plus_minutes(30),
            as_of: at(1_000),
        }
    }

    #[tokio::test]
    async fn reserve_grants_within_capacity() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();

        let reservation = store
            .reserve(request(session, checkout, 3, Some(10)))
            .await
            .unwrap();
        assert_eq!(reservation.seats, 3);
        assert_eq!(
            store
                .count_in_progress_holds(&session, &CheckoutId::new(), at(1_000))
                .await
                .unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn reserve_rejects_when_confirmed_and_held_fill_capacity() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        store.seed_confirmed(session, 7);
        store.seed_hold(session, CheckoutId::new(), 2, at(1_000).plus_minutes(30));

        let err = store
            .reserve(request(session, CheckoutId::new(), 2, Some(10)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ReservationError::InsufficientSeats {
                requested: 2,
                available: 1,
            }
        );
    }

    #[tokio::test]
    async fn expired_holds_stop_counting_and_free_capacity() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        store.seed_hold(session, CheckoutId::new(), 10, at(500));

        assert_eq!(
            store
                .count_in_progress_holds(&session, &CheckoutId::new(), at(1_000))
                .await
                .unwrap(),
            0
        );
        assert!(store
            .reserve(request(session, CheckoutId::new(), 10, Some(10)))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn re_reserving_replaces_the_previous_hold() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();

        store
            .reserve(request(session, checkout, 9, Some(10)))
            .await
            .unwrap();
        // Same checkout shrinks its own hold; it never competes with itself.
        store
            .reserve(request(session, checkout, 4, Some(10)))
            .await
            .unwrap();

        assert_eq!(
            store
                .count_in_progress_holds(&session, &CheckoutId::new(), at(1_000))
                .await
                .unwrap(),
            4
        );
    }

    #[tokio::test]
    async fn unlimited_capacity_always_grants() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        store.seed_confirmed(session, 1_000);

        assert!(store
            .reserve(request(session, CheckoutId::new(), 500, None))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn confirm_moves_hold_into_confirmed_seats() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();
        store.seed_hold(session, checkout, 3, at(2_000));

        store.confirm(&checkout, at(1_000)).await.unwrap();
        assert_eq!(store.confirmed_seats(&session), 3);

        // The hold is gone; confirming twice fails.
        assert_eq!(
            store.confirm(&checkout, at(1_000)).await.unwrap_err(),
            ReservationError::HoldNotFound { checkout }
        );
    }

    #[tokio::test]
    async fn confirm_of_expired_hold_fails() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();
        store.seed_hold(session, checkout, 3, at(500));

        assert_eq!(
            store.confirm(&checkout, at(1_000)).await.unwrap_err(),
            ReservationError::HoldExpired { checkout }
        );
        assert_eq!(store.confirmed_seats(&session), 0);
    }

    #[tokio::test]
    async fn confirm_judges_expiry_against_the_callers_clock() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();
        // An epoch-era hold is decades behind the wall clock but still live
        // under the caller's pinned instant.
        let granted_at = at(1_000);
        store.seed_hold(session, checkout, 2, granted_at.plus_minutes(30));

        store.confirm(&checkout, granted_at.plus_minutes(10)).await.unwrap();
        assert_eq!(store.confirmed_seats(&session), 2);
    }

    #[tokio::test]
    async fn release_is_idempotent() {
        let store = InMemorySeatReservations::new();
        let session = EventSessionId::new();
        let checkout = CheckoutId::new();
        store.seed_hold(session, checkout, 2, at(1_000).plus_minutes(30));

        store.release(&checkout).await.unwrap();
        store.release(&checkout).await.unwrap();
        assert_eq!(
            store
                .count_in_progress_holds(&session, &CheckoutId::new(), at(1_000))
                .await
                .unwrap(),
            0
        );
    }
}
