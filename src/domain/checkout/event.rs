//! Event and event session read models.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, EventSessionId};

/// An event with a per-seat price and voucher eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Short code identifying the event (e.g. "LEAD101").
    pub code: String,
    pub name: String,
    /// Unit price per seat in dollars.
    pub price: f64,
    /// Whether company voucher seats may be redeemed against this event.
    pub is_voucher_eligible: bool,
}

impl Event {
    pub fn new(id: EventId, code: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            price,
            is_voucher_eligible: false,
        }
    }

    /// Marks the event as voucher eligible.
    pub fn voucher_eligible(mut self) -> Self {
        self.is_voucher_eligible = true;
        self
    }
}

/// A scheduled session of an event with bounded (or unbounded) capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSession {
    pub id: EventSessionId,
    /// The parent event; absent when the session is dangling, which every
    /// validator that needs pricing treats as NotFound.
    pub event: Option<Event>,
    /// Seat capacity. `None` means unlimited: the seat availability check
    /// short-circuits to pass.
    pub max_enrollments: Option<u32>,
}

impl EventSession {
    pub fn new(id: EventSessionId, event: Event, max_enrollments: Option<u32>) -> Self {
        Self {
            id,
            event: Some(event),
            max_enrollments,
        }
    }

    /// A session whose parent event is missing.
    pub fn dangling(id: EventSessionId) -> Self {
        Self {
            id,
            event: None,
            max_enrollments: None,
        }
    }
}
