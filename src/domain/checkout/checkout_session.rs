//! The checkout session aggregate and its attendees.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::EventSession;
use crate::domain::foundation::{CheckoutId, CompanyId, Timestamp};

/// One person on a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub email: Option<String>,
    /// Deselected attendees are kept on the checkout but claim no seat.
    pub selected: bool,
    /// Waitlisted attendees never count toward capacity or price.
    pub waitlist: bool,
}

impl Attendee {
    /// A selected, non-waitlisted attendee with the given email.
    pub fn selected(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            selected: true,
            waitlist: false,
        }
    }

    /// A selected attendee requesting the waitlist.
    pub fn waitlisted(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            selected: true,
            waitlist: true,
        }
    }

    /// An attendee with no email captured yet.
    pub fn anonymous() -> Self {
        Self {
            email: None,
            selected: true,
            waitlist: false,
        }
    }

    /// Email trimmed and lowercased; `None` when absent or blank.
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_deref().and_then(|email| {
            let trimmed = email.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
    }

    /// True if this attendee occupies a real (non-waitlist) seat.
    pub fn claims_seat(&self) -> bool {
        self.selected && !self.waitlist
    }
}

/// Lifecycle state of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    InProgress,
    Completed,
    Expired,
    Canceled,
}

/// A transient aggregate representing one in-progress registration attempt.
///
/// Owned exclusively by the registering actor's flow. The pipeline never
/// mutates it; an abandoned checkout simply ages out of the capacity count
/// once its creation time exceeds the hold TTL window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: CheckoutId,
    pub company_id: CompanyId,
    /// Resolved event session snapshot; `None` when the reference is broken.
    pub event_session: Option<EventSession>,
    pub attendees: Vec<Attendee>,
    /// Billing contact captured at checkout start; informational only.
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
    pub status: CheckoutStatus,
}

impl CheckoutSession {
    pub fn new(
        id: CheckoutId,
        company_id: CompanyId,
        event_session: EventSession,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            company_id,
            event_session: Some(event_session),
            attendees: Vec::new(),
            contact_name: None,
            contact_email: None,
            created_at,
            status: CheckoutStatus::InProgress,
        }
    }

    /// A checkout whose event session reference is broken.
    pub fn detached(id: CheckoutId, company_id: CompanyId, created_at: Timestamp) -> Self {
        Self {
            id,
            company_id,
            event_session: None,
            attendees: Vec::new(),
            contact_name: None,
            contact_email: None,
            created_at,
            status: CheckoutStatus::InProgress,
        }
    }

    /// Adds attendees, builder style.
    pub fn with_attendees(mut self, attendees: impl IntoIterator<Item = Attendee>) -> Self {
        self.attendees.extend(attendees);
        self
    }

    /// Sets the billing contact, builder style.
    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.contact_name = Some(name.into());
        self.contact_email = Some(email.into());
        self
    }

    /// Number of real seats this checkout needs: selected, non-waitlisted
    /// attendees.
    pub fn seats_needed(&self) -> u32 {
        self.attendees
            .iter()
            .filter(|attendee| attendee.claims_seat())
            .count() as u32
    }

    /// True if the checkout still counts toward capacity at `as_of`, given
    /// the hold TTL in minutes.
    pub fn is_live_hold(&self, as_of: Timestamp, hold_ttl_minutes: i64) -> bool {
        self.status == CheckoutStatus::InProgress
            && !self.created_at.is_before(&as_of.minus_minutes(hold_ttl_minutes))
    }
}
