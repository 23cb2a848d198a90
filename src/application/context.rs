//! Input bundle handed to every validator.

use crate::domain::checkout::{
    CheckoutError, CheckoutSession, Company, Employee, Event, EventSession, ProcessPaymentRequest,
};
use crate::domain::foundation::Timestamp;

/// Everything a validator may inspect for one checkout attempt.
///
/// The context is read-only; validators share it by reference and none of
/// them mutates checkout state. `as_of` pins a single observation instant so
/// all date-window and TTL decisions inside one run agree with each other.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub request: &'a ProcessPaymentRequest,
    pub checkout: &'a CheckoutSession,
    pub company: &'a Company,
    pub actor: &'a Employee,
    pub as_of: Timestamp,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        request: &'a ProcessPaymentRequest,
        checkout: &'a CheckoutSession,
        company: &'a Company,
        actor: &'a Employee,
        as_of: Timestamp,
    ) -> Self {
        Self {
            request,
            checkout,
            company,
            actor,
            as_of,
        }
    }

    /// The checkout's event session, or NotFound when the reference is broken.
    pub fn event_session(&self) -> Result<&'a EventSession, CheckoutError> {
        self.checkout
            .event_session
            .as_ref()
            .ok_or(CheckoutError::EventSessionNotFound)
    }

    /// The session's event, or NotFound when either link is broken.
    pub fn event(&self) -> Result<&'a Event, CheckoutError> {
        self.event_session()?
            .event
            .as_ref()
            .ok_or(CheckoutError::EventNotFound)
    }
}
