//! Error types for checkout validation.
//!
//! Every validator fails closed with exactly one [`CheckoutError`]; the
//! pipeline surfaces the first failure and never aggregates. Each variant
//! carries the context an API layer needs to build a response, and
//! [`CheckoutError::kind`] collapses the variants into the coarse taxonomy
//! callers map onto response codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Money;

/// Infrastructure failure raised by a lookup port.
///
/// Lookup errors are not validation outcomes; they indicate the pipeline
/// could not obtain an answer. Retrying is a caller-level decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{port} lookup failed: {message}")]
pub struct LookupError {
    /// Name of the port that failed.
    pub port: &'static str,
    /// Human-readable failure description.
    pub message: String,
}

impl LookupError {
    /// Creates a lookup error for the named port.
    pub fn new(port: &'static str, message: impl Into<String>) -> Self {
        Self {
            port,
            message: message.into(),
        }
    }
}

/// Coarse error taxonomy used by the (external) API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Referenced event session or event is missing.
    NotFound,
    /// Duplicate or already-registered attendee.
    Conflict,
    /// A scarce resource (seats, discount uses, voucher seats) is exhausted.
    Capacity,
    /// Actor lacks the permission the request requires.
    Authorization,
    /// A submitted discount or voucher does not apply here and now.
    Validity,
    /// Submitted amount disagrees with the computed expected amount.
    Consistency,
    /// A lookup port failed; no validation verdict was reached.
    Lookup,
}

/// Failure of a single checkout validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("checkout has no event session")]
    EventSessionNotFound,

    #[error("event session has no event")]
    EventNotFound,

    #[error("duplicate attendee email: {email}")]
    DuplicateAttendeeEmail { email: String },

    #[error("employee {email} is already enrolled in this session")]
    EmployeeAlreadyEnrolled { email: String },

    #[error("attendee {email} is already enrolled in this session")]
    AttendeeAlreadyEnrolled { email: String },

    #[error("employee {email} is already waitlisted for this session")]
    EmployeeAlreadyWaitlisted { email: String },

    #[error("attendee {email} is already waitlisted for this session")]
    AttendeeAlreadyWaitlisted { email: String },

    #[error("not enough seats available: requested {requested}, {available} left")]
    NotEnoughSeats { requested: u32, available: u32 },

    #[error("applying an admin discount requires the {role} role")]
    AdminDiscountNotPermitted { role: String },

    #[error("invalid discount code '{code}'")]
    InvalidDiscountCode { code: String },

    #[error("discount code '{code}' is not yet active")]
    DiscountNotYetActive { code: String },

    #[error("discount code '{code}' has expired")]
    DiscountExpired { code: String },

    #[error("discount code '{code}' is not valid for this event")]
    DiscountNotValidForEvent { code: String },

    #[error("discount code '{code}' has reached its maximum usage")]
    DiscountMaxUsageReached { code: String },

    #[error("subtotal {subtotal} is below the minimum purchase of {minimum}")]
    MinimumPurchaseNotMet { subtotal: Money, minimum: Money },

    #[error("event is not eligible for vouchers")]
    EventNotVoucherEligible,

    #[error("insufficient voucher seats: requested {requested}, {remaining} remaining")]
    InsufficientVoucherSeats { requested: u32, remaining: u32 },

    #[error("submitted amount {submitted} does not match expected amount {expected}")]
    AmountMismatch { expected: Money, submitted: Money },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl CheckoutError {
    /// Maps the error onto the coarse taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::EventSessionNotFound | CheckoutError::EventNotFound => {
                ErrorKind::NotFound
            }
            CheckoutError::DuplicateAttendeeEmail { .. }
            | CheckoutError::EmployeeAlreadyEnrolled { .. }
            | CheckoutError::AttendeeAlreadyEnrolled { .. }
            | CheckoutError::EmployeeAlreadyWaitlisted { .. }
            | CheckoutError::AttendeeAlreadyWaitlisted { .. } => ErrorKind::Conflict,
            CheckoutError::NotEnoughSeats { .. }
            | CheckoutError::DiscountMaxUsageReached { .. }
            | CheckoutError::InsufficientVoucherSeats { .. } => ErrorKind::Capacity,
            CheckoutError::AdminDiscountNotPermitted { .. } => ErrorKind::Authorization,
            CheckoutError::InvalidDiscountCode { .. }
            | CheckoutError::DiscountNotYetActive { .. }
            | CheckoutError::DiscountExpired { .. }
            | CheckoutError::DiscountNotValidForEvent { .. }
            | CheckoutError::MinimumPurchaseNotMet { .. }
            | CheckoutError::EventNotVoucherEligible => ErrorKind::Validity,
            CheckoutError::AmountMismatch { .. } => ErrorKind::Consistency,
            CheckoutError::Lookup(_) => ErrorKind::Lookup,
        }
    }
}
