//! Company voucher value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A prepaid block of seats belonging to a company.
///
/// Vouchers aggregate into a single remaining-seat pool: the sum of
/// `total_seats` across the company's redeemable vouchers minus the seats
/// already consumed per the usage ledger. Seats are counted, never
/// decremented in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub active: bool,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub total_seats: u32,
}

impl Voucher {
    /// Creates an active voucher with no validity window.
    pub fn new(total_seats: u32) -> Self {
        Self {
            active: true,
            starts_at: None,
            ends_at: None,
            total_seats,
        }
    }

    /// Restricts the voucher to a validity window.
    pub fn with_window(mut self, starts_at: Option<Timestamp>, ends_at: Option<Timestamp>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    /// Deactivates the voucher.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// True if the voucher contributes to the pool at the given instant.
    pub fn is_redeemable_at(&self, as_of: Timestamp) -> bool {
        if !self.active {
            return false;
        }
        if let Some(starts_at) = self.starts_at {
            if as_of.is_before(&starts_at) {
                return false;
            }
        }
        if let Some(ends_at) = self.ends_at {
            if as_of.is_after(&ends_at) {
                return false;
            }
        }
        true
    }
}
