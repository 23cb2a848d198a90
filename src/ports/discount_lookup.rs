//! Discount lookup port.

use async_trait::async_trait;

use crate::domain::checkout::{Discount, LookupError};

/// Read-only view of discount codes and their usage ledger.
///
/// Usage is counted, not decremented in place; the redemption record itself
/// is written externally after payment succeeds.
#[async_trait]
pub trait DiscountLookup: Send + Sync {
    /// Resolves a discount by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Discount>, LookupError>;

    /// Counts prior redemptions of the code across all checkouts.
    async fn count_usage(&self, code: &str) -> Result<u32, LookupError>;
}
