//! Voucher pool lookup port.

use async_trait::async_trait;

use crate::domain::checkout::{LookupError, Voucher};
use crate::domain::foundation::{CompanyId, Timestamp};

/// Read-only view of a company's voucher pool and its usage ledger.
#[async_trait]
pub trait VoucherLookup: Send + Sync {
    /// Returns the company's vouchers that are active and inside their
    /// validity window at `as_of`.
    async fn find_active_for_company(
        &self,
        company: &CompanyId,
        as_of: Timestamp,
    ) -> Result<Vec<Voucher>, LookupError>;

    /// Counts voucher seats the company has already consumed.
    async fn count_usage(&self, company: &CompanyId) -> Result<u32, LookupError>;
}
