//! In-progress hold counting port.

use async_trait::async_trait;

use crate::domain::checkout::LookupError;
use crate::domain::foundation::{CheckoutId, EventSessionId};

/// Counts seats tentatively held by other unfinished checkouts.
///
/// A hold is an in-progress checkout still inside its TTL window at `as_of`;
/// abandoned checkouts silently stop counting once they age out, with no
/// cancellation callback. Implementations must exclude the caller's own
/// checkout so it never competes with itself.
#[async_trait]
pub trait HoldCounter: Send + Sync {
    /// Counts seats held on the session by live checkouts other than
    /// `excluding`, as observed at `as_of`.
    async fn count_in_progress_holds(
        &self,
        session: &EventSessionId,
        excluding: &CheckoutId,
        as_of: crate::domain::foundation::Timestamp,
    ) -> Result<u32, LookupError>;
}
