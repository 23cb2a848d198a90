//! Waitlist entry lookup port.

use async_trait::async_trait;

use crate::domain::checkout::{LookupError, WaitlistEntry};
use crate::domain::foundation::{EmployeeId, EventSessionId};

/// Read-only view of waitlist entries for a session.
#[async_trait]
pub trait WaitlistLookup: Send + Sync {
    /// Finds a waitlist entry held by the employee on the session.
    async fn find_for_employee(
        &self,
        session: &EventSessionId,
        employee: &EmployeeId,
    ) -> Result<Option<WaitlistEntry>, LookupError>;

    /// Finds a waitlist entry keyed by raw email on the session.
    async fn find_for_email(
        &self,
        session: &EventSessionId,
        email: &str,
    ) -> Result<Option<WaitlistEntry>, LookupError>;
}
