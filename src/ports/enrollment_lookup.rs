//! Confirmed enrollment lookup port.

use async_trait::async_trait;

use crate::domain::checkout::{Enrollment, LookupError};
use crate::domain::foundation::{EmployeeId, EventSessionId};

/// Read-only view of confirmed enrollments for a session.
///
/// Enrollments are written by the external settlement consumer after payment
/// succeeds; the pipeline only reads them.
#[async_trait]
pub trait EnrollmentLookup: Send + Sync {
    /// Finds a confirmed enrollment held by the employee on the session.
    async fn find_for_employee(
        &self,
        session: &EventSessionId,
        employee: &EmployeeId,
    ) -> Result<Option<Enrollment>, LookupError>;

    /// Finds a confirmed enrollment keyed by raw email on the session.
    async fn find_for_email(
        &self,
        session: &EventSessionId,
        email: &str,
    ) -> Result<Option<Enrollment>, LookupError>;

    /// Counts confirmed enrollments for the session.
    async fn count_confirmed(&self, session: &EventSessionId) -> Result<u32, LookupError>;
}
