//! Employee directory lookup port.

use async_trait::async_trait;

use crate::domain::checkout::{Employee, LookupError};
use crate::domain::foundation::CompanyId;

/// Resolves attendee emails to known employees of a company.
///
/// The conflict validators try identity matching through this port first and
/// only fall back to raw-email matching when no employee is found.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Finds the employee with the given email inside the company, if any.
    ///
    /// Implementations should match the email case-insensitively.
    async fn find_by_email_and_company(
        &self,
        email: &str,
        company: &CompanyId,
    ) -> Result<Option<Employee>, LookupError>;
}
