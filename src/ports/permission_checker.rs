//! Actor permission port.

use async_trait::async_trait;

use crate::domain::checkout::LookupError;
use crate::domain::foundation::EmployeeId;

/// Answers role membership questions about the acting employee.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// True if the employee holds the named role.
    async fn has_role(&self, employee: &EmployeeId, role: &str) -> Result<bool, LookupError>;
}
