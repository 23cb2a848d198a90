//! Company and employee identity types, plus confirmed seat records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, EmployeeId, EventSessionId};

/// A company whose employees register for events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An employee of a company; may act as the registering actor or appear as
/// an attendee match during conflict checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub company_id: CompanyId,
    pub email: Option<String>,
}

impl Employee {
    pub fn new(id: EmployeeId, company_id: CompanyId, email: Option<String>) -> Self {
        Self {
            id,
            company_id,
            email,
        }
    }
}

/// Who holds a confirmed or waitlisted seat.
///
/// Conflict checks match by identity first (a resolved employee), then fall
/// back to the raw email captured at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum SeatHolder {
    Employee { employee_id: EmployeeId },
    Email { email: String },
}

/// A confirmed, paid seat for one attendee on one event session.
///
/// Created externally after payment succeeds; the pipeline only reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub session_id: EventSessionId,
    pub holder: SeatHolder,
}

/// Recorded interest for a session at or over capacity. Created externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub session_id: EventSessionId,
    pub holder: SeatHolder,
}
