//! Foundation value objects shared across the checkout domain.

mod ids;
mod money;
mod timestamp;

pub use ids::{CheckoutId, CompanyId, EmployeeId, EventId, EventSessionId};
pub use money::Money;
pub use timestamp::Timestamp;
