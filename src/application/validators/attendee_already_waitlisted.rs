//! Conflict check: no attendee may already sit on the waitlist.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::ports::{EmployeeDirectory, WaitlistLookup};

/// Rejects attendees who already hold a waitlist entry for the session.
///
/// Same two-tier matching as the enrollment conflict check: resolved
/// employees are matched by identity, unresolved emails fall back to the raw
/// email on existing waitlist entries.
pub struct AttendeeAlreadyWaitlistedValidator {
    directory: Arc<dyn EmployeeDirectory>,
    waitlist: Arc<dyn WaitlistLookup>,
}

impl AttendeeAlreadyWaitlistedValidator {
    pub fn new(directory: Arc<dyn EmployeeDirectory>, waitlist: Arc<dyn WaitlistLookup>) -> Self {
        Self { directory, waitlist }
    }
}

#[async_trait]
impl CheckoutValidator for AttendeeAlreadyWaitlistedValidator {
    fn name(&self) -> &'static str {
        "attendee_already_waitlisted"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let session = ctx.event_session()?;
        for attendee in &ctx.checkout.attendees {
            let Some(email) = attendee.normalized_email() else {
                continue;
            };
            match self
                .directory
                .find_by_email_and_company(&email, &ctx.company.id)
                .await?
            {
                Some(employee) => {
                    if self
                        .waitlist
                        .find_for_employee(&session.id, &employee.id)
                        .await?
                        .is_some()
                    {
                        return Err(CheckoutError::EmployeeAlreadyWaitlisted { email });
                    }
                }
                None => {
                    if self
                        .waitlist
                        .find_for_email(&session.id, &email)
                        .await?
                        .is_some()
                    {
                        return Err(CheckoutError::AttendeeAlreadyWaitlisted { email });
                    }
                }
            }
        }
        Ok(())
    }
}
