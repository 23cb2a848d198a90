//! Conflict check: no attendee may already hold a confirmed seat.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::ports::{EmployeeDirectory, EnrollmentLookup};

/// Rejects attendees who already hold a confirmed seat on the session.
///
/// Matching is two-tier: the attendee email is first resolved against the
/// company's employee directory, and a resolved employee is checked by
/// identity. Only when no employee matches does the check fall back to the
/// raw email captured on existing enrollments. An employee who registered
/// earlier under a different email is therefore still caught.
pub struct AttendeeAlreadyEnrolledValidator {
    directory: Arc<dyn EmployeeDirectory>,
    enrollments: Arc<dyn EnrollmentLookup>,
}

impl AttendeeAlreadyEnrolledValidator {
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        enrollments: Arc<dyn EnrollmentLookup>,
    ) -> Self {
        Self {
            directory,
            enrollments,
        }
    }
}

#[async_trait]
impl CheckoutValidator for AttendeeAlreadyEnrolledValidator {
    fn name(&self) -> &'static str {
        "attendee_already_enrolled"
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
                        .enrollments
                        .find_for_employee(&session.id, &employee.id)
                        .await?
                        .is_some()
                    {
                        return Err(CheckoutError::EmployeeAlreadyEnrolled { email });
                    }
                }
                None => {
                    if self
                        .enrollments
                        .find_for_email(&session.id, &email)
                        .await?
                        .is_some()
                    {
                        return Err(CheckoutError::AttendeeAlreadyEnrolled { email });
                    }
                }
            }
        }
        Ok(())
    }
}
