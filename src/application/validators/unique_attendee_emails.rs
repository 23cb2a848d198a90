//! Structural check: no duplicate attendee emails on one checkout.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;

/// Rejects a checkout carrying the same email twice.
///
/// Pure and in-memory: emails are compared after trimming and lowercasing,
/// attendees without an email are skipped, and the first duplicate found is
/// the one reported.
#[derive(Debug, Default)]
pub struct UniqueAttendeeEmailsValidator;

impl UniqueAttendeeEmailsValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CheckoutValidator for UniqueAttendeeEmailsValidator {
    fn name(&self) -> &'static str {
        "unique_attendee_emails"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let mut seen = HashSet::new();
        for attendee in &ctx.checkout.attendees {
            let Some(email) = attendee.normalized_email() else {
                continue;
            };
            if !seen.insert(email.clone()) {
                return Err(CheckoutError::DuplicateAttendeeEmail { email });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::{
        Attendee, CheckoutSession, Company, Employee, ProcessPaymentRequest,
    };
    use crate::domain::foundation::{CheckoutId, CompanyId, EmployeeId, Timestamp};

    async fn run(attendees: Vec<Attendee>) -> Result<(), CheckoutError> {
        let request = ProcessPaymentRequest::for_amount(0.0);
        let company = Company::new(CompanyId::new(), "Acme");
        let actor = Employee::new(EmployeeId::new(), company.id, None);
        let checkout = CheckoutSession::detached(CheckoutId::new(), company.id, Timestamp::now())
            .with_attendees(attendees);
        let ctx = ValidationContext::new(&request, &checkout, &company, &actor, Timestamp::now());

        UniqueAttendeeEmailsValidator::new().validate(&ctx).await
    }

    #[tokio::test]
    async fn distinct_emails_pass() {
        let result = run(vec![
            Attendee::selected("a@example.com"),
            Attendee::selected("b@example.com"),
            Attendee::selected("c@example.com"),
        ]).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn duplicate_email_fails_with_the_offending_email() {
        let result = run(vec![
            Attendee::selected("a@example.com"),
            Attendee::selected("duplicate@example.com"),
            Attendee::selected("duplicate@example.com"),
        ]).await;
        assert_eq!(
            result.unwrap_err(),
            CheckoutError::DuplicateAttendeeEmail {
                email: "duplicate@example.com".into()
            }
        );
    }

    #[tokio::test]
    async fn case_and_whitespace_variants_are_duplicates() {
        let result = run(vec![
            Attendee::selected("Jane@Example.com"),
            Attendee::selected("  jane@example.com "),
        ]).await;
        assert_eq!(
            result.unwrap_err(),
            CheckoutError::DuplicateAttendeeEmail {
                email: "jane@example.com".into()
            }
        );
    }

    #[tokio::test]
    async fn attendees_without_email_are_skipped() {
        let result = run(vec![
            Attendee::anonymous(),
            Attendee::anonymous(),
            Attendee::selected("   "),
            Attendee::selected("a@example.com"),
        ]).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_checkout_passes() {
        assert!(run(vec![]).await.is_ok());
    }
}
