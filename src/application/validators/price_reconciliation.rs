//! Final check: the submitted amount must equal the recomputed charge.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::pricing::{Coverage, PriceInputs, expected_charge};
use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Money;
use crate::ports::DiscountLookup;

/// Recomputes the expected charge and compares it to the submitted amount.
///
/// The submitted discount amount is taken at face value here (its
/// redeemability was established earlier in the pipeline), but its kind is
/// resolved from the stored discount so a percentage cannot be replayed as
/// flat dollars. Amounts agree when they land on the same cent.
pub struct PriceReconciliationValidator {
    discounts: Arc<dyn DiscountLookup>,
}

impl PriceReconciliationValidator {
    pub fn new(discounts: Arc<dyn DiscountLookup>) -> Self {
        Self { discounts }
    }

    async fn discount_coverage(
        &self,
        ctx: &ValidationContext<'_>,
    ) -> Result<Option<Coverage>, CheckoutError> {
        let Some(code) = ctx.request.discount_code() else {
            return Ok(None);
        };
        if ctx.request.discount_amount <= 0.0 {
            return Ok(None);
        }
        let discount = self
            .discounts
            .find_by_code(code)
            .await?
            .ok_or_else(|| CheckoutError::InvalidDiscountCode { code: code.into() })?;
        Ok(Some(Coverage {
            kind: discount.kind,
            value: ctx.request.discount_amount,
        }))
    }
}

#[async_trait]
impl CheckoutValidator for PriceReconciliationValidator {
    fn name(&self) -> &'static str {
        "price_reconciliation"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        let event = ctx.event()?;
        let discount = self.discount_coverage(ctx).await?;
        let admin_discount = match (
            ctx.request.admin_discount_kind,
            ctx.request.admin_discount_value,
        ) {
            (Some(kind), value) if value > 0.0 => Some(Coverage { kind, value }),
            _ => None,
        };

        let expected = expected_charge(PriceInputs {
            event_price: event.price,
            seats: ctx.checkout.seats_needed(),
            voucher_quantity: ctx.request.voucher_quantity,
            discount,
            admin_discount,
        });
        let submitted = Money::from_dollars(ctx.request.amount);
        if submitted != expected {
            return Err(CheckoutError::AmountMismatch {
                expected,
                submitted,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRegistry;
    use crate::domain::checkout::{
        Attendee, CheckoutSession, Company, Discount, DiscountKind, Employee, Event,
        EventSession, ProcessPaymentRequest,
    };
    use crate::domain::foundation::{
        CheckoutId, CompanyId, EmployeeId, EventId, EventSessionId, Timestamp,
    };

    struct Fixture {
        registry: Arc<InMemoryRegistry>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                registry: Arc::new(InMemoryRegistry::new()),
            }
        }

        async fn run(
            &self,
            event_price: f64,
            seats: u32,
            request: ProcessPaymentRequest,
        ) -> Result<(), CheckoutError> {
            let event = Event::new(EventId::new(), "EV1", "Event", event_price);
            let session = EventSession::new(EventSessionId::new(), event, Some(100));
            let company = Company::new(CompanyId::new(), "Acme");
            let attendees = (0..seats)
                .map(|n| Attendee::selected(format!("a{n}@example.com")))
                .collect::<Vec<_>>();
            let checkout =
                CheckoutSession::new(CheckoutId::new(), company.id, session, Timestamp::now())
                    .with_attendees(attendees);
            let actor = Employee::new(EmployeeId::new(), company.id, None);
            let ctx =
                ValidationContext::new(&request, &checkout, &company, &actor, Timestamp::now());

            PriceReconciliationValidator::new(self.registry.clone())
                .validate(&ctx)
                .await
        }
    }

    #[tokio::test]
    async fn exact_base_amount_reconciles() {
        let fixture = Fixture::new();
        let result = fixture
            .run(100.0, 2, ProcessPaymentRequest::for_amount(200.0))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn off_by_a_cent_is_a_mismatch() {
        let fixture = Fixture::new();
        let result = fixture
            .run(100.0, 2, ProcessPaymentRequest::for_amount(199.99))
            .await;
        assert_eq!(
            result.unwrap_err(),
            CheckoutError::AmountMismatch {
                expected: Money::from_dollars(200.0),
                submitted: Money::from_dollars(199.99),
            }
        );
    }

    #[tokio::test]
    async fn sub_cent_noise_still_reconciles() {
        let fixture = Fixture::new();
        // 199.999 and 200.004 both round to the 200.00 cent.
        assert!(fixture
            .run(100.0, 2, ProcessPaymentRequest::for_amount(199.999))
            .await
            .is_ok());
        assert!(fixture
            .run(100.0, 2, ProcessPaymentRequest::for_amount(200.004))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn percentage_discount_uses_the_stored_kind() {
        let fixture = Fixture::new();
        fixture
            .registry
            .seed_discount(Discount::new("SAVE10", DiscountKind::Percentage, 10.0));

        // 2 x 100 = 200, minus 10% = 180.
        let request = ProcessPaymentRequest::for_amount(180.0).with_discount("SAVE10", 10.0);
        assert!(fixture.run(100.0, 2, request).await.is_ok());

        // Replaying the same 10.0 as if it were flat dollars must fail.
        let request = ProcessPaymentRequest::for_amount(190.0).with_discount("SAVE10", 10.0);
        assert!(matches!(
            fixture.run(100.0, 2, request).await.unwrap_err(),
            CheckoutError::AmountMismatch { .. }
        ));
    }

    #[tokio::test]
    async fn fixed_discount_subtracts_flat_dollars() {
        let fixture = Fixture::new();
        fixture
            .registry
            .seed_discount(Discount::new("TAKE25", DiscountKind::FixedAmount, 25.0));

        let request = ProcessPaymentRequest::for_amount(175.0).with_discount("TAKE25", 25.0);
        assert!(fixture.run(100.0, 2, request).await.is_ok());
    }

    #[tokio::test]
    async fn zero_discount_amount_skips_the_lookup() {
        let fixture = Fixture::new();
        fixture.registry.fail_port("discounts");

        let request = ProcessPaymentRequest::for_amount(200.0).with_discount("SAVE10", 0.0);
        assert!(fixture.run(100.0, 2, request).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_code_with_positive_amount_is_invalid() {
        let fixture = Fixture::new();
        let request = ProcessPaymentRequest::for_amount(180.0).with_discount("GHOST", 10.0);
        assert_eq!(
            fixture.run(100.0, 2, request).await.unwrap_err(),
            CheckoutError::InvalidDiscountCode {
                code: "GHOST".into()
            }
        );
    }

    #[tokio::test]
    async fn vouchers_cover_full_seat_prices() {
        let fixture = Fixture::new();
        // 2 seats, 1 voucher: pay for one seat.
        let request = ProcessPaymentRequest::for_amount(100.0).with_vouchers(1);
        assert!(fixture.run(100.0, 2, request).await.is_ok());
    }

    #[tokio::test]
    async fn stacked_coverages_round_once_at_the_end() {
        let fixture = Fixture::new();
        fixture
            .registry
            .seed_discount(Discount::new("SAVE15", DiscountKind::Percentage, 15.0));

        // 3 x 33.33 = 99.99 base; 1 voucher (33.33) + 15% (14.9985) + 10%
        // admin (9.999) leaves 41.6625, which rounds to 41.66 only when the
        // rounding happens after summation.
        let request = ProcessPaymentRequest::for_amount(41.66)
            .with_discount("SAVE15", 15.0)
            .with_admin_discount(DiscountKind::Percentage, 10.0, "partner comp")
            .with_vouchers(1);
        assert!(fixture.run(33.33, 3, request).await.is_ok());
    }

    #[tokio::test]
    async fn coverage_beyond_base_clamps_to_zero() {
        let fixture = Fixture::new();
        fixture
            .registry
            .seed_discount(Discount::new("HUGE", DiscountKind::FixedAmount, 500.0));

        let request = ProcessPaymentRequest::for_amount(0.0).with_discount("HUGE", 500.0);
        assert!(fixture.run(100.0, 2, request).await.is_ok());
    }

    #[tokio::test]
    async fn waitlisted_attendees_are_free() {
        let fixture = Fixture::new();
        let event = Event::new(EventId::new(), "EV1", "Event", 100.0);
        let session = EventSession::new(EventSessionId::new(), event, Some(100));
        let company = Company::new(CompanyId::new(), "Acme");
        let checkout =
            CheckoutSession::new(CheckoutId::new(), company.id, session, Timestamp::now())
                .with_attendees(vec![
                    Attendee::selected("a@example.com"),
                    Attendee::waitlisted("b@example.com"),
                ]);
        let request = ProcessPaymentRequest::for_amount(100.0);
        let actor = Employee::new(EmployeeId::new(), company.id, None);
        let ctx = ValidationContext::new(&request, &checkout, &company, &actor, Timestamp::now());

        let result = PriceReconciliationValidator::new(fixture.registry.clone())
            .validate(&ctx)
            .await;
        assert!(result.is_ok());
    }
}
