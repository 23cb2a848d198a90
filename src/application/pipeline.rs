//! The ordered, fail-fast validation pipeline.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ValidationContext;
use crate::application::validators::{
    AdminDiscountAuthorizationValidator, AttendeeAlreadyEnrolledValidator,
    AttendeeAlreadyWaitlistedValidator, CheckoutValidator, DiscountRedemptionValidator,
    PriceReconciliationValidator, SeatAvailabilityValidator, UniqueAttendeeEmailsValidator,
    VoucherRedemptionValidator,
};
use crate::config::CheckoutConfig;
use crate::domain::checkout::CheckoutError;
use crate::ports::{
    DiscountLookup, EmployeeDirectory, EnrollmentLookup, HoldCounter, PermissionChecker,
    VoucherLookup, WaitlistLookup,
};

/// The lookup ports the standard pipeline is wired from.
#[derive(Clone)]
pub struct PipelineDependencies {
    pub employee_directory: Arc<dyn EmployeeDirectory>,
    pub enrollments: Arc<dyn EnrollmentLookup>,
    pub waitlist: Arc<dyn WaitlistLookup>,
    pub holds: Arc<dyn HoldCounter>,
    pub discounts: Arc<dyn DiscountLookup>,
    pub vouchers: Arc<dyn VoucherLookup>,
    pub permissions: Arc<dyn PermissionChecker>,
}

/// Runs the checkout validators in their canonical order.
///
/// Ordering is load-bearing: structural checks come before lookups, scarce
/// resources before financials, and price reconciliation always runs last so
/// every amount it trusts has already been vetted. The first failure stops
/// the run; later validators are not consulted and no partial results are
/// aggregated.
pub struct ValidationPipeline {
    validators: Vec<Arc<dyn CheckoutValidator>>,
}

impl ValidationPipeline {
    /// Wires the standard eight validators in canonical order.
    pub fn new(deps: PipelineDependencies, config: &CheckoutConfig) -> Self {
        let validators: Vec<Arc<dyn CheckoutValidator>> = vec![
            Arc::new(UniqueAttendeeEmailsValidator::new()),
            Arc::new(AttendeeAlreadyEnrolledValidator::new(
                deps.employee_directory.clone(),
                deps.enrollments.clone(),
            )),
            Arc::new(AttendeeAlreadyWaitlistedValidator::new(
                deps.employee_directory,
                deps.waitlist,
            )),
            Arc::new(SeatAvailabilityValidator::new(deps.enrollments, deps.holds)),
            Arc::new(AdminDiscountAuthorizationValidator::new(
                deps.permissions,
                config.admin_discount_role.clone(),
            )),
            Arc::new(DiscountRedemptionValidator::new(deps.discounts.clone())),
            Arc::new(VoucherRedemptionValidator::new(deps.vouchers)),
            Arc::new(PriceReconciliationValidator::new(deps.discounts)),
        ];
        Self { validators }
    }

    /// Builds a pipeline from an explicit validator list.
    pub fn from_validators(validators: Vec<Arc<dyn CheckoutValidator>>) -> Self {
        Self { validators }
    }

    /// Validator names in execution order.
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Runs every validator in order, returning the first failure.
    pub async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        for validator in &self.validators {
            debug!(validator = validator.name(), checkout = %ctx.checkout.id, "running validator");
            if let Err(error) = validator.validate(ctx).await {
                warn!(
                    validator = validator.name(),
                    checkout = %ctx.checkout.id,
                    kind = ?error.kind(),
                    %error,
                    "checkout validation failed"
                );
                return Err(error);
            }
        }
        Ok(())
    }
}
