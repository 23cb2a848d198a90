//! Authorization check for admin discount overrides.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{ValidationContext, validators::CheckoutValidator};
use crate::domain::checkout::CheckoutError;
use crate::ports::PermissionChecker;

/// Rejects admin discount overrides from actors without the required role.
///
/// A request without an override (no kind, or a non-positive value) passes
/// without consulting the permission port.
pub struct AdminDiscountAuthorizationValidator {
    permissions: Arc<dyn PermissionChecker>,
    required_role: String,
}

impl AdminDiscountAuthorizationValidator {
    pub fn new(permissions: Arc<dyn PermissionChecker>, required_role: impl Into<String>) -> Self {
        Self {
            permissions,
            required_role: required_role.into(),
        }
    }
}

#[async_trait]
impl CheckoutValidator for AdminDiscountAuthorizationValidator {
    fn name(&self) -> &'static str {
        "admin_discount_authorization"
    }

    async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), CheckoutError> {
        if !ctx.request.has_admin_discount() {
            return Ok(());
        }
        if self
            .permissions
            .has_role(&ctx.actor.id, &self.required_role)
            .await?
        {
            Ok(())
        } else {
            Err(CheckoutError::AdminDiscountNotPermitted {
                role: self.required_role.clone(),
            })
        }
    }
}
