//! Pipeline configuration
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `EVENT_CHECKOUT`
//! prefix and nested values use double underscores as separators.

use serde::Deserialize;
use thiserror::Error;

/// Error loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable policy for the checkout validation pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Minutes an unfinished checkout keeps counting toward capacity.
    #[serde(default = "default_hold_ttl_minutes")]
    pub hold_ttl_minutes: i64,

    /// Role required to apply an admin discount override.
    #[serde(default = "default_admin_discount_role")]
    pub admin_discount_role: String,
}

fn default_hold_ttl_minutes() -> i64 {
    30
}

fn default_admin_discount_role() -> String {
    "ROLE_SUPER_ADMIN".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            hold_ttl_minutes: default_hold_ttl_minutes(),
            admin_discount_role: default_admin_discount_role(),
        }
    }
}

impl CheckoutConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file if present, then environment variables such as
    /// `EVENT_CHECKOUT__HOLD_TTL_MINUTES=45`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_CHECKOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid(format!(
                "hold_ttl_minutes must be positive, got {}",
                self.hold_ttl_minutes
            )));
        }
        if self.admin_discount_role.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "admin_discount_role must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
