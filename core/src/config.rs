//! Ledger configuration.
//!
//! Limits and notification thresholds are supplied by the application rather
//! than baked into the account entity, so tests and deployments can tune them.

use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default values used when nothing else is configured.
pub mod defaults {
    /// Maximum cumulative amount an account may ever be credited.
    pub const PAY_IN_LIMIT: i64 = 4000;

    /// Balances strictly below this trigger a low-funds alert.
    pub const LOW_FUNDS_THRESHOLD: i64 = 500;

    /// Pay-in headroom strictly below this triggers an approaching-limit alert.
    pub const APPROACHING_PAY_IN_LIMIT_THRESHOLD: i64 = 500;
}

/// Environment variable names read by [`LedgerConfig::from_env`].
pub mod env_keys {
    /// Overrides [`super::LedgerConfig::pay_in_limit`].
    pub const PAY_IN_LIMIT: &str = "LEDGER_PAY_IN_LIMIT";

    /// Overrides [`super::LedgerConfig::low_funds_threshold`].
    pub const LOW_FUNDS_THRESHOLD: &str = "LEDGER_LOW_FUNDS_THRESHOLD";

    /// Overrides [`super::LedgerConfig::approaching_pay_in_limit_threshold`].
    pub const APPROACHING_PAY_IN_LIMIT_THRESHOLD: &str =
        "LEDGER_APPROACHING_PAY_IN_LIMIT_THRESHOLD";
}

/// Limits and thresholds applied by accounts and operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Maximum cumulative paid-in total per account.
    ///
    /// Default: 4000
    pub pay_in_limit: Decimal,

    /// Balance below which the owner is told their funds are low.
    ///
    /// Default: 500
    pub low_funds_threshold: Decimal,

    /// Remaining pay-in headroom below which the owner is warned.
    ///
    /// Default: 500
    pub approaching_pay_in_limit_threshold: Decimal,
}

impl LedgerConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub const fn new(
        pay_in_limit: Decimal,
        low_funds_threshold: Decimal,
        approaching_pay_in_limit_threshold: Decimal,
    ) -> Self {
        Self {
            pay_in_limit,
            low_funds_threshold,
            approaching_pay_in_limit_threshold,
        }
    }

    /// Set the pay-in limit.
    #[must_use]
    pub const fn with_pay_in_limit(mut self, limit: Decimal) -> Self {
        self.pay_in_limit = limit;
        self
    }

    /// Set the low-funds threshold.
    #[must_use]
    pub const fn with_low_funds_threshold(mut self, threshold: Decimal) -> Self {
        self.low_funds_threshold = threshold;
        self
    }

    /// Set the approaching-limit threshold.
    #[must_use]
    pub const fn with_approaching_pay_in_limit_threshold(mut self, threshold: Decimal) -> Self {
        self.approaching_pay_in_limit_threshold = threshold;
        self
    }

    /// Check that the values make sense together.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidConfig`] if the limit is not positive or a
    /// threshold is negative.
    pub fn validate(&self) -> Result<()> {
        if self.pay_in_limit <= Decimal::ZERO {
            return Err(LedgerError::InvalidConfig(format!(
                "pay-in limit must be positive, got {}",
                self.pay_in_limit
            )));
        }

        if self.low_funds_threshold < Decimal::ZERO {
            return Err(LedgerError::InvalidConfig(format!(
                "low-funds threshold must not be negative, got {}",
                self.low_funds_threshold
            )));
        }

        if self.approaching_pay_in_limit_threshold < Decimal::ZERO {
            return Err(LedgerError::InvalidConfig(format!(
                "approaching-limit threshold must not be negative, got {}",
                self.approaching_pay_in_limit_threshold
            )));
        }

        Ok(())
    }

    /// Load configuration from environment variables.
    ///
    /// Missing variables fall back to [`defaults`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidConfig`] if a variable is set but is not a
    /// decimal, or if the resulting configuration fails [`Self::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: i64| -> Result<Decimal> {
            lookup(key).map_or(Ok(Decimal::from(default)), |raw| {
                Decimal::from_str(raw.trim()).map_err(|e| {
                    LedgerError::InvalidConfig(format!("{key}={raw:?} is not a decimal: {e}"))
                })
            })
        };

        let config = Self {
            pay_in_limit: read(env_keys::PAY_IN_LIMIT, defaults::PAY_IN_LIMIT)?,
            low_funds_threshold: read(
                env_keys::LOW_FUNDS_THRESHOLD,
                defaults::LOW_FUNDS_THRESHOLD,
            )?,
            approaching_pay_in_limit_threshold: read(
                env_keys::APPROACHING_PAY_IN_LIMIT_THRESHOLD,
                defaults::APPROACHING_PAY_IN_LIMIT_THRESHOLD,
            )?,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            pay_in_limit: Decimal::from(defaults::PAY_IN_LIMIT),
            low_funds_threshold: Decimal::from(defaults::LOW_FUNDS_THRESHOLD),
            approaching_pay_in_limit_threshold: Decimal::from(
                defaults::APPROACHING_PAY_IN_LIMIT_THRESHOLD,
            ),
        }
    }
}
