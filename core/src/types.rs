//! Domain types for the ledger.
//!
//! - [`AccountId`] and [`UserId`]: opaque identifiers
//! - [`User`]: the owner reference an account carries for notifications
//! - [`Amount`]: a strictly positive decimal quantity of money

use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a ledger account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random `AccountId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `AccountId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `UserId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The owner of an account.
///
/// Accounts hold a copy of this record; its lifecycle belongs to whatever
/// manages users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Contact address for alerts
    pub email: String,
}

impl User {
    /// Creates a user record
    #[must_use]
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Contact address used for notifications
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A strictly positive amount of money.
///
/// Backed by an exact decimal so repeated credits and debits never drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `value` is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use payin_ledger_core::Amount;
    /// # use rust_decimal::Decimal;
    /// assert!(Amount::new(Decimal::new(1050, 2)).is_ok());
    /// assert!(Amount::new(Decimal::ZERO).is_err());
    /// ```
    pub fn new(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(value));
        }
        Ok(Self(value))
    }

    /// Returns the amount as a decimal
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn account_id_display() {
        let id = AccountId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
        assert_eq!(display, id.as_uuid().to_string());
    }

    #[test]
    fn amount_rejects_non_positive() {
        assert_eq!(
            Amount::new(Decimal::ZERO),
            Err(LedgerError::InvalidAmount(Decimal::ZERO))
        );
        assert_eq!(
            Amount::new(dec!(-0.01)),
            Err(LedgerError::InvalidAmount(dec!(-0.01)))
        );
        assert_eq!(Amount::new(dec!(0.01)).unwrap().as_decimal(), dec!(0.01));
    }

    #[test]
    fn amount_deserialization_is_validated() {
        let amount: Amount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(amount.as_decimal(), dec!(12.50));

        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"-3\"").is_err());
    }

    #[test]
    fn user_exposes_contact_address() {
        let user = User::new(UserId::new(), "test.1@example.com");
        assert_eq!(user.email(), "test.1@example.com");
    }
}
