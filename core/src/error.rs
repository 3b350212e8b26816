//! Error types for ledger operations.

use crate::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Every way a ledger operation can fail.
///
/// Business rejections are distinct variants so callers can render distinct
/// user-facing messages without inspecting strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // ═══════════════════════════════════════════════════════════
    // Business Rejections
    // ═══════════════════════════════════════════════════════════

    /// The account id does not resolve in the store.
    #[error("Account {id} not found")]
    AccountNotFound {
        /// Id that failed to resolve
        id: AccountId,
    },

    /// A debit would drive the balance below zero.
    #[error("Insufficient funds in account {id}")]
    InsufficientFunds {
        /// Account that would have gone negative
        id: AccountId,
    },

    /// A credit would drive the cumulative paid-in total above the limit.
    #[error("Pay-in limit reached for account {id}")]
    PayInLimitExceeded {
        /// Account whose limit would have been exceeded
        id: AccountId,
    },

    // ═══════════════════════════════════════════════════════════
    // Invalid Input
    // ═══════════════════════════════════════════════════════════

    /// Amounts must be strictly positive.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// Source and destination of a transfer are the same account.
    #[error("Cannot transfer from account {id} to itself")]
    SameAccount {
        /// The repeated account id
        id: AccountId,
    },

    /// Persisted account data violates a structural invariant.
    #[error("Invalid account state: {reason}")]
    InvalidAccountState {
        /// Which invariant was violated
        reason: String,
    },

    /// Ledger configuration is unusable.
    #[error("Invalid ledger configuration: {0}")]
    InvalidConfig(String),

    // ═══════════════════════════════════════════════════════════
    // Collaborator Failures
    // ═══════════════════════════════════════════════════════════

    /// The account store rejected a save.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// The notifier could not deliver an alert.
    ///
    /// Never fails an operation; see [`crate::operations::Notice`].
    #[error("Notification failure: {0}")]
    NotificationFailure(String),
}

impl LedgerError {
    /// Returns `true` for the terminal business outcomes of an operation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use payin_ledger_core::{AccountId, LedgerError};
    /// let id = AccountId::new();
    /// assert!(LedgerError::InsufficientFunds { id }.is_business_rejection());
    /// assert!(!LedgerError::PersistenceFailure("disk".into()).is_business_rejection());
    /// ```
    #[must_use]
    pub const fn is_business_rejection(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound { .. }
                | Self::InsufficientFunds { .. }
                | Self::PayInLimitExceeded { .. }
        )
    }

    /// Returns `true` if the caller's request caused this error.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        self.is_business_rejection()
            || matches!(self, Self::InvalidAmount(_) | Self::SameAccount { .. })
    }

    /// Stable label used for metrics and structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound { .. } => "account_not_found",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::PayInLimitExceeded { .. } => "pay_in_limit_exceeded",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::SameAccount { .. } => "same_account",
            Self::InvalidAccountState { .. } => "invalid_account_state",
            Self::InvalidConfig(_) => "invalid_config",
            Self::PersistenceFailure(_) => "persistence_failure",
            Self::NotificationFailure(_) => "notification_failure",
        }
    }
}
