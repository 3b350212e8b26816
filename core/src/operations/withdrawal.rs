//! Withdrawal from a single account.

use super::{Notice, NoticeKind, dispatch};
use crate::account::Account;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::metrics;
use crate::providers::{AccountStore, Notifier};
use crate::types::{AccountId, Amount};

/// What a committed withdrawal produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    /// Account as persisted
    pub account: Account,
    /// Alerts dispatched after the commit
    pub notices: Vec<Notice>,
}

/// Removes funds from one account.
#[derive(Clone, Debug)]
pub struct WithdrawalOperation<S, N> {
    store: S,
    notifier: N,
    config: LedgerConfig,
}

impl<S, N> WithdrawalOperation<S, N>
where
    S: AccountStore,
    N: Notifier,
{
    /// Creates a new `WithdrawalOperation`
    #[must_use]
    pub const fn new(store: S, notifier: N, config: LedgerConfig) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Limits and thresholds this operation applies
    #[must_use]
    pub const fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Withdraw `amount` from `account_id`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountNotFound`] if the id does not resolve
    /// - [`LedgerError::InsufficientFunds`] if the balance cannot cover `amount`
    /// - [`LedgerError::PersistenceFailure`] if the store rejects the save
    #[tracing::instrument(skip_all, fields(account = %account_id, amount = %amount))]
    pub fn execute(&self, account_id: AccountId, amount: Amount) -> Result<WithdrawalReceipt> {
        let result = self.withdraw(account_id, amount);
        metrics::record_withdrawal(
            result
                .as_ref()
                .map_or_else(LedgerError::kind, |_| metrics::OUTCOME_COMPLETED),
        );
        result
    }

    fn withdraw(&self, account_id: AccountId, amount: Amount) -> Result<WithdrawalReceipt> {
        let mut account = self.store.get(&account_id)?;

        if !account.try_debit(amount) {
            tracing::debug!(balance = %account.balance(), "Rejected: insufficient funds");
            return Err(LedgerError::InsufficientFunds { id: account_id });
        }

        if let Err(error) = self.store.save(&account) {
            tracing::error!(error = %error, "Failed to persist withdrawal");
            return Err(error);
        }

        tracing::info!(balance = %account.balance(), "Withdrawal completed");

        let mut notices = Vec::new();
        if account.has_low_funds(&self.config) {
            notices.push(dispatch(&self.notifier, NoticeKind::LowFunds, &account));
        }

        Ok(WithdrawalReceipt { account, notices })
    }
}
