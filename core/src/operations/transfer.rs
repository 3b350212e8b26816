//! Money transfer between two accounts.

use super::{Notice, NoticeKind, dispatch};
use crate::account::Account;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::metrics;
use crate::providers::{AccountStore, Notifier};
use crate::types::{AccountId, Amount};

/// What a committed transfer produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Source account as persisted
    pub from: Account,
    /// Destination account as persisted
    pub to: Account,
    /// Alerts dispatched after the commit
    pub notices: Vec<Notice>,
}

/// Moves funds from one account to another.
///
/// The source is debited, the destination credited, and both are persisted
/// through [`AccountStore::save_all`] so a store failure can never leave one
/// side written without the other.
#[derive(Clone, Debug)]
pub struct TransferOperation<S, N> {
    store: S,
    notifier: N,
    config: LedgerConfig,
}

impl<S, N> TransferOperation<S, N>
where
    S: AccountStore,
    N: Notifier,
{
    /// Creates a new `TransferOperation`
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

    /// Transfer `amount` from `from_id` to `to_id`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::SameAccount`] if both ids are equal
    /// - [`LedgerError::AccountNotFound`] if either id does not resolve
    /// - [`LedgerError::InsufficientFunds`] if the source cannot cover `amount`
    /// - [`LedgerError::PayInLimitExceeded`] if the destination would pass its limit
    /// - [`LedgerError::PersistenceFailure`] if the store rejects the unit of work
    ///
    /// Nothing is persisted and nobody is notified on any of these paths.
    #[tracing::instrument(skip_all, fields(from = %from_id, to = %to_id, amount = %amount))]
    pub fn execute(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        let result = self.transfer(from_id, to_id, amount);
        metrics::record_transfer(
            result
                .as_ref()
                .map_or_else(LedgerError::kind, |_| metrics::OUTCOME_COMPLETED),
        );
        result
    }

    fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        if from_id == to_id {
            tracing::debug!("Rejected: source and destination are the same account");
            return Err(LedgerError::SameAccount { id: from_id });
        }

        let mut from = self.store.get(&from_id)?;
        let mut to = self.store.get(&to_id)?;

        if !from.try_debit(amount) {
            tracing::debug!(balance = %from.balance(), "Rejected: insufficient funds");
            return Err(LedgerError::InsufficientFunds { id: from_id });
        }

        // `from` is debited in memory only; dropping it here discards the debit.
        if !to.try_credit(amount, &self.config) {
            tracing::debug!(paid_in = %to.paid_in(), "Rejected: pay-in limit reached");
            return Err(LedgerError::PayInLimitExceeded { id: to_id });
        }

        if let Err(error) = self.store.save_all(&[&from, &to]) {
            tracing::error!(error = %error, "Failed to persist transfer");
            return Err(error);
        }

        tracing::info!(
            from_balance = %from.balance(),
            to_balance = %to.balance(),
            "Transfer completed"
        );

        let mut notices = Vec::new();
        if from.has_low_funds(&self.config) {
            notices.push(dispatch(&self.notifier, NoticeKind::LowFunds, &from));
        }
        if to.is_approaching_pay_in_limit(&self.config) {
            notices.push(dispatch(
                &self.notifier,
                NoticeKind::ApproachingPayInLimit,
                &to,
            ));
        }

        Ok(TransferReceipt { from, to, notices })
    }
}
