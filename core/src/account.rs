//! The account entity and its guard logic.
//!
//! An [`Account`] can only change through [`Account::try_credit`] and
//! [`Account::try_debit`]. Each guard checks one invariant and leaves the
//! account untouched when it rejects:
//!
//! - `balance >= 0`
//! - `withdrawn <= 0`
//! - `0 <= paid_in <= pay_in_limit`

use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::types::{AccountId, Amount, User};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Plain persistence shape of an account.
///
/// Stores read and write this; converting back into an [`Account`]
/// re-checks the structural invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Account identifier
    pub id: AccountId,
    /// Account owner
    pub owner: User,
    /// Spendable balance
    pub balance: Decimal,
    /// Lifetime debits as a non-positive running total
    pub withdrawn: Decimal,
    /// Lifetime credits
    pub paid_in: Decimal,
}

/// A ledger account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountSnapshot", into = "AccountSnapshot")]
pub struct Account {
    id: AccountId,
    owner: User,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
}

impl Account {
    /// Opens an empty account.
    #[must_use]
    pub const fn open(id: AccountId, owner: User) -> Self {
        Self {
            id,
            owner,
            balance: Decimal::ZERO,
            withdrawn: Decimal::ZERO,
            paid_in: Decimal::ZERO,
        }
    }

    /// Rebuilds an account from persisted state.
    ///
    /// The pay-in limit is policy rather than structure, so it is enforced by
    /// [`Self::try_credit`] and not re-checked here.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAccountState`] if the balance or paid-in
    /// total is negative, or the withdrawn total is positive.
    pub fn restore(snapshot: AccountSnapshot) -> Result<Self> {
        let AccountSnapshot {
            id,
            owner,
            balance,
            withdrawn,
            paid_in,
        } = snapshot;

        if balance < Decimal::ZERO {
            return Err(invalid_state(id, "balance", balance));
        }
        if withdrawn > Decimal::ZERO {
            return Err(invalid_state(id, "withdrawn", withdrawn));
        }
        if paid_in < Decimal::ZERO {
            return Err(invalid_state(id, "paid_in", paid_in));
        }

        Ok(Self {
            id,
            owner,
            balance,
            withdrawn,
            paid_in,
        })
    }

    /// Returns the persistence shape of this account.
    #[must_use]
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            owner: self.owner.clone(),
            balance: self.balance,
            withdrawn: self.withdrawn,
            paid_in: self.paid_in,
        }
    }

    /// Account identifier
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Account owner
    #[must_use]
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Spendable balance
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Lifetime debits, zero or negative
    #[must_use]
    pub const fn withdrawn(&self) -> Decimal {
        self.withdrawn
    }

    /// Lifetime credits
    #[must_use]
    pub const fn paid_in(&self) -> Decimal {
        self.paid_in
    }

    /// Adds `amount` to the balance unless the lifetime paid-in total would
    /// exceed the configured limit.
    ///
    /// Crediting exactly up to the limit succeeds. Returns `false` and leaves
    /// the account unchanged on rejection.
    #[must_use]
    pub fn try_credit(&mut self, amount: Amount, config: &LedgerConfig) -> bool {
        let amount = amount.as_decimal();

        let Some(paid_in) = self.paid_in.checked_add(amount) else {
            return false;
        };
        if paid_in > config.pay_in_limit {
            return false;
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            return false;
        };

        self.balance = balance;
        self.paid_in = paid_in;
        true
    }

    /// Removes `amount` from the balance unless it would go negative.
    ///
    /// Debiting the whole balance succeeds. Returns `false` and leaves the
    /// account unchanged on rejection.
    #[must_use]
    pub fn try_debit(&mut self, amount: Amount) -> bool {
        let amount = amount.as_decimal();

        let Some(balance) = self.balance.checked_sub(amount) else {
            return false;
        };
        if balance < Decimal::ZERO {
            return false;
        }
        let Some(withdrawn) = self.withdrawn.checked_sub(amount) else {
            return false;
        };

        self.balance = balance;
        self.withdrawn = withdrawn;
        true
    }

    /// How much more may be credited before the pay-in limit is reached.
    #[must_use]
    pub fn pay_in_headroom(&self, config: &LedgerConfig) -> Decimal {
        config.pay_in_limit - self.paid_in
    }

    /// `true` when the remaining headroom is strictly below the threshold.
    #[must_use]
    pub fn is_approaching_pay_in_limit(&self, config: &LedgerConfig) -> bool {
        self.pay_in_headroom(config) < config.approaching_pay_in_limit_threshold
    }

    /// `true` when the balance is strictly below the low-funds threshold.
    #[must_use]
    pub fn has_low_funds(&self, config: &LedgerConfig) -> bool {
        self.balance < config.low_funds_threshold
    }
}

impl TryFrom<AccountSnapshot> for Account {
    type Error = LedgerError;

    fn try_from(snapshot: AccountSnapshot) -> Result<Self> {
        Self::restore(snapshot)
    }
}

impl From<Account> for AccountSnapshot {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            owner: account.owner,
            balance: account.balance,
            withdrawn: account.withdrawn,
            paid_in: account.paid_in,
        }
    }
}

fn invalid_state(id: AccountId, field: &str, value: Decimal) -> LedgerError {
    LedgerError::InvalidAccountState {
        reason: format!("account {id} has {field} = {value}"),
    }
}
