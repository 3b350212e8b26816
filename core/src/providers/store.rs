//! Account store trait.

use crate::account::Account;
use crate::error::Result;
use crate::types::AccountId;
use std::sync::Arc;

/// Account lookup and persistence.
///
/// Implementations are expected to give per-account consistency (optimistic
/// concurrency, a single writer, or similar). The ledger itself takes no locks.
pub trait AccountStore: Send + Sync {
    /// Load an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LedgerError::AccountNotFound`] if the id does not
    /// resolve, or [`crate::LedgerError::PersistenceFailure`] if the backend
    /// cannot be read.
    fn get(&self, id: &AccountId) -> Result<Account>;

    /// Persist a single account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LedgerError::PersistenceFailure`] if the save is rejected.
    fn save(&self, account: &Account) -> Result<()>;

    /// Persist several accounts as one unit of work.
    ///
    /// Either every account is written or none is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LedgerError::PersistenceFailure`] if the unit of work
    /// is rejected. No account may be left written in that case.
    fn save_all(&self, accounts: &[&Account]) -> Result<()>;
}

impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    fn get(&self, id: &AccountId) -> Result<Account> {
        (**self).get(id)
    }

    fn save(&self, account: &Account) -> Result<()> {
        (**self).save(account)
    }

    fn save_all(&self, accounts: &[&Account]) -> Result<()> {
        (**self).save_all(accounts)
    }
}
