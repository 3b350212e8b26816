//! In-memory ledger collaborators
//!
//! Provides fast, deterministic fakes for the provider traits:
//! - [`InMemoryAccountStore`]: HashMap-based account storage with save auditing
//!   and per-account failure injection
//! - [`RecordingNotifier`]: captures every alert instead of delivering it

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Inspection helpers only panic on a poisoned lock

use payin_ledger_core::{Account, AccountId, AccountStore, LedgerError, Notifier, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug, Default)]
struct StoreState {
    accounts: HashMap<AccountId, Account>,
    rejected: HashSet<AccountId>,
    writes: Vec<AccountId>,
}

/// In-memory account store for fast, deterministic testing.
///
/// Clones share the same storage, so a test can hand one clone to an
/// operation and inspect another.
///
/// # Example
///
/// ```
/// use payin_ledger_core::{Account, AccountId, AccountStore, User, UserId};
/// use payin_ledger_testing::InMemoryAccountStore;
///
/// let store = InMemoryAccountStore::new();
/// let id = AccountId::new();
/// store.insert(Account::open(id, User::new(UserId::new(), "a@example.com")));
///
/// assert!(store.get(&id).is_ok());
/// assert_eq!(store.write_count(), 0); // seeding is not a write
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryAccountStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryAccountStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with accounts
    #[must_use]
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Seed an account without recording a write
    pub fn insert(&self, account: Account) {
        self.state
            .write()
            .unwrap()
            .accounts
            .insert(account.id(), account);
    }

    /// Current stored state of an account
    #[must_use]
    pub fn account(&self, id: &AccountId) -> Option<Account> {
        self.state.read().unwrap().accounts.get(id).cloned()
    }

    /// Make every future save touching `id` fail
    pub fn reject_saves_for(&self, id: AccountId) {
        self.state.write().unwrap().rejected.insert(id);
    }

    /// Undo [`Self::reject_saves_for`]
    pub fn accept_saves_for(&self, id: &AccountId) {
        self.state.write().unwrap().rejected.remove(id);
    }

    /// Ids written through the store trait, in write order
    #[must_use]
    pub fn writes(&self) -> Vec<AccountId> {
        self.state.read().unwrap().writes.clone()
    }

    /// Number of account writes through the store trait
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().unwrap().writes.len()
    }

    /// Number of stored accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().unwrap().accounts.len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().unwrap().accounts.is_empty()
    }

    /// Remove all accounts, rejections and recorded writes
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.accounts.clear();
        state.rejected.clear();
        state.writes.clear();
    }
}

fn check_writable(state: &StoreState, account: &Account) -> Result<()> {
    let id = account.id();
    if !state.accounts.contains_key(&id) {
        return Err(LedgerError::AccountNotFound { id });
    }
    if state.rejected.contains(&id) {
        return Err(LedgerError::PersistenceFailure(format!(
            "save rejected for account {id}"
        )));
    }
    Ok(())
}

fn poisoned() -> LedgerError {
    LedgerError::PersistenceFailure("account store lock poisoned".to_string())
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: &AccountId) -> Result<Account> {
        self.state
            .read()
            .map_err(|_| poisoned())?
            .accounts
            .get(id)
            .cloned()
            .ok_or(LedgerError::AccountNotFound { id: *id })
    }

    fn save(&self, account: &Account) -> Result<()> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        check_writable(&state, account)?;

        state.accounts.insert(account.id(), account.clone());
        state.writes.push(account.id());
        Ok(())
    }

    fn save_all(&self, accounts: &[&Account]) -> Result<()> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        // Validate the whole unit of work before touching anything.
        for account in accounts {
            check_writable(&state, account)?;
        }

        for account in accounts {
            state.accounts.insert(account.id(), (*account).clone());
            state.writes.push(account.id());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct NotifierState {
    low_funds: Vec<String>,
    approaching_limit: Vec<String>,
    attempts: usize,
    failing: bool,
}

/// Notifier that records alerts for assertions.
///
/// A failing notifier still counts attempts but records nothing as delivered.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    state: Arc<Mutex<NotifierState>>,
}

impl RecordingNotifier {
    /// Create a notifier that accepts every alert
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that rejects every alert
    #[must_use]
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_failing(true);
        notifier
    }

    /// Switch delivery failures on or off
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Addresses that received a low-funds alert
    #[must_use]
    pub fn low_funds_notifications(&self) -> Vec<String> {
        self.state.lock().unwrap().low_funds.clone()
    }

    /// Addresses that received an approaching-limit alert
    #[must_use]
    pub fn approaching_limit_notifications(&self) -> Vec<String> {
        self.state.lock().unwrap().approaching_limit.clone()
    }

    /// Delivery attempts, successful or not
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.state.lock().unwrap().attempts
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.low_funds.clear();
        state.approaching_limit.clear();
        state.attempts = 0;
    }

    fn record(&self, address: &str, pick: fn(&mut NotifierState) -> &mut Vec<String>) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| LedgerError::NotificationFailure("notifier lock poisoned".to_string()))?;
        state.attempts += 1;

        if state.failing {
            return Err(LedgerError::NotificationFailure(format!(
                "delivery to {address} failed"
            )));
        }

        pick(&mut *state).push(address.to_string());
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    fn notify_low_funds(&self, address: &str) -> Result<()> {
        self.record(address, |state| &mut state.low_funds)
    }

    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<()> {
        self.record(address, |state| &mut state.approaching_limit)
    }
}
