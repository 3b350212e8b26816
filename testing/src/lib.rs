//! # Pay-in Ledger Testing
//!
//! Testing utilities and helpers for the pay-in ledger.
//!
//! This crate provides:
//! - In-memory implementations of the provider traits
//! - Account fixtures and a harness that wires operations to the fakes
//! - Property-based testing strategies
//! - A tracing subscriber for test output
//!
//! ## Example
//!
//! ```
//! use payin_ledger_testing::{LedgerHarness, amount};
//! use rust_decimal::Decimal;
//!
//! let harness = LedgerHarness::new();
//! let from = harness.add_account(Decimal::from(600), "test.1@example.com");
//! let to = harness.add_account(Decimal::ZERO, "test.2@example.com");
//!
//! harness
//!     .transfer_operation()
//!     .execute(from.id(), to.id(), amount(Decimal::from(101)))
//!     .unwrap();
//!
//! assert_eq!(harness.notifier.low_funds_notifications(), vec!["test.1@example.com"]);
//! ```

pub mod ledger_mocks;

pub use ledger_mocks::{InMemoryAccountStore, RecordingNotifier};

/// Account fixtures and the operation harness
pub mod fixtures {
    use crate::ledger_mocks::{InMemoryAccountStore, RecordingNotifier};
    use payin_ledger_core::{
        Account, AccountId, AccountSnapshot, Amount, LedgerConfig, TransferOperation, User,
        UserId, WithdrawalOperation,
    };
    use rust_decimal::Decimal;

    /// Build a valid [`Amount`] from a literal
    ///
    /// # Panics
    ///
    /// Panics if `value` is not strictly positive.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn amount(value: Decimal) -> Amount {
        Amount::new(value).expect("test amounts must be positive")
    }

    /// Account with explicit balance and lifetime paid-in total
    ///
    /// # Panics
    ///
    /// Panics if `balance` or `paid_in` is negative.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn account_with(balance: Decimal, paid_in: Decimal, email: &str) -> Account {
        Account::restore(AccountSnapshot {
            id: AccountId::new(),
            owner: User::new(UserId::new(), email),
            balance,
            withdrawn: Decimal::ZERO,
            paid_in,
        })
        .expect("fixture state must be valid")
    }

    /// Account whose whole balance was paid in
    #[must_use]
    pub fn account_with_balance(balance: Decimal, email: &str) -> Account {
        account_with(balance, balance, email)
    }

    /// Store, notifier and config wired together for operation tests.
    ///
    /// Fields are public so tests can inspect the fakes directly.
    #[derive(Clone, Debug, Default)]
    pub struct LedgerHarness {
        /// Shared account store
        pub store: InMemoryAccountStore,
        /// Shared recording notifier
        pub notifier: RecordingNotifier,
        /// Config handed to every operation
        pub config: LedgerConfig,
    }

    impl LedgerHarness {
        /// Harness with the default config
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Harness with a custom config
        #[must_use]
        pub fn with_config(config: LedgerConfig) -> Self {
            Self {
                config,
                ..Self::default()
            }
        }

        /// Seed an account whose whole balance was paid in
        #[must_use]
        pub fn add_account(&self, balance: Decimal, email: &str) -> Account {
            self.seed(account_with_balance(balance, email))
        }

        /// Seed an account with a separate paid-in total
        #[must_use]
        pub fn add_account_with(&self, balance: Decimal, paid_in: Decimal, email: &str) -> Account {
            self.seed(account_with(balance, paid_in, email))
        }

        fn seed(&self, account: Account) -> Account {
            self.store.insert(account.clone());
            account
        }

        /// Current stored state of an account
        ///
        /// # Panics
        ///
        /// Panics if the account was never seeded.
        #[must_use]
        #[allow(clippy::expect_used)]
        pub fn stored(&self, id: AccountId) -> Account {
            self.store.account(&id).expect("account should be seeded")
        }

        /// Transfer operation over this harness's fakes
        #[must_use]
        pub fn transfer_operation(
            &self,
        ) -> TransferOperation<InMemoryAccountStore, RecordingNotifier> {
            TransferOperation::new(
                self.store.clone(),
                self.notifier.clone(),
                self.config.clone(),
            )
        }

        /// Withdrawal operation over this harness's fakes
        #[must_use]
        pub fn withdrawal_operation(
            &self,
        ) -> WithdrawalOperation<InMemoryAccountStore, RecordingNotifier> {
            WithdrawalOperation::new(
                self.store.clone(),
                self.notifier.clone(),
                self.config.clone(),
            )
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use payin_ledger_core::Amount;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// One guarded mutation applied to an account
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum LedgerStep {
        /// `try_credit`
        Credit(Amount),
        /// `try_debit`
        Debit(Amount),
    }

    /// Positive amounts from 0.01 to 5000.00 in cents
    pub fn amount_strategy() -> impl Strategy<Value = Amount> {
        (1_i64..=500_000).prop_filter_map("amount must be positive", |cents| {
            Amount::new(Decimal::new(cents, 2)).ok()
        })
    }

    /// Non-negative balances from 0.00 to 4000.00 in cents
    pub fn balance_strategy() -> impl Strategy<Value = Decimal> {
        (0_i64..=400_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    /// Sequences of credits and debits
    pub fn ledger_steps(max_len: usize) -> impl Strategy<Value = Vec<LedgerStep>> {
        prop::collection::vec(
            prop_oneof![
                amount_strategy().prop_map(LedgerStep::Credit),
                amount_strategy().prop_map(LedgerStep::Debit),
            ],
            1..=max_len,
        )
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG` and defaults to `warn`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use fixtures::{LedgerHarness, account_with, account_with_balance, amount};
pub use properties::{LedgerStep, amount_strategy, balance_strategy, ledger_steps};
