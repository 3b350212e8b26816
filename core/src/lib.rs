//! # Pay-in Ledger Core
//!
//! Guarded account state and the two money-movement operations of a personal
//! banking ledger.
//!
//! Two rules hold for every account at all times:
//!
//! - the balance never goes negative
//! - the lifetime paid-in total never exceeds the configured pay-in limit
//!
//! ## Core Concepts
//!
//! - **Account**: entity whose only mutators are the guards
//!   [`Account::try_credit`] and [`Account::try_debit`]
//! - **`LedgerConfig`**: the pay-in limit and the two alert thresholds
//! - **Providers**: [`AccountStore`] and [`Notifier`], injected collaborators
//! - **Operations**: [`TransferOperation`] and [`WithdrawalOperation`]
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  TransferOperation   │──┐
//! │  WithdrawalOperation │  │ load / save_all        ┌──────────────┐
//! └──────────┬───────────┘  ├───────────────────────►│ AccountStore │
//!            │              │                        └──────────────┘
//!            │ try_debit    │ low funds / near limit ┌──────────────┐
//!            │ try_credit   └───────────────────────►│   Notifier   │
//!            ▼                                       └──────────────┘
//! ┌──────────────────────┐
//! │       Account        │
//! └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use payin_ledger_core::*;
//!
//! let transfer = TransferOperation::new(store, LogNotifier::new(), LedgerConfig::default());
//! let receipt = transfer.execute(from, to, Amount::new(dec!(400))?)?;
//! assert!(receipt.from.balance() >= Decimal::ZERO);
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod metrics;
pub mod operations;
pub mod providers;
pub mod types;

// Re-export commonly used types
pub use account::{Account, AccountSnapshot};
pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use operations::{
    Notice, NoticeKind, TransferOperation, TransferReceipt, WithdrawalOperation,
    WithdrawalReceipt,
};
pub use providers::{AccountStore, LogNotifier, Notifier};
pub use rust_decimal::Decimal;
pub use types::{AccountId, Amount, User, UserId};
