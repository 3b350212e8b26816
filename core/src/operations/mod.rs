//! Ledger operations.
//!
//! Each operation is a single linear pass:
//!
//! ```text
//! load ─► guard ─► persist ─► notify
//!           │
//!           └─► rejected: nothing persisted, nobody notified
//! ```
//!
//! Notifications happen only after the store has accepted the new state, and a
//! failed notification never undoes it.

pub mod transfer;
pub mod withdrawal;

pub use transfer::{TransferOperation, TransferReceipt};
pub use withdrawal::{WithdrawalOperation, WithdrawalReceipt};

use crate::account::Account;
use crate::metrics;
use crate::providers::Notifier;
use crate::types::AccountId;
use serde::{Deserialize, Serialize};

/// Which threshold an alert is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Balance dropped below the low-funds threshold
    LowFunds,
    /// Pay-in headroom dropped below the approaching-limit threshold
    ApproachingPayInLimit,
}

impl NoticeKind {
    /// Stable label for metrics and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowFunds => "low_funds",
            Self::ApproachingPayInLimit => "approaching_pay_in_limit",
        }
    }
}

/// An alert an operation dispatched to an account owner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Threshold that was crossed
    pub kind: NoticeKind,
    /// Account the alert is about
    pub account_id: AccountId,
    /// Owner contact address the alert went to
    pub address: String,
    /// Whether the notifier accepted the alert
    pub delivered: bool,
}

/// Sends one alert, logging and recording the outcome.
pub(crate) fn dispatch<N: Notifier + ?Sized>(
    notifier: &N,
    kind: NoticeKind,
    account: &Account,
) -> Notice {
    let address = account.owner().email();
    let result = match kind {
        NoticeKind::LowFunds => notifier.notify_low_funds(address),
        NoticeKind::ApproachingPayInLimit => notifier.notify_approaching_pay_in_limit(address),
    };

    let delivered = match result {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(
                account_id = %account.id(),
                kind = kind.as_str(),
                error = %error,
                "Notification delivery failed"
            );
            false
        }
    };
    metrics::record_notification(kind.as_str(), delivered);

    Notice {
        kind,
        account_id: account.id(),
        address: address.to_string(),
        delivered,
    }
}
