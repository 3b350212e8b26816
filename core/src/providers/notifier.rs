//! Notifier trait.

use crate::error::Result;
use std::sync::Arc;

/// Alert delivery to account owners.
///
/// This trait abstracts over delivery channels (email, push, SMS).
/// Operations treat it as best effort: an error is logged and reported on
/// the receipt, never rolled back into the ledger.
pub trait Notifier: Send + Sync {
    /// Tell the owner their balance has dropped below the low-funds threshold.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LedgerError::NotificationFailure`] if delivery fails.
    fn notify_low_funds(&self, address: &str) -> Result<()>;

    /// Tell the owner their account is close to its lifetime pay-in limit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LedgerError::NotificationFailure`] if delivery fails.
    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<()>;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify_low_funds(&self, address: &str) -> Result<()> {
        (**self).notify_low_funds(address)
    }

    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<()> {
        (**self).notify_approaching_pay_in_limit(address)
    }
}
