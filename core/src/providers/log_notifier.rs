//! Tracing-backed notifier for development.

use crate::error::Result;
use crate::providers::Notifier;
use tracing::warn;

/// Notifier that writes alerts to the tracing pipeline instead of
/// delivering them.
///
/// Useful in development and in deployments where a log shipper forwards
/// alert events to the real channel.
///
/// # Examples
///
/// ```
/// use payin_ledger_core::providers::{LogNotifier, Notifier};
///
/// let notifier = LogNotifier::new();
/// notifier.notify_low_funds("user@example.com").unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new log notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify_low_funds(&self, address: &str) -> Result<()> {
        warn!(
            to = %address,
            alert = "low_funds",
            "Funds are running low"
        );
        Ok(())
    }

    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<()> {
        warn!(
            to = %address,
            alert = "approaching_pay_in_limit",
            "Account is approaching its pay-in limit"
        );
        Ok(())
    }
}
