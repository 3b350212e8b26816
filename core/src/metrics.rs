//! Operation counters.
//!
//! Counters are recorded through the `metrics` facade. Nothing is exported
//! until the host installs a recorder (for example a Prometheus exporter);
//! until then recording is a no-op.

use metrics::{counter, describe_counter};

/// Transfers by outcome (`completed` or an error kind).
pub const TRANSFERS_TOTAL: &str = "ledger_transfers_total";

/// Withdrawals by outcome (`completed` or an error kind).
pub const WITHDRAWALS_TOTAL: &str = "ledger_withdrawals_total";

/// Alerts by kind and whether delivery succeeded.
pub const NOTIFICATIONS_TOTAL: &str = "ledger_notifications_total";

/// Outcome label for operations that committed.
pub const OUTCOME_COMPLETED: &str = "completed";

/// Describe every ledger metric to the installed recorder.
///
/// Call once after installing a recorder.
pub fn register_metrics() {
    describe_counter!(TRANSFERS_TOTAL, "Transfers executed, labelled by outcome");
    describe_counter!(WITHDRAWALS_TOTAL, "Withdrawals executed, labelled by outcome");
    describe_counter!(
        NOTIFICATIONS_TOTAL,
        "Owner alerts dispatched, labelled by kind and delivery"
    );
}

pub(crate) fn record_transfer(outcome: &'static str) {
    counter!(TRANSFERS_TOTAL, "outcome" => outcome).increment(1);
}

pub(crate) fn record_withdrawal(outcome: &'static str) {
    counter!(WITHDRAWALS_TOTAL, "outcome" => outcome).increment(1);
}

pub(crate) fn record_notification(kind: &'static str, delivered: bool) {
    let delivered = if delivered { "true" } else { "false" };
    counter!(NOTIFICATIONS_TOTAL, "kind" => kind, "delivered" => delivered).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        register_metrics();
        record_transfer(OUTCOME_COMPLETED);
        record_withdrawal("insufficient_funds");
        record_notification("low_funds", false);
    }
}
