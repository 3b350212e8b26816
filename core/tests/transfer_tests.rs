//! Integration tests for the transfer operation.

#![allow(clippy::unwrap_used)] // Tests can use unwrap

use payin_ledger_core::{AccountId, LedgerConfig, LedgerError, NoticeKind};
use payin_ledger_testing::{LedgerHarness, RecordingNotifier, amount, init_test_tracing};
use rust_decimal_macros::dec;

/// Create a harness with default limits and tracing enabled.
fn harness() -> LedgerHarness {
    init_test_tracing();
    LedgerHarness::new()
}

#[test]
fn test_transfer_deducts_from_source() {
    let harness = harness();
    let from = harness.add_account(dec!(400), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(400)))
        .unwrap();

    let from = harness.stored(from.id());
    assert_eq!(from.balance(), dec!(0));
    assert_eq!(from.withdrawn(), dec!(-400));
}

#[test]
fn test_transfer_adds_to_destination() {
    let harness = harness();
    let from = harness.add_account(dec!(400), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(400)))
        .unwrap();

    let stored = harness.stored(to.id());
    assert_eq!(stored.balance(), dec!(400));
    assert_eq!(stored.paid_in(), dec!(400));
    assert_eq!(receipt.to, stored);
    assert_eq!(receipt.from, harness.stored(from.id()));
}

#[test]
fn test_transfer_persists_both_accounts_once() {
    let harness = harness();
    let from = harness.add_account(dec!(400), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(50)))
        .unwrap();

    assert_eq!(harness.store.writes(), vec![from.id(), to.id()]);
}

#[test]
fn test_transfer_insufficient_funds() {
    let harness = harness();
    let from = harness.add_account(dec!(399), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let result = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(400)));

    assert_eq!(result, Err(LedgerError::InsufficientFunds { id: from.id() }));
    assert_eq!(harness.stored(from.id()), from);
    assert_eq!(harness.stored(to.id()), to);
    assert_eq!(harness.store.write_count(), 0);
    assert_eq!(harness.notifier.attempts(), 0);
}

#[test]
fn test_transfer_pay_in_limit_on_fresh_account() {
    let harness = harness();
    let from = harness.add_account(dec!(4000), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let result = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(4001)));

    // The source cannot cover 4001 either; funds are checked first.
    assert_eq!(result, Err(LedgerError::InsufficientFunds { id: from.id() }));

    let from = harness.add_account(dec!(5000), "test.3@example.com");
    let result = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(4001)));

    assert_eq!(result, Err(LedgerError::PayInLimitExceeded { id: to.id() }));
}

#[test]
fn test_transfer_pay_in_limit_accumulates_over_time() {
    let harness = harness();
    let from = harness.add_account(dec!(4000), "test.1@example.com");
    let to = harness.add_account_with(dec!(0), dec!(3990), "test.2@example.com");
    let transfer = harness.transfer_operation();

    let result = transfer.execute(from.id(), to.id(), amount(dec!(11)));
    assert_eq!(result, Err(LedgerError::PayInLimitExceeded { id: to.id() }));
    assert_eq!(harness.stored(to.id()).paid_in(), dec!(3990));

    transfer
        .execute(from.id(), to.id(), amount(dec!(10)))
        .unwrap();
    assert_eq!(harness.stored(to.id()).paid_in(), dec!(4000));
}

#[test]
fn test_pay_in_limit_exceeded_persists_nothing() {
    let harness = harness();
    let from = harness.add_account(dec!(1000), "test.1@example.com");
    let to = harness.add_account_with(dec!(0), dec!(3990), "test.2@example.com");

    let result = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(500)));

    assert!(matches!(result, Err(LedgerError::PayInLimitExceeded { .. })));
    assert_eq!(harness.stored(from.id()).balance(), dec!(1000));
    assert_eq!(harness.stored(from.id()).withdrawn(), dec!(0));
    assert_eq!(harness.store.write_count(), 0);
    assert_eq!(harness.notifier.attempts(), 0);
}

#[test]
fn test_low_funds_notification_below_threshold() {
    let harness = harness();
    let from = harness.add_account(dec!(600), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(101)))
        .unwrap();

    assert_eq!(
        harness.notifier.low_funds_notifications(),
        vec!["test.1@example.com"]
    );
    assert_eq!(receipt.notices.len(), 1);
    assert_eq!(receipt.notices[0].kind, NoticeKind::LowFunds);
    assert_eq!(receipt.notices[0].account_id, from.id());
    assert!(receipt.notices[0].delivered);
}

#[test]
fn test_no_low_funds_notification_at_threshold() {
    let harness = harness();
    let from = harness.add_account(dec!(600), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(100)))
        .unwrap();

    assert!(harness.notifier.low_funds_notifications().is_empty());
    assert!(receipt.notices.is_empty());
}

#[test]
fn test_approaching_limit_notification_below_threshold() {
    let harness = harness();
    let from = harness.add_account(dec!(1000), "test.1@example.com");
    let to = harness.add_account_with(dec!(0), dec!(3401), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(100)))
        .unwrap();

    assert_eq!(
        harness.notifier.approaching_limit_notifications(),
        vec!["test.2@example.com"]
    );
    assert!(harness.notifier.low_funds_notifications().is_empty());
    assert_eq!(receipt.notices.len(), 1);
    assert_eq!(receipt.notices[0].kind, NoticeKind::ApproachingPayInLimit);
    assert_eq!(receipt.notices[0].address, "test.2@example.com");
}

#[test]
fn test_no_approaching_limit_notification_at_threshold() {
    let harness = harness();
    let from = harness.add_account(dec!(1000), "test.1@example.com");
    let to = harness.add_account_with(dec!(0), dec!(3400), "test.2@example.com");

    harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(100)))
        .unwrap();

    assert!(harness.notifier.approaching_limit_notifications().is_empty());
    assert_eq!(harness.notifier.attempts(), 0);
}

#[test]
fn test_both_notifications_in_one_transfer() {
    let harness = harness();
    let from = harness.add_account(dec!(600), "test.1@example.com");
    let to = harness.add_account_with(dec!(0), dec!(3401), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(101)))
        .unwrap();

    let kinds: Vec<_> = receipt.notices.iter().map(|notice| notice.kind).collect();
    assert_eq!(
        kinds,
        vec![NoticeKind::LowFunds, NoticeKind::ApproachingPayInLimit]
    );
    assert_eq!(harness.notifier.attempts(), 2);
}

#[test]
fn test_transfer_unknown_source() {
    let harness = harness();
    let to = harness.add_account(dec!(0), "test.2@example.com");
    let missing = AccountId::new();

    let result = harness
        .transfer_operation()
        .execute(missing, to.id(), amount(dec!(1)));

    assert_eq!(result, Err(LedgerError::AccountNotFound { id: missing }));
    assert_eq!(harness.store.write_count(), 0);
}

#[test]
fn test_transfer_unknown_destination() {
    let harness = harness();
    let from = harness.add_account(dec!(100), "test.1@example.com");
    let missing = AccountId::new();

    let result = harness
        .transfer_operation()
        .execute(from.id(), missing, amount(dec!(1)));

    assert_eq!(result, Err(LedgerError::AccountNotFound { id: missing }));
    assert_eq!(harness.stored(from.id()), from);
}

#[test]
fn test_transfer_to_same_account_is_rejected() {
    let harness = harness();
    let account = harness.add_account(dec!(100), "test.1@example.com");

    let result = harness
        .transfer_operation()
        .execute(account.id(), account.id(), amount(dec!(10)));

    assert_eq!(result, Err(LedgerError::SameAccount { id: account.id() }));
    assert!(result.unwrap_err().is_user_error());
    assert_eq!(harness.store.write_count(), 0);
}

#[test]
fn test_persistence_failure_leaves_both_accounts_untouched() {
    let harness = harness();
    let from = harness.add_account(dec!(600), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");
    harness.store.reject_saves_for(to.id());

    let result = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(200)));

    assert!(matches!(result, Err(LedgerError::PersistenceFailure(_))));
    assert_eq!(harness.stored(from.id()), from);
    assert_eq!(harness.stored(to.id()), to);
    assert_eq!(harness.notifier.attempts(), 0);
}

#[test]
fn test_failed_notification_does_not_undo_transfer() {
    init_test_tracing();
    let harness = LedgerHarness {
        notifier: RecordingNotifier::failing(),
        ..LedgerHarness::new()
    };
    let from = harness.add_account(dec!(600), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");

    let receipt = harness
        .transfer_operation()
        .execute(from.id(), to.id(), amount(dec!(101)))
        .unwrap();

    assert_eq!(harness.stored(from.id()).balance(), dec!(499));
    assert_eq!(harness.stored(to.id()).balance(), dec!(101));
    assert_eq!(receipt.notices.len(), 1);
    assert!(!receipt.notices[0].delivered);
    assert_eq!(harness.notifier.attempts(), 1);
}

#[test]
fn test_custom_config_limits() {
    let config = LedgerConfig::default()
        .with_pay_in_limit(dec!(100))
        .with_low_funds_threshold(dec!(10))
        .with_approaching_pay_in_limit_threshold(dec!(20));
    init_test_tracing();
    let harness = LedgerHarness::with_config(config);
    let from = harness.add_account(dec!(200), "test.1@example.com");
    let to = harness.add_account(dec!(0), "test.2@example.com");
    let transfer = harness.transfer_operation();

    let result = transfer.execute(from.id(), to.id(), amount(dec!(101)));
    assert_eq!(result, Err(LedgerError::PayInLimitExceeded { id: to.id() }));

    let receipt = transfer
        .execute(from.id(), to.id(), amount(dec!(81)))
        .unwrap();
    assert_eq!(receipt.notices.len(), 1);
    assert_eq!(receipt.notices[0].kind, NoticeKind::ApproachingPayInLimit);
}
