//! Ledger collaborators.
//!
//! Operations never talk to storage or messaging directly. They depend on
//! these small capability traits, and the host supplies implementations:
//!
//! - **Testing**: in-memory fakes from `payin-ledger-testing`
//! - **Production**: a database-backed store, an email or push notifier
//! - **Development**: [`LogNotifier`], which only emits tracing events

pub mod log_notifier;
pub mod notifier;
pub mod store;

pub use log_notifier::LogNotifier;
pub use notifier::Notifier;
pub use store::AccountStore;
