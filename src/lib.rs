/// Account record and its balance events.
/// Balances only change by applying events, which are created by handling debits and credits.
pub mod account;

/// Validated create and transfer commands, later executed by [`processor`].
pub mod command;

/// Account storage interface plus "in memory" implementation.
pub mod store;

/// Port used to tell both parties about a completed transfer.
pub mod notifier;

/// Ledger interface and the accounts service implementing it.
/// Coordinates command validation, the transfer critical section and notifications.
pub mod processor;

/// Bootstraps the ledger from a CSV command file. Used by the binary and the
/// integration tests.
pub mod bin_utils;
