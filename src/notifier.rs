use std::sync::Arc;

use crate::account::Account;

/// Side effect fired once per party after a successful transfer. Delivery is fire-and-forget,
/// implementations must not fail the transfer.
pub trait Notifier: Send + Sync {
    fn notify_about_transfer(&self, account: &Account, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        (**self).notify_about_transfer(account, message)
    }
}

/// Writes notifications to the log instead of delivering them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        tracing::info!(account_id = account.id(), "Sending notification: {message}");
    }
}
