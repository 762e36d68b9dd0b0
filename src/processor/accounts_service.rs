use std::sync::{Mutex, PoisonError};

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::{Account, AccountId},
    command::{CommandError, CreateAccountCommand, TransferCommand},
    notifier::Notifier,
    store::AccountStore,
};

use super::{Ledger, LedgerError};

/// Ledger backed by an [`AccountStore`].
///
/// Every transfer runs inside one process-wide critical section, so any two transfers are
/// serialized regardless of which accounts they touch. Account creation does not take that
/// lock: it only ever adds keys and relies on the store's own atomic insert.
pub struct AccountsService<S, N> {
    store: S,
    notifier: N,
    transfer_lock: Mutex<()>,
}

impl<S, N> AccountsService<S, N>
where
    S: AccountStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            transfer_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs lookup, validation and both balance updates. Returns post-transfer states of
    /// the debited and credited accounts.
    fn apply_transfer(&self, command: &TransferCommand) -> Result<(Account, Account), LedgerError> {
        // guards no data, so poisoning carries no meaning here
        let _guard = self
            .transfer_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut from = self.store.get(&command.from)?;
        let mut to = self.store.get(&command.to)?;
        if command.is_self_transfer() {
            return Err(CommandError::SelfTransfer {
                account_id: command.from.clone(),
            }
            .into());
        }

        let debit = from.handle_debit(command.amount)?;
        let credit = to.handle_credit(command.amount)?;
        self.store.commit(&[debit.clone(), credit.clone()])?;

        from.apply(&debit)?;
        to.apply(&credit)?;
        Ok((from, to))
    }
}

impl<S, N> Ledger for AccountsService<S, N>
where
    S: AccountStore,
    N: Notifier,
{
    fn create_account(&self, id: AccountId, balance: Decimal) -> Result<(), LedgerError> {
        let command = CreateAccountCommand::parse(id, balance)?;
        self.store
            .create(Account::new(command.account_id.clone(), command.balance))?;
        debug!(account_id = %command.account_id, balance = %command.balance, "Account created");
        Ok(())
    }

    fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        Ok(self.store.get(id)?)
    }

    fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        let command = TransferCommand::parse(from.to_owned(), to.to_owned(), amount)?;
        let (debited, credited) = self.apply_transfer(&command)?;
        debug!(from, to, %amount, "Transfer committed");

        self.notifier.notify_about_transfer(
            &debited,
            &format!("Transferred {amount} to account {}", command.to),
        );
        self.notifier.notify_about_transfer(
            &credited,
            &format!("Received {amount} from account {}", command.from),
        );
        Ok(())
    }
}
