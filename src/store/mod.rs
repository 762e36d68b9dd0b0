use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError, AccountEvent, AccountId};

pub mod in_memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account id {0} already exists!")]
    DuplicateAccountId(AccountId),
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("Account {account_id} cannot be stored with negative balance {balance}")]
    NegativeBalance {
        account_id: AccountId,
        balance: Decimal,
    },
    #[error(transparent)]
    EventRejected(#[from] AccountError),
    #[error("Account store lock poisoned")]
    Poisoned,
}

/// Owns every account record. All methods take `&self` and must be safe to call from
/// many threads at once.
pub trait AccountStore: Send + Sync {
    /// Inserts `account` unless its id is already taken or its balance is negative. Existence
    /// check and insert are a single atomic step.
    fn create(&self, account: Account) -> Result<(), StoreError>;

    /// Latest committed state of the account.
    fn get(&self, id: &str) -> Result<Account, StoreError>;

    /// Applies all `events` or none of them. Readers never observe a partially applied batch,
    /// and a rejected event leaves every account as it was.
    fn commit(&self, events: &[AccountEvent]) -> Result<(), StoreError>;

    /// Snapshot of every account, ordered by id.
    fn accounts(&self) -> Result<Vec<Account>, StoreError>;

    /// Removes every account. Meant for resetting between test cases.
    fn clear(&self) -> Result<(), StoreError>;
}
