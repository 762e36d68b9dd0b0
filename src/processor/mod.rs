use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId},
    command::CommandError,
    store::StoreError,
};

pub mod accounts_service;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    StoreErr(#[from] StoreError),
}

pub trait Ledger {
    fn create_account(&self, id: AccountId, balance: Decimal) -> Result<(), LedgerError>;

    fn get_account(&self, id: &str) -> Result<Account, LedgerError>;

    fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError>;
}
