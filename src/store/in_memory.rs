use std::collections::{HashMap, hash_map::Entry};
use std::sync::RwLock;

use rust_decimal::Decimal;

use crate::account::{Account, AccountEvent, AccountId};

use super::{AccountStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, account: Account) -> Result<(), StoreError> {
        if account.balance() < Decimal::ZERO {
            return Err(StoreError::NegativeBalance {
                account_id: account.id().to_owned(),
                balance: account.balance(),
            });
        }
        let mut accounts = self.accounts.write().map_err(|_| StoreError::Poisoned)?;
        match accounts.entry(account.id().to_owned()) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateAccountId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Result<Account, StoreError> {
        let accounts = self.accounts.read().map_err(|_| StoreError::Poisoned)?;
        accounts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::AccountNotFound(id.to_owned()))
    }

    fn commit(&self, events: &[AccountEvent]) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().map_err(|_| StoreError::Poisoned)?;

        // stage every change on copies, the map is written only once the whole batch applies
        let mut staged: HashMap<AccountId, Account> = HashMap::new();
        for evt in events {
            let acc = match staged.entry(evt.account_id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = accounts
                        .get(&evt.account_id)
                        .ok_or_else(|| StoreError::AccountNotFound(evt.account_id.clone()))?;
                    entry.insert(current.clone())
                }
            };
            acc.apply(evt)?;
        }

        accounts.extend(staged);
        Ok(())
    }

    fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = self.accounts.read().map_err(|_| StoreError::Poisoned)?;
        let mut snapshot: Vec<Account> = accounts.values().cloned().collect();
        snapshot.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(snapshot)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.accounts
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .clear();
        Ok(())
    }
}
