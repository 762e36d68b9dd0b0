use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Create,
    Transfer,
}

#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub account_id: AccountId,
    pub balance: Decimal,
}

#[derive(Debug, Clone)]
pub struct TransferCommand {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Transfer amount must be positive")]
    InvalidAmount { amount: Decimal },
    #[error("Account id must not be empty")]
    EmptyAccountId,
    #[error("Initial balance must not be negative, got {balance}")]
    NegativeBalance { balance: Decimal },
    #[error("Cannot transfer from account {account_id} to itself")]
    SelfTransfer { account_id: AccountId },
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: CommandKind },
    #[error("Counterpart account is required for {kind:?}")]
    CounterpartRequired { kind: CommandKind },
}

impl CreateAccountCommand {
    pub fn parse(account_id: AccountId, balance: Decimal) -> Result<Self, CommandError> {
        if account_id.is_empty() {
            return Err(CommandError::EmptyAccountId);
        }
        if balance < Decimal::zero() {
            return Err(CommandError::NegativeBalance { balance });
        }
        Ok(Self {
            account_id,
            balance,
        })
    }
}

impl TransferCommand {
    /// Only the request shape is checked here. Account existence and balance can only be
    /// judged against the store, inside the transfer critical section.
    pub fn parse(from: AccountId, to: AccountId, amount: Decimal) -> Result<Self, CommandError> {
        if amount <= Decimal::zero() {
            return Err(CommandError::InvalidAmount { amount });
        }
        if from.is_empty() || to.is_empty() {
            return Err(CommandError::EmptyAccountId);
        }
        Ok(Self { from, to, amount })
    }

    pub fn is_self_transfer(&self) -> bool {
        self.from == self.to
    }
}
