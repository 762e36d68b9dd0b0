//! This module could be a separate crate on its own, to drive [`transfer_ledger`](crate) from a
//! command file, but it lives here so integration tests can use it too.

use std::io::{Read, Write};

use crate::{
    command::{CommandError, CommandKind},
    notifier::TracingNotifier,
    processor::{Ledger, LedgerError, accounts_service::AccountsService},
    store::{AccountStore, in_memory::InMemoryAccountStore},
};
use anyhow::{Context, Result};
use csv_parser::{CommandRow, CsvCommandParser};
use csv_printer::{AccountRow, print_accounts};
use thiserror::Error;

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Rejected(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvCommandParser::new(self.input);
        let ledger = AccountsService::new(InMemoryAccountStore::new(), TracingNotifier);

        for (line, row) in parser {
            let outcome = row
                .map_err(RowError::from)
                .and_then(|row| execute(&ledger, row).map_err(RowError::from));
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        let accounts = ledger
            .store()
            .accounts()
            .context("Failed to read final account states")?;
        print_accounts(self.output, accounts.iter().map(AccountRow::from))
    }
}

fn execute(ledger: &impl Ledger, row: CommandRow) -> Result<(), LedgerError> {
    let amount = row
        .amount
        .ok_or(CommandError::AmountRequired { kind: row.kind })?;
    match row.kind {
        CommandKind::Create => ledger.create_account(row.account, amount),
        CommandKind::Transfer => {
            let to = row
                .counterpart
                .ok_or(CommandError::CounterpartRequired { kind: row.kind })?;
            ledger.transfer(&row.account, &to, amount)
        }
    }
}
