use rust_decimal::Decimal;
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Debited,
    Credited,
}

/// Balance change for a single account. Produced by [`Account::handle_debit`] and
/// [`Account::handle_credit`], applied by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEvent {
    pub account_id: AccountId,
    pub amount: Decimal,
    pub kind: AccountEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient balance in account: {account_id}")]
    InsufficientBalance { account_id: AccountId },
    #[error("Balance of account {account_id} would overflow")]
    BalanceOverflow { account_id: AccountId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance after `event`, without modifying the account. Debits never take the balance
    /// below zero and credits never overflow.
    pub fn balance_after(&self, event: &AccountEvent) -> Result<Decimal, AccountError> {
        match event.kind {
            AccountEventKind::Debited => self
                .balance
                .checked_sub(event.amount)
                .filter(|balance| *balance >= Decimal::ZERO)
                .ok_or_else(|| AccountError::InsufficientBalance {
                    account_id: self.id.clone(),
                }),
            AccountEventKind::Credited => self.balance.checked_add(event.amount).ok_or_else(|| {
                AccountError::BalanceOverflow {
                    account_id: self.id.clone(),
                }
            }),
        }
    }

    /// Applies `event`, leaving the account untouched when it is rejected.
    pub fn apply(&mut self, event: &AccountEvent) -> Result<(), AccountError> {
        self.balance = self.balance_after(event)?;
        Ok(())
    }

    pub fn handle_debit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        let event = AccountEvent {
            account_id: self.id.clone(),
            amount,
            kind: AccountEventKind::Debited,
        };
        self.balance_after(&event)?;
        Ok(event)
    }

    pub fn handle_credit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        let event = AccountEvent {
            account_id: self.id.clone(),
            amount,
            kind: AccountEventKind::Credited,
        };
        self.balance_after(&event)?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn apply_events() {
        let mut acc = Account::new("Id-1", dec!(10));
        acc.apply(&AccountEvent {
            account_id: "Id-1".to_string(),
            amount: dec!(3),
            kind: AccountEventKind::Debited,
        })
        .unwrap();
        assert_eq!(acc.balance(), dec!(7));
        acc.apply(&AccountEvent {
            account_id: "Id-1".to_string(),
            amount: dec!(0.5),
            kind: AccountEventKind::Credited,
        })
        .unwrap();
        assert_eq!(acc.balance(), dec!(7.5));

        // events are still checked when applied directly
        let err = acc
            .apply(&AccountEvent {
                account_id: "Id-1".to_string(),
                amount: dec!(8),
                kind: AccountEventKind::Debited,
            })
            .unwrap_err();
        assert!(matches!(err, AccountError::InsufficientBalance { .. }));
        assert_eq!(acc.balance(), dec!(7.5));
    }

    #[test]
    fn handle_debit() {
        let acc = Account::new("Id-1", dec!(100));

        let evt = acc.handle_debit(dec!(100)).unwrap();
        assert_eq!(evt.amount, dec!(100));
        assert_eq!(evt.kind, AccountEventKind::Debited);
        assert_eq!(evt.account_id, "Id-1");

        let err = acc.handle_debit(dec!(100.01)).unwrap_err();
        assert!(matches!(
            &err,
            AccountError::InsufficientBalance { account_id } if account_id == "Id-1"
        ));
        assert_eq!(err.to_string(), "Insufficient balance in account: Id-1");
    }

    #[test]
    fn handle_credit() {
        let mut acc = Account::new("Id-2", dec!(0));
        let evt = acc.handle_credit(dec!(42)).unwrap();
        assert_eq!(evt.kind, AccountEventKind::Credited);
        // handling a command never mutates, only applying does
        assert_eq!(acc.balance(), dec!(0));
        acc.apply(&evt).unwrap();
        assert_eq!(acc.balance(), dec!(42));
    }

    #[test]
    fn credit_past_max_is_rejected() {
        let mut acc = Account::new("Id-2", Decimal::MAX);

        let err = acc.handle_credit(dec!(1)).unwrap_err();
        assert!(matches!(
            &err,
            AccountError::BalanceOverflow { account_id } if account_id == "Id-2"
        ));
        assert_eq!(err.to_string(), "Balance of account Id-2 would overflow");

        let err = acc
            .apply(&AccountEvent {
                account_id: "Id-2".to_string(),
                amount: dec!(1),
                kind: AccountEventKind::Credited,
            })
            .unwrap_err();
        assert!(matches!(err, AccountError::BalanceOverflow { .. }));
        assert_eq!(acc.balance(), Decimal::MAX);
    }
}
