use std::fmt;
use std::fmt::Formatter;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AccountError;
use crate::money::Money;

pub use checking::CheckingAccount;
pub use savings::SavingsAccount;

mod checking;
mod savings;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => f.write_str("savings"),
            AccountKind::Checking => f.write_str("checking"),
        }
    }
}

/// Point-in-time view of an account, as written to statements.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub kind: AccountKind,
    pub number: String,
    pub holder: String,
    pub opened: NaiveDate,
    pub balance: Money,
}

/// Common behaviour of every account variant.
///
/// Only `deposit` and `withdraw` change the balance; each variant decides
/// which withdrawals it accepts.
pub trait Account {
    fn kind(&self) -> AccountKind;
    fn number(&self) -> &str;
    fn holder(&self) -> &str;
    fn opened(&self) -> NaiveDate;
    fn balance(&self) -> Money;

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError>;
    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError>;

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: self.kind(),
            number: self.number().to_string(),
            holder: self.holder().to_string(),
            opened: self.opened(),
            balance: self.balance(),
        }
    }
}

fn balance_overflow(number: &str, balance: Money, amount: Money) -> AccountError {
    AccountError::BalanceOverflow {
        number: number.to_string(),
        balance,
        amount,
    }
}

// sanity check shared by every variant: zero and negative amounts never move money
fn ensure_positive(amount: Money) -> Result<(), AccountError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount(amount))
    }
}
