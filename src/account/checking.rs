use std::fmt;
use std::fmt::Formatter;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::account::{balance_overflow, ensure_positive, Account, AccountKind};
use crate::error::AccountError;
use crate::money::Money;

pub const DEFAULT_TRANSACTION_FEE: f32 = 0.15;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckingAccount {
    number: String,
    holder: String,
    opened: NaiveDate,
    balance: Money,
    // stored only, no fee is ever charged
    transaction_fee: f32,
    overdraft_enabled: bool,
}

impl CheckingAccount {
    pub fn open(
        number: impl Into<String>,
        holder: impl Into<String>,
        opened: NaiveDate,
        overdraft_enabled: bool,
    ) -> CheckingAccount {
        CheckingAccount {
            number: number.into(),
            holder: holder.into(),
            opened,
            balance: Money::default(),
            transaction_fee: DEFAULT_TRANSACTION_FEE,
            overdraft_enabled,
        }
    }

    pub fn transaction_fee(&self) -> f32 { self.transaction_fee }
    pub fn overdraft_enabled(&self) -> bool { self.overdraft_enabled }
}

impl Account for CheckingAccount {
    fn kind(&self) -> AccountKind { AccountKind::Checking }
    fn number(&self) -> &str { &self.number }
    fn holder(&self) -> &str { &self.holder }
    fn opened(&self) -> NaiveDate { self.opened }
    fn balance(&self) -> Money { self.balance }

    fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        ensure_positive(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| balance_overflow(&self.number, self.balance, amount))?;
        info!(number = %self.number, %amount, "depositing into checking account");
        self.balance = balance;
        Ok(())
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        ensure_positive(amount)?;
        // overdraft invariant
        if self.balance < amount && !self.overdraft_enabled {
            return Err(AccountError::InsufficientFunds {
                kind: AccountKind::Checking,
                number: self.number.clone(),
                balance: self.balance,
                requested: amount,
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| balance_overflow(&self.number, self.balance, amount))?;
        debug!(number = %self.number, %amount, overdraft = self.overdraft_enabled, "withdrawing from checking account");
        self.balance = balance;
        Ok(())
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{number: {}, holder: {}, opened: {}, balance: {}, transaction fee: {}, overdraft: {}}}",
            self.number, self.holder, self.opened, self.balance, self.transaction_fee, self.overdraft_enabled
        )
    }
}
