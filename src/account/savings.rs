use std::fmt;
use std::fmt::Formatter;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use tracing::{debug, info};

use crate::account::{balance_overflow, ensure_positive, Account, AccountKind};
use crate::error::AccountError;
use crate::money::Money;

pub const DEFAULT_INTEREST_RATE: f32 = 0.9;

lazy_static! {
    pub static ref DEFAULT_MIN_BALANCE: Money = Money::from_units(15);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    number: String,
    holder: String,
    opened: NaiveDate,
    balance: Money,
    // stored only, interest is never credited
    interest_rate: f32,
    min_balance: Money,
}

impl SavingsAccount {
    pub fn open(number: impl Into<String>, holder: impl Into<String>, opened: NaiveDate) -> SavingsAccount {
        SavingsAccount {
            number: number.into(),
            holder: holder.into(),
            opened,
            balance: Money::default(),
            interest_rate: DEFAULT_INTEREST_RATE,
            min_balance: *DEFAULT_MIN_BALANCE,
        }
    }

    pub fn interest_rate(&self) -> f32 { self.interest_rate }
    pub fn min_balance(&self) -> Money { self.min_balance }
}

impl Account for SavingsAccount {
    fn kind(&self) -> AccountKind { AccountKind::Savings }
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
        info!(number = %self.number, %amount, "depositing into savings account");
        self.balance = balance;
        Ok(())
    }

    fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        ensure_positive(amount)?;
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| balance_overflow(&self.number, self.balance, amount))?;
        // min balance invariant
        if remaining < self.min_balance {
            return Err(AccountError::InsufficientFunds {
                kind: AccountKind::Savings,
                number: self.number.clone(),
                balance: self.balance,
                requested: amount,
            });
        }
        debug!(number = %self.number, %amount, "withdrawing from savings account");
        self.balance = remaining;
        Ok(())
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{number: {}, holder: {}, opened: {}, balance: {}, interest rate: {}, min balance: {}}}",
            self.number, self.holder, self.opened, self.balance, self.interest_rate, self.min_balance
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn alice() -> SavingsAccount {
        SavingsAccount::open("12345", "Alice", NaiveDate::from_ymd_opt(1999, 1, 3).unwrap())
    }

    fn funded(balance: Money) -> SavingsAccount {
        let mut account = SavingsAccount::open("12345", "Alice", NaiveDate::from_ymd_opt(1999, 1, 3).unwrap());
        account.balance = balance;
        account
    }

    // `ticks` are ten-thousandths of a unit
    fn from_ticks(ticks: i64) -> Money {
        Money::new(ticks / 10_000, (ticks % 10_000) as u32)
    }

    #[rstest]
    fn open_uses_default_policy(alice: SavingsAccount) {
        assert_eq!(alice.balance(), *crate::money::ZERO);
        assert_eq!(alice.interest_rate(), 0.9);
        assert_eq!(alice.min_balance(), Money::from_units(15));
        assert_eq!(alice.number(), "12345");
        assert_eq!(alice.holder(), "Alice");
    }

    #[rstest]
    fn deposit_then_withdraw(mut alice: SavingsAccount) {
        alice.deposit(Money::from_units(100)).unwrap();
        assert_eq!(alice.balance(), Money::from_units(100));
        alice.withdraw(Money::from_units(10)).unwrap();
        assert_eq!(alice.balance(), Money::from_units(90));
    }

    #[rstest]
    fn withdraw_down_to_min_balance(mut alice: SavingsAccount) {
        alice.deposit(Money::from_units(100)).unwrap();
        alice.withdraw(Money::from_units(85)).unwrap();
        assert_eq!(alice.balance(), Money::from_units(15));
    }

    #[test]
    fn withdraw_below_min_balance_fails() {
        let mut account = funded(Money::from_units(90));
        let error = account.withdraw(Money::from_units(76)).unwrap_err();
        assert_eq!(
            error,
            AccountError::InsufficientFunds {
                kind: AccountKind::Savings,
                number: "12345".to_string(),
                balance: Money::from_units(90),
                requested: Money::from_units(76),
            }
        );
        assert_eq!(account.balance(), Money::from_units(90));
    }

    #[rstest]
    #[case(Money::from_units(0))]
    #[case(Money::new(-10, 0))]
    fn non_positive_amounts_leave_balance(#[case] amount: Money) {
        let mut account = funded(Money::from_units(50));
        assert_eq!(account.deposit(amount), Err(AccountError::InvalidAmount(amount)));
        assert_eq!(account.withdraw(amount), Err(AccountError::InvalidAmount(amount)));
        assert_eq!(account.balance(), Money::from_units(50));
    }

    #[test]
    fn deposit_past_range_keeps_balance() {
        let start = Money::from_units(900_000_000_000_000);
        let mut account = funded(start);
        assert_eq!(
            account.deposit(start),
            Err(AccountError::BalanceOverflow {
                number: "12345".to_string(),
                balance: start,
                amount: start,
            })
        );
        assert_eq!(account.balance(), start);
    }

    #[rstest]
    fn display_lists_fields(alice: SavingsAccount) {
        assert_eq!(
            alice.to_string(),
            "{number: 12345, holder: Alice, opened: 1999-01-03, balance: 0, interest rate: 0.9, min balance: 15}"
        );
    }

    proptest! {
        #[test]
        fn withdraw_respects_min_balance(before in 0i64..1_000_000, amount in 1i64..1_000_000) {
            let mut account = funded(from_ticks(before));
            let before = account.balance();
            let amount = from_ticks(amount);

            match account.withdraw(amount) {
                Ok(()) => {
                    prop_assert_eq!(account.balance(), before - amount);
                    prop_assert!(account.balance() >= account.min_balance());
                }
                Err(error) => {
                    prop_assert!(before - amount < account.min_balance());
                    let is_insufficient = matches!(error, AccountError::InsufficientFunds { .. });
                    prop_assert!(is_insufficient);
                    prop_assert_eq!(account.balance(), before);
                }
            }
        }

        #[test]
        fn deposit_undoes_withdrawal(start in 15i64..100_000, amount in 1i64..100_000) {
            let mut account = funded(Money::from_units(start + amount));
            let before = account.balance();
            account.withdraw(Money::from_units(amount)).unwrap();
            account.deposit(Money::from_units(amount)).unwrap();
            prop_assert_eq!(account.balance(), before);
        }
    }
}
