use thiserror::Error;

use crate::account::AccountKind;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("no amount given")]
    NoInput,
    #[error("malformed amount: {0}")]
    Malformed(String),
    #[error("amount has more than 4 fraction digits: {0}")]
    PrecisionTooHigh(String),
    #[error("amount out of range: {0}")]
    Overflow(String),
}

/// Errors returned by account operations and transfers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("not enough money to withdraw {requested} from {kind} account {number} (balance {balance})")]
    InsufficientFunds {
        kind: AccountKind,
        number: String,
        balance: Money,
        requested: Money,
    },
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("moving {amount} would take the balance of account {number} ({balance}) out of range")]
    BalanceOverflow {
        number: String,
        balance: Money,
        amount: Money,
    },
    #[error("cannot transfer from account {0} to itself")]
    SameAccount(String),
    /// The destination refused the deposit and the source could not be re-credited.
    #[error("could not return {amount} to account {number} after a failed transfer")]
    ReversalFailed { number: String, amount: Money },
}
