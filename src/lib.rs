pub mod account;
pub mod config;
pub mod error;
pub mod money;
pub mod shared;
pub mod statement;
pub mod transfer;

pub use account::{Account, AccountKind, AccountSnapshot, CheckingAccount, SavingsAccount};
pub use error::{AccountError, MoneyError};
pub use money::Money;
pub use shared::{transfer_shared, SharedAccount};
pub use transfer::transfer;
