use clap::Parser;

use crate::money::Money;

/// Runs the savings/checking walkthrough and prints every step.
#[derive(Debug, Clone, Parser)]
#[command(name = "bank-accounts", version)]
pub struct Config {
    /// Allow the checking account to go below zero.
    #[arg(long, env = "BANK_OVERDRAFT")]
    pub overdraft: bool,

    /// Amount moved from the savings account to the checking account.
    #[arg(long, env = "BANK_TRANSFER_AMOUNT", default_value = "76")]
    pub transfer_amount: Money,

    /// Print a CSV statement of both accounts at the end.
    #[arg(long, env = "BANK_STATEMENT")]
    pub statement: bool,
}
