use std::io;

use bank_accounts::config::Config;
use bank_accounts::statement::write_statement;
use bank_accounts::{transfer, Account, CheckingAccount, Money, SavingsAccount};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn run(config: &Config) -> Result<(), csv::Error> {
    let mut alice = SavingsAccount::open("12345", "Alice", date(1999, 1, 3));
    println!("Alice's account = {}", alice);
    match alice.deposit(Money::from_units(100)) {
        Ok(()) => println!("Alice's account (after deposit) = {}", alice),
        Err(err) => println!("{}", err),
    }
    match alice.withdraw(Money::from_units(10)) {
        Ok(()) => println!("Alice's account (after withdrawal) = {}", alice),
        Err(err) => println!("{}", err),
    }

    let mut bob = CheckingAccount::open("98765", "Bob", date(1997, 4, 3), config.overdraft);
    println!("\nBob's account = {}", bob);
    match bob.deposit(Money::from_units(100)) {
        Ok(()) => println!("Bob's account (after deposit) = {}", bob),
        Err(err) => println!("{}", err),
    }
    match bob.withdraw(Money::from_units(77)) {
        Ok(()) => println!("Bob's account (after withdrawal) = {}", bob),
        Err(err) => println!("{}", err),
    }

    println!("\nTransferring {} from Alice to Bob's account", config.transfer_amount);
    if let Err(err) = transfer(&mut alice, &mut bob, config.transfer_amount) {
        println!("{}", err);
    }
    println!("Alice's account = {}", alice);
    println!("Bob's account = {}", bob);

    if config.statement {
        println!();
        write_statement(io::stdout().lock(), [alice.snapshot(), bob.snapshot()])?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    // failures are reported, never turned into a non-zero exit
    if let Err(err) = run(&config) {
        eprintln!("could not write statement: {}", err);
    }
}
