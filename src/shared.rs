use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::account::Account;
use crate::error::AccountError;
use crate::money::Money;
use crate::transfer::transfer;

/// Cloneable handle to an account used from several threads.
///
/// The account number is copied out at construction so lock ordering never
/// needs to take a lock.
#[derive(Debug)]
pub struct SharedAccount<A> {
    number: String,
    inner: Arc<Mutex<A>>,
}

impl<A> Clone for SharedAccount<A> {
    fn clone(&self) -> Self {
        SharedAccount {
            number: self.number.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Account> SharedAccount<A> {
    pub fn new(account: A) -> SharedAccount<A> {
        SharedAccount {
            number: account.number().to_string(),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn lock(&self) -> MutexGuard<'_, A> {
        self.inner.lock()
    }

    pub fn deposit(&self, amount: Money) -> Result<(), AccountError> {
        self.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: Money) -> Result<(), AccountError> {
        self.lock().withdraw(amount)
    }

    pub fn balance(&self) -> Money {
        self.lock().balance()
    }
}

/// [`transfer`] between shared accounts.
///
/// Locks are always taken in ascending account-number order, whichever side
/// is the source, so opposite transfers between the same pair cannot deadlock.
pub fn transfer_shared<S, D>(source: &SharedAccount<S>, destination: &SharedAccount<D>, amount: Money) -> Result<(), AccountError>
where
    S: Account,
    D: Account,
{
    if source.number == destination.number {
        return Err(AccountError::SameAccount(source.number.clone()));
    }

    if source.number < destination.number {
        let mut from = source.lock();
        let mut to = destination.lock();
        transfer(&mut *from, &mut *to, amount)
    } else {
        let mut to = destination.lock();
        let mut from = source.lock();
        transfer(&mut *from, &mut *to, amount)
    }
}
