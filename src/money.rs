use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

use crate::error::MoneyError;
use crate::error::MoneyError::{Malformed, NoInput, Overflow, PrecisionTooHigh};

const SCALE: i64 = 10_000;

/// fixed point precision with 4 fraction digits, to act as monetary type
/// NB: the operators +- panic on overflow in debug builds; balances go through `checked_add`/`checked_sub`
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Money {
    amount_fx4: i64,
}

lazy_static! {
    pub static ref ZERO: Money = Money::from_units(0);
}

impl Money {
    /// `fraction` is in ten-thousandths (below 10000) and carries the sign of `whole`,
    /// so values between -1 and 0 have to be parsed instead.
    pub fn new(whole: i64, fraction: u32) -> Money {
        debug_assert!(fraction < 10_000, "fraction out of range: {}", fraction);
        if whole >= 0 {
            Money { amount_fx4: whole * SCALE + (fraction as i64) }
        } else {
            Money { amount_fx4: whole * SCALE - (fraction as i64) }
        }
    }

    pub fn from_units(units: i64) -> Money {
        Money::new(units, 0)
    }

    pub fn is_positive(&self) -> bool {
        self.amount_fx4 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.amount_fx4.checked_add(rhs.amount_fx4).map(|amount_fx4| Money { amount_fx4 })
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.amount_fx4.checked_sub(rhs.amount_fx4).map(|amount_fx4| Money { amount_fx4 })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money { amount_fx4: self.amount_fx4 + rhs.amount_fx4 }
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money { amount_fx4: self.amount_fx4 - rhs.amount_fx4 }
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money { amount_fx4: -self.amount_fx4 }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NoInput);
        }
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole_str, fraction_str) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if !is_digits(whole_str) {
            return Err(Malformed(s.to_string()));
        }
        // only digits left, so a parse failure means the value is too large
        let whole: i64 = whole_str.parse().map_err(|_| Overflow(s.to_string()))?;

        let fraction = match fraction_str {
            None => 0,
            Some(f) if !is_digits(f) => return Err(Malformed(s.to_string())),
            Some(f) if f.len() > 4 => return Err(PrecisionTooHigh(s.to_string())),
            Some(f) => {
                let parsed: i64 = f.parse().map_err(|_| Malformed(s.to_string()))?;
                parsed * 10_i64.pow(4 - f.len() as u32)
            }
        };

        let amount_fx4 = whole
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(|| Overflow(s.to_string()))?;
        Ok(Money { amount_fx4: if negative { -amount_fx4 } else { amount_fx4 } })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_fx4 < 0 { "-" } else { "" };
        let magnitude = self.amount_fx4.unsigned_abs();
        let whole = magnitude / SCALE as u64;
        let mut fraction = magnitude % SCALE as u64;

        if fraction == 0 {
            write!(f, "{}{}", sign, whole)
        } else {
            let mut width = 4;
            // get rid of 'ending zeroes'; this is a fraction after all
            while fraction % 10 == 0 {
                fraction /= 10;
                width -= 1;
            }
            write!(f, "{}{}.{:0width$}", sign, whole, fraction)
        }
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.collect_str(self)
    }
}
