//! Fixed-point money representation.
//!
//! The reference implementation this service is modeled on stores `amount`
//! as a single-precision float, which is the wrong representation for real
//! money. `Cents` replaces it with signed 64-bit integer cents so arithmetic
//! is exact and comparisons are reliable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount in integer cents. May be negative (account balances
/// are signed); asset and history amounts are always non-negative in
/// practice but the type does not enforce that on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    #[inline]
    pub fn checked_add(self, other: Cents) -> Option<Cents> {
        self.0.checked_add(other.0).map(Cents)
    }

    #[inline]
    pub fn checked_sub(self, other: Cents) -> Option<Cents> {
        self.0.checked_sub(other.0).map(Cents)
    }
}

impl From<i64> for Cents {
    fn from(v: i64) -> Self {
        Cents(v)
    }
}

impl From<Cents> for i64 {
    fn from(v: Cents) -> Self {
        v.0
    }
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_are_exact() {
        let a = Cents(100);
        let b = Cents(30);
        assert_eq!(a + b, Cents(130));
        assert_eq!(a - b, Cents(70));
    }

    #[test]
    fn checked_sub_detects_overflow() {
        assert_eq!(Cents(i64::MIN).checked_sub(Cents(1)), None);
    }
}
