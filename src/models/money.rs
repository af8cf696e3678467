//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64). The data file carries exactly two
//! decimal places, so cents hold every amount the tracker can persist and
//! totals add up without floating-point drift.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use tracing::warn;

use super::lenient;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

/// `i64::MAX + 1` as a float; any rounded cent count at or above it is out of range
const CENTS_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Money {
    /// Largest representable amount
    pub const MAX: Money = Money(i64::MAX);

    /// Smallest representable amount
    pub const MIN: Money = Money(i64::MIN);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1250);
    /// assert_eq!(amount.to_string(), "12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Round a floating-point amount to the nearest cent
    ///
    /// Exact halves round to even, matching `printf("%.2f")`. Amounts outside
    /// the cent range are clamped to [`Money::MIN`]/[`Money::MAX`] and NaN is
    /// zero; both are logged.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            warn!("amount is not a number, using 0.00");
            return Self::zero();
        }

        let cents = (value * 100.0).round_ties_even();
        if cents >= CENTS_UPPER_BOUND {
            warn!(amount = value, "amount too large, clamping");
            Self::MAX
        } else if cents < -CENTS_UPPER_BOUND {
            warn!(amount = value, "amount too small, clamping");
            Self::MIN
        } else {
            Self(cents as i64)
        }
    }

    /// Parse an amount the permissive way
    ///
    /// The longest numeric prefix is used and anything unparsable is zero,
    /// so `"12.5 lunch"` is 12.50 and `"lunch"` is 0.00.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::parse_lenient("-3.256"), Money::from_cents(-326));
    /// assert_eq!(Money::parse_lenient("n/a"), Money::zero());
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_f64(lenient::parse_f64(s))
    }
}

impl fmt::Display for Money {
    /// Two decimal places, no currency symbol; honours width and alignment
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        f.pad(&format!("{}{}.{:02}", sign, abs / 100, abs % 100))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
