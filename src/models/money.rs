//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that two-decimal values
//! round-trip exactly and monthly sums cannot drift the way naive floating
//! accumulation can.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
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

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a plain decimal amount, e.g. "10", "10.5", "-200.00".
    ///
    /// Fractional digits beyond two are truncated. Returns `None` for
    /// anything that is not a decimal number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if s.is_empty() {
            return None;
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        // "10." and ".5" are both valid decimals; "." alone is not
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let cents_part: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac[..2].parse().ok()?,
        };

        let cents = dollars.checked_mul(100)?.checked_add(cents_part)?;
        Some(Self(if negative { -cents } else { cents }))
    }

    /// Render with exactly two decimal digits and no currency symbol,
    /// e.g. "1000.00", "-200.50". This is the report format.
    pub fn format_plain(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_plain())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.01").unwrap().cents(), 1);
        assert_eq!(Money::parse(" 1000 ").unwrap().cents(), 100000);
    }

    #[test]
    fn test_parse_negative_and_edge_forms() {
        assert_eq!(Money::parse("-200.00").unwrap().cents(), -20000);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_truncates_extra_digits() {
        assert_eq!(Money::parse("10.509").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Money::parse("abc").is_none());
        assert!(Money::parse("").is_none());
        assert!(Money::parse(".").is_none());
        assert!(Money::parse("-").is_none());
        assert!(Money::parse("10.5.0").is_none());
        assert!(Money::parse("10,50").is_none());
        assert!(Money::parse("$10").is_none());
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(Money::from_cents(100000).format_plain(), "1000.00");
        assert_eq!(Money::from_cents(5).format_plain(), "0.05");
        assert_eq!(Money::from_cents(-20050).format_plain(), "-200.50");
        assert_eq!(Money::zero().format_plain(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(100000);
        let b = Money::from_cents(20000);
        assert_eq!((a + b).cents(), 120000);
        assert_eq!((a - b).cents(), 80000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 120000);
    }

    #[test]
    fn test_sum_is_exact_for_two_decimal_values() {
        // 0.10 summed ten times is exactly 1.00 in cents, where f64
        // accumulation would land at 0.9999999999999999
        let total: Money = std::iter::repeat(Money::parse("0.10").unwrap())
            .take(10)
            .sum();
        assert_eq!(total.cents(), 100);
        assert_eq!(total.format_plain(), "1.00");
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(0).is_positive());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
