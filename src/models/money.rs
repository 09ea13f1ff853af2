//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The SQLite column holds currency units as REAL, so conversion to
//! and from `f64` rounds to the nearest cent at the storage boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// let amount = Money::from_cents(1250); // $12.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from currency units as stored in SQLite
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// assert_eq!(Money::from_units(20.5).cents(), 2050);
    /// ```
    pub fn from_units(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in currency units (for the REAL column)
    pub fn units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "12.50", "-12.50", "$12.50", "-$12.50", "12", "12.5" and ".75".
    /// Extra decimal places round half away from zero to the nearest cent.
    /// A negative amount smaller than a cent parses as -0.01, never as zero.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let digits = rest.strip_prefix('$').unwrap_or(rest);
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = format!("{:0<2}", &frac[..frac.len().min(2)])
            .parse()
            .map_err(|_| invalid())?;
        let round_up = frac.as_bytes().get(2).is_some_and(|d| *d >= b'5');

        let mut magnitude = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents + i64::from(round_up)))
            .ok_or_else(invalid)?;

        // A negative input must stay negative after rounding
        if sign < 0 && magnitude == 0 && frac.bytes().any(|b| b != b'0') {
            magnitude = 1;
        }

        Ok(Self(sign * magnitude))
    }

    /// Format with a currency symbol; the sign goes before the symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }

    /// Format as a plain decimal with two places ("12.50"), used by CSV export
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert!(!m.is_negative());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_units_conversion() {
        assert_eq!(Money::from_units(3.5).cents(), 350);
        assert_eq!(Money::from_units(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_cents(2050).units(), 20.5);
        assert_eq!(Money::from_units(-5.0).cents(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1250)), "$12.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1250).format_with_symbol("€"), "€12.50");
        assert_eq!(Money::from_cents(1250).format_plain(), "12.50");
        assert_eq!(Money::from_cents(-7).format_plain(), "-0.07");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
        assert_eq!(Money::parse("-$3.50").unwrap().cents(), -350);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_rounds_extra_decimals() {
        assert_eq!(Money::parse("1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("1.995").unwrap().cents(), 200);
        assert_eq!(Money::parse("-1.995").unwrap().cents(), -200);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
        assert_eq!(Money::parse("2.0049").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_keeps_sub_cent_negatives_negative() {
        assert!(Money::parse("-0.001").unwrap().is_negative());
        assert!(Money::parse("-$0.0001").unwrap().is_negative());
        assert!(!Money::parse("-0.000").unwrap().is_negative());
        assert!(Money::parse("0.001").unwrap().is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("5.x").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(1000),
            Money::from_cents(2050),
            Money::from_cents(0),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 3050);
        assert_eq!((Money::from_cents(350) + Money::from_cents(200)).cents(), 550);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
