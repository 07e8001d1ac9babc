//! Monetary amounts with precise decimal arithmetic
//!
//! This module provides a type-safe representation of invoice amounts
//! using rust_decimal for precise calculations without floating-point errors.
//! Amounts carry no currency: rendering and locale concerns live outside
//! the pricing core.
//!
//! Arithmetic that can leave the decimal range is checked and reports
//! [`MoneyError::Overflow`] instead of panicking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use thiserror::Error;

/// Errors that can occur during amount arithmetic
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Amounts keep the full precision of their inputs; rounding is left to
/// presentation (see [`Amount::round_to_cents`]). They may be negative: a
/// discount larger than the subtotal yields a negative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from integer minor units (hundredths)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Amount) -> Result<Amount, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked multiplication by a scalar (e.g., a unit rate by a duration)
    pub fn checked_mul(&self, factor: Decimal) -> Result<Amount, MoneyError> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Sums amounts, failing on overflow; an empty sequence sums to zero
    pub fn checked_sum<'a, I>(amounts: I) -> Result<Amount, MoneyError>
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |total, amount| total.checked_add(amount))
    }

    /// Rounds to two decimal places using banker's rounding
    pub fn round_to_cents(&self) -> Self {
        Self(self.0.round_dp_with_strategy(
            2,
            rust_decimal::RoundingStrategy::MidpointNearestEven,
        ))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// A ratio applied to an amount (e.g., 0.1 for a 10% discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fraction {
    value: Decimal,
}

impl Fraction {
    /// Creates a fraction from a decimal value (e.g., 0.1 for 10%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a fraction from a percentage (e.g., 10 for 10%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the fraction as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the fraction as a percentage
    pub fn as_percentage(&self) -> Result<Decimal, MoneyError> {
        self.value.checked_mul(dec!(100)).ok_or(MoneyError::Overflow)
    }

    /// Applies this fraction to an amount
    pub fn apply(&self, amount: Amount) -> Result<Amount, MoneyError> {
        amount.checked_mul(self.value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_percentage() {
            Ok(percentage) => write!(f, "{}%", percentage.round_dp(4).normalize()),
            Err(_) => write!(f, "{}", self.value.normalize()),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn amount_sum_matches_decimal_sum(values in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..20)) {
            let amounts: Vec<Amount> = values.iter().map(|v| Amount::from_minor(*v)).collect();
            let total = Amount::checked_sum(&amounts).unwrap();
            let expected: Decimal = values.iter().map(|v| Decimal::new(*v, 2)).sum();
            prop_assert_eq!(total.value(), expected);
        }

        #[test]
        fn checked_mul_keeps_full_precision(
            rate in 0i64..1_000_000_000i64,
            units in 0i64..1_000_000i64
        ) {
            let unit_rate = Decimal::new(rate, 8);
            let factor = Decimal::new(units, 3);
            let product = Amount::new(unit_rate).checked_mul(factor).unwrap();
            prop_assert_eq!(product.value(), unit_rate * factor);
        }
    }
}
