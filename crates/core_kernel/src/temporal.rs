//! Rental duration handling
//!
//! A rental is priced over a duration expressed in abstract time units
//! (nights, hours, ...). The unit is a property of the rates in use; this
//! module only guarantees that a duration is never negative.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors related to temporal values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid duration: {0} is negative")]
    NegativeDuration(Decimal),
}

/// Length of a rental, in rate units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RentalDuration(Decimal);

impl RentalDuration {
    /// Zero-length rental
    pub const ZERO: RentalDuration = RentalDuration(Decimal::ZERO);

    /// Creates a duration, rejecting negative values
    pub fn new(units: Decimal) -> Result<Self, TemporalError> {
        if units.is_sign_negative() && !units.is_zero() {
            return Err(TemporalError::NegativeDuration(units));
        }
        Ok(Self(units))
    }

    /// Creates a duration from a whole number of units
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the number of units
    pub fn units(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for RentalDuration {
    type Error = TemporalError;

    fn try_from(units: Decimal) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl<'de> Deserialize<'de> for RentalDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = <Decimal as Deserialize>::deserialize(deserializer)?;
        RentalDuration::new(units).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RentalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
