//! Rates
//!
//! A rate is a named pricing function from a rental duration to an amount.
//! Rates are value objects: the function is held as a first-class closure
//! over whatever parameters the rate kind was built with. Pricing is exact;
//! a result outside the decimal range is a [`MoneyError`], never a panic.

use std::fmt;
use std::sync::Arc;

use core_kernel::{Amount, MoneyError, Params, Registrable, RentalDuration};

/// Pricing function held by a [`Rate`]
pub type RateFn = Arc<dyn Fn(RentalDuration) -> Result<Amount, MoneyError> + Send + Sync>;

/// A named, parameterized pricing function over a duration
///
/// Rates are immutable once built. Two rates compare equal when their
/// names and params match; the functions themselves are not compared.
#[derive(Clone)]
pub struct Rate {
    name: String,
    params: Params,
    compute: RateFn,
}

impl Rate {
    /// Creates a rate with no recorded params
    ///
    /// Rates built through a registry are decorated with the params they
    /// were built from.
    pub fn new<F>(name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(RentalDuration) -> Result<Amount, MoneyError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Params::new(),
            compute: Arc::new(compute),
        }
    }

    /// Returns the rate kind name (e.g. "Fixed Rate")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the params this rate was built from
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Prices a rental of the given duration
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` if the price does not fit in a decimal.
    pub fn compute(&self, duration: RentalDuration) -> Result<Amount, MoneyError> {
        (self.compute)(duration)
    }
}

impl Registrable for Rate {
    const KIND: &'static str = "rate";

    fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

impl PartialEq for Rate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl fmt::Debug for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rate")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            let rendered: Vec<String> = self
                .params
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            write!(f, " ({})", rendered.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compute_invokes_function() {
        let rate = Rate::new("Double", |d: RentalDuration| Amount::new(d.units()).checked_mul(dec!(2)));
        assert_eq!(rate.compute(RentalDuration::from_units(4)).unwrap().value(), dec!(8));
    }

    #[test]
    fn test_equality_ignores_function() {
        let a = Rate::new("Flat Rate", |_| Ok(Amount::new(dec!(10))));
        let b = Rate::new("Flat Rate", |_| Ok(Amount::new(dec!(99))));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_includes_params() {
        let rate = Rate::new("Flat Rate", |_| Ok(Amount::zero()))
            .with_params(Params::new().with("Rate", 20));
        assert_eq!(rate.to_string(), "Flat Rate (Rate=20)");
    }
}
