//! Discounts
//!
//! A discount pairs an eligibility predicate over a rental selection with a
//! function from the pre-discount subtotal to the amount taken off. Both are
//! closures, typically capturing the parameters the discount kind was built
//! with.

use std::fmt;
use std::sync::Arc;

use core_kernel::{Amount, MoneyError, Params, Registrable};
use domain_rental::Invoiceable;

/// Eligibility predicate held by a [`Discount`]
pub type AppliesFn = Arc<dyn Fn(&Invoiceable) -> bool + Send + Sync>;

/// Discount amount function held by a [`Discount`]
pub type AmountFn = Arc<dyn Fn(Amount) -> Result<Amount, MoneyError> + Send + Sync>;

/// A named, parameterized discount rule
///
/// Like rates, discounts compare by name and params only.
#[derive(Clone)]
pub struct Discount {
    name: String,
    params: Params,
    applies_to: AppliesFn,
    amount_for: AmountFn,
}

impl Discount {
    pub fn new<P, A>(name: impl Into<String>, applies_to: P, amount_for: A) -> Self
    where
        P: Fn(&Invoiceable) -> bool + Send + Sync + 'static,
        A: Fn(Amount) -> Result<Amount, MoneyError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Params::new(),
            applies_to: Arc::new(applies_to),
            amount_for: Arc::new(amount_for),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns true if the discount is eligible for the selection
    pub fn applies_to(&self, invoiceable: &Invoiceable) -> bool {
        (self.applies_to)(invoiceable)
    }

    /// Amount taken off the given pre-discount subtotal
    pub fn amount_for(&self, subtotal: Amount) -> Result<Amount, MoneyError> {
        (self.amount_for)(subtotal)
    }
}

impl Registrable for Discount {
    const KIND: &'static str = "discount";

    fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

impl PartialEq for Discount {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl fmt::Debug for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discount")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
