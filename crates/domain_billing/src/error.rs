//! Billing domain errors

use domain_rental::RentalError;
use thiserror::Error;

/// Errors that can occur while building an invoice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// The rental selection failed approval
    #[error(transparent)]
    Rental(#[from] RentalError),

    /// An amount on the named line does not fit in a decimal
    #[error("Amount overflow while pricing '{line}'")]
    Overflow { line: String },
}

impl BillingError {
    pub fn overflow(line: impl Into<String>) -> Self {
        Self::Overflow { line: line.into() }
    }
}
