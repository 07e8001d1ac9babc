//! Error types for the rental domain

use thiserror::Error;

/// Errors raised while approving a rental selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    #[error("Add-On '{add_on}' is not supported for current room selection")]
    UnsupportedAddOn { add_on: String },
}

impl RentalError {
    pub fn unsupported_add_on(add_on: impl Into<String>) -> Self {
        Self::UnsupportedAddOn {
            add_on: add_on.into(),
        }
    }
}
