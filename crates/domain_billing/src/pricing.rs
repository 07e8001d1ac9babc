//! Pricing engine
//!
//! Turns a rental selection into priced lines in a fixed order:
//!
//! 1. one [`InvoiceLine`] per room, then per add-on
//! 2. subtotal of the lines
//! 3. one [`DiscountLine`] per eligible discount
//! 4. total = subtotal less discounts
//!
//! Discounts never compound: each is evaluated against the same
//! pre-discount subtotal, so their order only affects the order of the
//! resulting lines.

use core_kernel::Amount;
use domain_rental::{Invoiceable, Rentable};

use crate::discount::Discount;
use crate::error::BillingError;
use crate::invoice::{DiscountLine, InvoiceLine};

/// Stateless pricing of rental selections
///
/// Every step is checked: an amount that leaves the decimal range is
/// reported as [`BillingError::Overflow`] naming the line that caused it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Prices every selected rentable, rooms first, for the selection's
    /// duration
    pub fn line_items(&self, invoiceable: &Invoiceable) -> Result<Vec<InvoiceLine>, BillingError> {
        let duration = invoiceable.duration();

        invoiceable
            .rentables()
            .map(|rentable| {
                let subtotal = rentable
                    .subtotal(duration)
                    .map_err(|_| BillingError::overflow(rentable.name()))?;
                Ok(InvoiceLine {
                    name: rentable.name().to_string(),
                    rate_description: rentable.rate().name().to_string(),
                    quantity: duration.units(),
                    subtotal,
                })
            })
            .collect()
    }

    pub fn subtotal(&self, lines: &[InvoiceLine]) -> Result<Amount, BillingError> {
        lines.iter().try_fold(Amount::ZERO, |sum, line| {
            sum.checked_add(&line.subtotal)
                .map_err(|_| BillingError::overflow(&line.name))
        })
    }

    /// Evaluates each eligible discount against `subtotal`, preserving the
    /// order of `discounts`
    pub fn discount_lines(
        &self,
        invoiceable: &Invoiceable,
        subtotal: Amount,
        discounts: &[Discount],
    ) -> Result<Vec<DiscountLine>, BillingError> {
        discounts
            .iter()
            .filter(|discount| discount.applies_to(invoiceable))
            .map(|discount| {
                let amount = discount
                    .amount_for(subtotal)
                    .map_err(|_| BillingError::overflow(discount.name()))?;
                Ok(DiscountLine {
                    name: discount.name().to_string(),
                    amount,
                })
            })
            .collect()
    }

    /// Subtracts every discount from the subtotal; the result is not floored
    pub fn total(
        &self,
        subtotal: Amount,
        discount_lines: &[DiscountLine],
    ) -> Result<Amount, BillingError> {
        discount_lines.iter().try_fold(subtotal, |total, line| {
            total
                .checked_sub(&line.amount)
                .map_err(|_| BillingError::overflow(&line.name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::RentalDuration;
    use domain_rental::{fixed_rate, flat_rate, AddOn, Room};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flat_rate_line_still_records_duration() {
        let wifi = AddOn::new("wifi", "WiFi", flat_rate(dec!(20)));
        let suite = Room::new("suite", "Suite", fixed_rate(dec!(100))).with_add_on(wifi.clone());
        let selection = Invoiceable::new(vec![suite], vec![wifi], RentalDuration::from_units(2));

        let lines = PricingEngine::new().line_items(&selection).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].name, "WiFi");
        assert_eq!(lines[1].rate_description, "Flat Rate");
        assert_eq!(lines[1].quantity, dec!(2));
        assert_eq!(lines[1].subtotal.value(), dec!(20));
    }

    #[test]
    fn test_empty_subtotal_is_zero() {
        assert!(PricingEngine::new().subtotal(&[]).unwrap().is_zero());
    }

    #[test]
    fn test_total_may_be_negative() {
        let lines = vec![DiscountLine {
            name: "Oversized".to_string(),
            amount: Amount::new(dec!(150)),
        }];
        let total = PricingEngine::new().total(Amount::new(dec!(100)), &lines).unwrap();
        assert_eq!(total.value(), dec!(-50));
    }

    #[test]
    fn test_overflowing_room_is_named() {
        let hall = Room::new("hall", "Hall", fixed_rate(dec!(10000000000000000000)));
        let duration = RentalDuration::new(dec!(10000000000)).unwrap();
        let selection = Invoiceable::new(vec![hall], vec![], duration);

        let err = PricingEngine::new().line_items(&selection).unwrap_err();
        assert_eq!(err, BillingError::overflow("Hall"));
    }

    #[test]
    fn test_overflowing_subtotal_names_line() {
        let line = |name: &str| InvoiceLine {
            name: name.to_string(),
            rate_description: "Flat Rate".to_string(),
            quantity: dec!(1),
            subtotal: Amount::new(Decimal::MAX),
        };

        let err = PricingEngine::new()
            .subtotal(&[line("Hall"), line("Annex")])
            .unwrap_err();
        assert_eq!(err, BillingError::overflow("Annex"));
    }

    #[test]
    fn test_overflowing_total_names_discount() {
        let lines = vec![DiscountLine {
            name: "Surcharge".to_string(),
            amount: Amount::new(Decimal::MAX),
        }];

        let err = PricingEngine::new()
            .total(Amount::new(Decimal::MIN), &lines)
            .unwrap_err();
        assert_eq!(err, BillingError::overflow("Surcharge"));
    }
}
