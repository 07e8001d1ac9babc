//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Amount, Fraction, RentalDuration};
use domain_rental::{fixed_rate, flat_rate, AddOn, Rate, Room};

/// Strategy for unit rates between 0 and 10,000 with up to six decimal
/// places, so sub-cent rates are covered
pub fn unit_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|micros| Decimal::new(micros, 6))
}

/// Strategy for whole-unit durations
pub fn duration_strategy() -> impl Strategy<Value = RentalDuration> {
    (0u32..1_000u32).prop_map(RentalDuration::from_units)
}

/// Strategy for durations with up to two decimal places
pub fn fractional_duration_strategy() -> impl Strategy<Value = RentalDuration> {
    (0i64..100_000i64).prop_map(|hundredths| {
        RentalDuration::new(Decimal::new(hundredths, 2)).unwrap_or(RentalDuration::ZERO)
    })
}

/// Strategy for non-negative amounts
pub fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0i64..1_000_000_000i64).prop_map(Amount::from_minor)
}

/// Strategy for discount fractions (0.0000 to 1.0000)
pub fn fraction_strategy() -> impl Strategy<Value = Fraction> {
    (0u32..=10000u32).prop_map(|n| Fraction::new(Decimal::new(n as i64, 4)))
}

/// Strategy for either built-in rate kind
pub fn rate_strategy() -> impl Strategy<Value = Rate> {
    prop_oneof![
        unit_rate_strategy().prop_map(fixed_rate),
        unit_rate_strategy().prop_map(flat_rate),
    ]
}

/// Strategy for rentable names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

/// Strategy for add-ons with random names and rates
pub fn add_on_strategy() -> impl Strategy<Value = AddOn> {
    (name_strategy(), rate_strategy())
        .prop_map(|(name, rate)| AddOn::new(name.to_lowercase(), name, rate))
}

/// Strategy for rooms supporting up to three random add-ons
pub fn room_strategy() -> impl Strategy<Value = Room> {
    (
        name_strategy(),
        rate_strategy(),
        prop::collection::vec(add_on_strategy(), 0..3),
    )
        .prop_map(|(name, rate, add_ons)| {
            Room::new(name.to_lowercase(), name, rate).with_add_ons(add_ons)
        })
}
