//! Built-in discount kinds
//!
//! # Room Bundle Discount
//!
//! Takes a fraction of the subtotal off when every room named in
//! `room bundle names` is part of the selection. Extra rooms do not prevent
//! the discount; a missing bundle room does.
//!
//! ```rust,ignore
//! let mut discounts = DiscountRegistry::new();
//! register_default_discounts(&mut discounts);
//!
//! let bundle = discounts.build(
//!     ROOM_BUNDLE_DISCOUNT,
//!     &Params::new()
//!         .with(BUNDLE_NAMES_PARAM, json!(["Suite", "Lounge"]))
//!         .with(BUNDLE_RATE_PARAM, 0.1),
//! )?;
//! ```

use std::collections::BTreeSet;

use core_kernel::{Fraction, ParamSchema, ParamSpec, ParamType, Params, Registry};

use crate::discount::Discount;

/// Registry of discount kinds
pub type DiscountRegistry = Registry<Discount>;

pub const ROOM_BUNDLE_DISCOUNT: &str = "Room Bundle Discount";
pub const BUNDLE_NAMES_PARAM: &str = "room bundle names";
pub const BUNDLE_RATE_PARAM: &str = "rate";

/// Registers `Room Bundle Discount`
pub fn register_default_discounts(registry: &mut DiscountRegistry) {
    registry.register(
        ROOM_BUNDLE_DISCOUNT,
        ParamSchema::new(vec![
            ParamSpec::new(BUNDLE_NAMES_PARAM, ParamType::list_of(ParamType::Str))
                .with_description("Names of the rooms in the bundle"),
            ParamSpec::new(BUNDLE_RATE_PARAM, ParamType::Float)
                .with_description("Discount factor (%)"),
        ]),
        |params: &Params| {
            let names = params.string_list(BUNDLE_NAMES_PARAM)?;
            let fraction = Fraction::new(params.decimal(BUNDLE_RATE_PARAM)?);
            Ok(room_bundle_discount(names, fraction))
        },
    );
}

/// Creates a default registry with the built-in discounts
pub fn default_discount_registry() -> DiscountRegistry {
    let mut registry = DiscountRegistry::new();
    register_default_discounts(&mut registry);
    registry
}

/// A discount of `fraction` of the subtotal, eligible when every bundle
/// room is selected
pub fn room_bundle_discount(
    bundle: impl IntoIterator<Item = impl Into<String>>,
    fraction: Fraction,
) -> Discount {
    let bundle: BTreeSet<String> = bundle.into_iter().map(Into::into).collect();

    Discount::new(
        ROOM_BUNDLE_DISCOUNT,
        move |invoiceable| {
            let selected = invoiceable.room_names();
            bundle.iter().all(|name| selected.contains(name.as_str()))
        },
        move |subtotal| fraction.apply(subtotal),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Amount, RegistryError, RentalDuration};
    use domain_rental::{flat_rate, Invoiceable, Room};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn rooms(names: &[&str]) -> Invoiceable {
        let rooms = names
            .iter()
            .map(|name| Room::new(*name, *name, flat_rate(dec!(100))))
            .collect();
        Invoiceable::new(rooms, vec![], RentalDuration::from_units(1))
    }

    #[test]
    fn test_bundle_requires_every_room() {
        let discount = room_bundle_discount(["Suite", "Lounge"], Fraction::new(dec!(0.1)));

        assert!(!discount.applies_to(&rooms(&["Suite"])));
        assert!(discount.applies_to(&rooms(&["Suite", "Lounge"])));
        assert!(discount.applies_to(&rooms(&["Lounge", "Garden", "Suite"])));
    }

    #[test]
    fn test_empty_bundle_always_applies() {
        let discount = room_bundle_discount(Vec::<String>::new(), Fraction::new(dec!(0.05)));
        assert!(discount.applies_to(&rooms(&[])));
    }

    #[test]
    fn test_amount_is_fraction_of_subtotal() {
        let discount = room_bundle_discount(["Suite"], Fraction::new(dec!(0.1)));
        assert_eq!(discount.amount_for(Amount::new(dec!(500))).unwrap().value(), dec!(50));
    }

    #[test]
    fn test_sub_cent_discount_is_kept() {
        let discount = room_bundle_discount(["Suite"], Fraction::new(dec!(0.125)));
        assert_eq!(discount.amount_for(Amount::new(dec!(0.1))).unwrap().value(), dec!(0.0125));
    }

    #[test]
    fn test_registry_builds_bundle_discount() {
        let registry = default_discount_registry();
        let params = Params::new()
            .with(BUNDLE_NAMES_PARAM, json!(["Suite", "Lounge"]))
            .with(BUNDLE_RATE_PARAM, 0.1);

        let discount = registry.build(ROOM_BUNDLE_DISCOUNT, &params).unwrap();

        assert_eq!(discount.name(), ROOM_BUNDLE_DISCOUNT);
        assert_eq!(discount.params(), &params);
        assert!(discount.applies_to(&rooms(&["Suite", "Lounge"])));
    }

    #[test]
    fn test_bundle_names_must_be_strings() {
        let registry = default_discount_registry();
        let params = Params::new()
            .with(BUNDLE_NAMES_PARAM, json!([1, 2]))
            .with(BUNDLE_RATE_PARAM, 0.1);

        let err = registry.build(ROOM_BUNDLE_DISCOUNT, &params).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDefinition { kind: "discount", .. }));
    }
}
