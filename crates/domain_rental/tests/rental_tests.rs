//! Integration tests for rates, rentables, and selection approval

use core_kernel::{Amount, MoneyError, Params, RegistryError, RentalDuration};
use domain_rental::{
    fixed_rate, flat_rate, AddOn, Rate, RateRegistry, Rentable, RentalError, FIXED_RATE,
    FLAT_RATE, UNIT_RATE_PARAM,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    add_on_strategy, fractional_duration_strategy, rate_strategy, room_strategy,
    unit_rate_strategy, RegistryFixtures, RentableFixtures, TestInvoiceableBuilder,
    TestRoomBuilder,
};

fn suite_with(add_ons: Vec<AddOn>, units: u32) -> TestInvoiceableBuilder {
    add_ons
        .into_iter()
        .fold(TestInvoiceableBuilder::new(), TestInvoiceableBuilder::with_add_on)
        .with_room(RentableFixtures::suite())
        .with_units(units)
}

mod registry {
    use super::*;

    #[test]
    fn test_unknown_rate_type() {
        let registry = RegistryFixtures::rates();
        let err = registry
            .build("Hourly Rate", &Params::new().with(UNIT_RATE_PARAM, 10))
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::UnknownType { kind: "rate", ref type_name } if type_name == "Hourly Rate"
        ));
    }

    #[test]
    fn test_wrong_param_type_is_invalid_definition() {
        let registry = RegistryFixtures::rates();
        let err = registry
            .build(FIXED_RATE, &Params::new().with(UNIT_RATE_PARAM, "lots"))
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidDefinition { kind: "rate", .. }));
    }

    #[test]
    fn test_custom_rate_kind_can_be_registered() {
        use core_kernel::{ParamSchema, ParamSpec, ParamType};

        let mut registry = RateRegistry::new();
        registry.register(
            "Tiered Rate",
            ParamSchema::new(vec![
                ParamSpec::new("first", ParamType::Float),
                ParamSpec::new("after", ParamType::Float),
            ]),
            |params: &Params| {
                let first = params.decimal("first")?;
                let after = params.decimal("after")?;
                Ok(Rate::new("Tiered Rate", move |d: RentalDuration| {
                    let units = d.units();
                    if units <= Decimal::ONE {
                        Amount::new(first).checked_mul(units)
                    } else {
                        Amount::new(after)
                            .checked_mul(units - Decimal::ONE)?
                            .checked_add(&Amount::new(first))
                    }
                }))
            },
        );

        let params = Params::new().with("first", 100).with("after", 50);
        let rate = registry.build("Tiered Rate", &params).unwrap();

        assert_eq!(rate.params(), &params);
        assert_eq!(rate.compute(RentalDuration::from_units(3)).unwrap().value(), dec!(200));
    }

    #[test]
    fn test_built_rate_keeps_sub_cent_precision() {
        let rate = RegistryFixtures::rates()
            .build(FIXED_RATE, &Params::new().with(UNIT_RATE_PARAM, 0.00005))
            .unwrap();

        let amount = rate.compute(RentalDuration::new(dec!(3)).unwrap()).unwrap();
        assert_eq!(amount.value(), dec!(0.00015));
        assert!(amount.round_to_cents().is_zero());
    }

    #[test]
    fn test_built_rate_overflow_is_an_error() {
        let rate = RegistryFixtures::rates()
            .build(
                FIXED_RATE,
                &Params::new().with(UNIT_RATE_PARAM, 10_000_000_000_000_000_000u64),
            )
            .unwrap();
        let duration = RentalDuration::new(dec!(10000000000)).unwrap();

        assert_eq!(rate.compute(duration), Err(MoneyError::Overflow));
        assert!(rate.compute(RentalDuration::from_units(1)).is_ok());
    }

    #[test]
    fn test_reregistration_replaces_builder() {
        let mut registry = RegistryFixtures::rates();
        let schema = registry.param_schema(FLAT_RATE).unwrap().clone();
        registry.register(
            FLAT_RATE,
            schema,
            |_: &Params| Ok(Rate::new(FLAT_RATE, |_| Ok(Amount::zero()))),
        );

        let rate = registry
            .build(FLAT_RATE, &Params::new().with(UNIT_RATE_PARAM, 20))
            .unwrap();
        assert!(rate.compute(RentalDuration::from_units(1)).unwrap().is_zero());
        assert_eq!(registry.list(), vec![FIXED_RATE, FLAT_RATE]);
    }
}

mod approval {
    use super::*;

    #[test]
    fn test_supported_add_on_is_approved() {
        let selection = suite_with(vec![RentableFixtures::wifi()], 2).build();
        assert_eq!(selection.approve(), Ok(()));
    }

    #[test]
    fn test_unsupported_add_on_is_rejected() {
        let selection = suite_with(vec![RentableFixtures::parking()], 2).build();

        let err = selection.approve().unwrap_err();
        assert_eq!(err, RentalError::unsupported_add_on("Parking"));
        assert!(err.to_string().contains("Parking"));
    }

    #[test]
    fn test_first_unsupported_add_on_is_reported() {
        let projector = AddOn::new("projector", "Projector", flat_rate(dec!(40)));
        let selection = suite_with(
            vec![RentableFixtures::wifi(), RentableFixtures::parking(), projector],
            1,
        )
        .build();

        assert_eq!(selection.approve(), Err(RentalError::unsupported_add_on("Parking")));
    }

    #[test]
    fn test_add_on_without_rooms_is_rejected() {
        let selection = TestInvoiceableBuilder::new()
            .with_add_on(RentableFixtures::wifi())
            .build();
        assert!(selection.approve().is_err());
    }

    #[test]
    fn test_empty_selection_is_approved() {
        let selection = TestInvoiceableBuilder::new()
            .with_duration(RentalDuration::ZERO)
            .build();
        assert!(selection.approve().is_ok());
    }

    #[test]
    fn test_any_selected_room_may_support_add_on() {
        let selection = suite_with(vec![RentableFixtures::parking(), RentableFixtures::wifi()], 1)
            .with_room(RentableFixtures::lounge())
            .build();
        assert!(selection.approve().is_ok());
    }

    #[test]
    fn test_room_names() {
        let lounge = TestRoomBuilder::new()
            .named("Lounge")
            .with_flat_rate(dec!(80))
            .build();
        let selection = suite_with(vec![], 1).with_room(lounge).build();

        let names: Vec<&str> = selection.room_names().into_iter().collect();
        assert_eq!(names, vec!["Lounge", "Suite"]);
    }

    #[test]
    fn test_rentables_lists_rooms_before_add_ons() {
        let selection = suite_with(vec![RentableFixtures::wifi()], 1).build();
        let ids: Vec<&str> = selection.rentables().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["suite", "wifi"]);
    }
}

proptest! {
    #[test]
    fn prop_fixed_rate_scales_with_duration(
        rate in unit_rate_strategy(),
        duration in fractional_duration_strategy(),
    ) {
        let amount = fixed_rate(rate).compute(duration).unwrap();
        prop_assert_eq!(amount.value(), rate * duration.units());
    }

    #[test]
    fn prop_flat_rate_ignores_duration(
        rate in unit_rate_strategy(),
        duration in fractional_duration_strategy(),
    ) {
        let amount = flat_rate(rate).compute(duration).unwrap();
        prop_assert_eq!(amount.value(), rate);
    }

    #[test]
    fn prop_approve_is_idempotent(add_on in add_on_strategy(), room in room_strategy()) {
        let selection = TestInvoiceableBuilder::new()
            .with_room(room)
            .with_add_on(add_on)
            .build();
        prop_assert_eq!(selection.approve(), selection.approve());
    }

    #[test]
    fn prop_room_subtotal_matches_rate(
        rate in rate_strategy(),
        duration in fractional_duration_strategy(),
    ) {
        let room = TestRoomBuilder::new().with_id("custom").with_rate(rate).build();
        prop_assert_eq!(room.id(), "custom");
        prop_assert_eq!(room.subtotal(duration), room.rate().compute(duration));
    }

    #[test]
    fn prop_declared_add_ons_are_approved(room in room_strategy()) {
        let selection = room
            .add_ons()
            .iter()
            .cloned()
            .fold(TestInvoiceableBuilder::new(), TestInvoiceableBuilder::with_add_on)
            .with_room(room.clone())
            .build();
        prop_assert!(selection.approve().is_ok());
    }
}
