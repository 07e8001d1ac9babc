//! Tests for parameter schemas and validation

use core_kernel::{ParamConstraints, ParamError, ParamSchema, ParamSpec, ParamType, Params};
use rust_decimal_macros::dec;
use serde_json::json;

fn bundle_schema() -> ParamSchema {
    ParamSchema::new(vec![
        ParamSpec::new("room bundle names", ParamType::list_of(ParamType::Str))
            .with_description("Names of the rooms in the bundle"),
        ParamSpec::new("rate", ParamType::Float)
            .with_description("Discount factor (%)")
            .with_min(dec!(0))
            .with_max(dec!(1)),
    ])
}

mod validation {
    use super::*;

    #[test]
    fn test_valid_params_pass() {
        let params = Params::new()
            .with("room bundle names", json!(["Suite", "Lounge"]))
            .with("rate", 0.1);
        assert_eq!(bundle_schema().validate(&params), Ok(()));
    }

    #[test]
    fn test_extra_params_are_ignored() {
        let params = Params::new()
            .with("room bundle names", json!([]))
            .with("rate", 0.1)
            .with("note", "seasonal");
        assert!(bundle_schema().validate(&params).is_ok());
    }

    #[test]
    fn test_missing_param_is_reported_by_name() {
        let params = Params::new().with("rate", 0.1);
        assert_eq!(
            bundle_schema().validate(&params),
            Err(ParamError::Missing("room bundle names".to_string()))
        );
    }

    #[test]
    fn test_list_items_are_type_checked() {
        let params = Params::new()
            .with("room bundle names", json!(["Suite", false]))
            .with("rate", 0.1);
        assert!(matches!(
            bundle_schema().validate(&params),
            Err(ParamError::WrongType { ref name, .. }) if name == "room bundle names"
        ));
    }

    #[test]
    fn test_numeric_bounds_are_inclusive() {
        let schema = bundle_schema();
        let at_max = Params::new()
            .with("room bundle names", json!([]))
            .with("rate", 1);
        let above_max = Params::new()
            .with("room bundle names", json!([]))
            .with("rate", 1.5);

        assert!(schema.validate(&at_max).is_ok());
        assert!(matches!(
            schema.validate(&above_max),
            Err(ParamError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn test_int_rejects_fractional_values() {
        let spec = ParamSpec::new("nights", ParamType::Int);
        assert!(spec.validate(&json!(3)).is_ok());
        assert!(spec.validate(&json!("4")).is_ok());
        assert!(spec.validate(&json!(3.5)).is_err());
    }

    #[test]
    fn test_choices_restrict_values() {
        let spec = ParamSpec::new("tier", ParamType::Str).with_choices(["gold", "silver"]);
        assert!(spec.validate(&json!("gold")).is_ok());

        let err = spec.validate(&json!("bronze")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 'tier' value 'bronze' is not one of: gold, silver"
        );
    }

    #[test]
    fn test_bool_type() {
        let spec = ParamSpec::new("weekend only", ParamType::Bool);
        assert!(spec.validate(&json!(true)).is_ok());
        assert!(spec.validate(&json!("yes")).is_err());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_schema_deserializes_from_declared_shape() {
        let schema: ParamSchema = serde_json::from_value(json!([
            { "name": "Rate", "type": "float", "description": "Cost per unit time" },
            { "name": "days", "type": "list[int]", "constraints": { "min": 1, "max": 7 } }
        ]))
        .unwrap();

        assert_eq!(schema.len(), 2);
        let days = schema.get("days").unwrap();
        assert_eq!(days.param_type, ParamType::list_of(ParamType::Int));
        assert_eq!(
            days.constraints,
            Some(ParamConstraints { choices: None, min: Some(dec!(1)), max: Some(dec!(7)) })
        );
    }

    #[test]
    fn test_unknown_type_fails_to_deserialize() {
        let result: Result<ParamSpec, _> =
            serde_json::from_value(json!({ "name": "x", "type": "money" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_params_from_json_map() {
        let map = json!({ "Rate": 100 }).as_object().cloned().unwrap();
        let params = Params::from(map);
        assert_eq!(params.decimal("Rate").unwrap(), dec!(100));
    }
}
