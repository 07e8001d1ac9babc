//! Built-in rate kinds
//!
//! Two rate kinds ship by default, both parameterized by a single `Rate`
//! float:
//!
//! | Type name    | Price for duration `t` |
//! |--------------|------------------------|
//! | `Fixed Rate` | `Rate * t`             |
//! | `Flat Rate`  | `Rate`                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut rates = RateRegistry::new();
//! register_default_rates(&mut rates);
//!
//! let nightly = rates.build(FIXED_RATE, &Params::new().with(UNIT_RATE_PARAM, 150))?;
//! ```

use core_kernel::{Amount, ParamSchema, ParamSpec, ParamType, Params, Registrable, Registry};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::rate::Rate;

/// Registry of rate kinds
pub type RateRegistry = Registry<Rate>;

pub const FIXED_RATE: &str = "Fixed Rate";
pub const FLAT_RATE: &str = "Flat Rate";

/// Param name shared by both built-in rate kinds
pub const UNIT_RATE_PARAM: &str = "Rate";

/// Registers `Fixed Rate` and `Flat Rate`
pub fn register_default_rates(registry: &mut RateRegistry) {
    registry.register(
        FIXED_RATE,
        unit_rate_schema("Cost per unit time"),
        |params: &Params| Ok(fixed_rate(params.decimal(UNIT_RATE_PARAM)?)),
    );
    registry.register(
        FLAT_RATE,
        unit_rate_schema("Flat cost"),
        |params: &Params| Ok(flat_rate(params.decimal(UNIT_RATE_PARAM)?)),
    );
}

/// Creates a default registry with the built-in rates
pub fn default_rate_registry() -> RateRegistry {
    let mut registry = RateRegistry::new();
    register_default_rates(&mut registry);
    registry
}

/// A rate that charges `unit_rate` per unit of duration
pub fn fixed_rate(unit_rate: Decimal) -> Rate {
    Rate::new(FIXED_RATE, move |duration| {
        Amount::new(unit_rate).checked_mul(duration.units())
    })
    .with_params(unit_rate_params(unit_rate))
}

/// A rate that charges `amount` regardless of duration
pub fn flat_rate(amount: Decimal) -> Rate {
    Rate::new(FLAT_RATE, move |_| Ok(Amount::new(amount))).with_params(unit_rate_params(amount))
}

fn unit_rate_schema(description: &str) -> ParamSchema {
    ParamSchema::new(vec![
        ParamSpec::new(UNIT_RATE_PARAM, ParamType::Float).with_description(description)
    ])
}

/// Records the unit rate as JSON would carry it: whole rates as integers
fn unit_rate_params(unit_rate: Decimal) -> Params {
    let whole = unit_rate.normalize();
    let value = if whole.scale() == 0 {
        whole.to_i64().map(Value::from)
    } else {
        None
    }
    .or_else(|| unit_rate.to_f64().map(Value::from))
    .unwrap_or(Value::Null);
    Params::new().with(UNIT_RATE_PARAM, value)
}
