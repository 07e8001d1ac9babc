//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the rooms and add-ons used across
//! the test suite. These fixtures are designed to be consistent and
//! predictable:
//!
//! | Fixture | Kind   | Rate          | Supports |
//! |---------|--------|---------------|----------|
//! | Suite   | room   | Fixed 100     | WiFi     |
//! | Lounge  | room   | Fixed 150     | Parking  |
//! | WiFi    | add-on | Flat 20       |          |
//! | Parking | add-on | Flat 15       |          |

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_billing::{default_discount_registry, DiscountRegistry};
use domain_rental::{default_rate_registry, fixed_rate, flat_rate, AddOn, RateRegistry, Room};

/// Fixture for registries populated with the built-in kinds
pub struct RegistryFixtures;

impl RegistryFixtures {
    /// Rate registry with `Fixed Rate` and `Flat Rate`
    pub fn rates() -> RateRegistry {
        default_rate_registry()
    }

    /// Discount registry with `Room Bundle Discount`
    pub fn discounts() -> DiscountRegistry {
        default_discount_registry()
    }
}

/// Fixture for domain rooms and add-ons
pub struct RentableFixtures;

impl RentableFixtures {
    pub fn wifi() -> AddOn {
        AddOn::new("wifi", "WiFi", flat_rate(dec!(20)))
    }

    pub fn parking() -> AddOn {
        AddOn::new("parking", "Parking", flat_rate(dec!(15)))
    }

    /// Suite at a fixed 100 per unit, supporting WiFi
    pub fn suite() -> Room {
        Room::new("suite", "Suite", fixed_rate(dec!(100))).with_add_on(Self::wifi())
    }

    /// Lounge at a fixed 150 per unit, supporting Parking
    pub fn lounge() -> Room {
        Room::new("lounge", "Lounge", fixed_rate(dec!(150))).with_add_on(Self::parking())
    }
}

/// Fixture for invoice dates
pub struct DateFixtures;

impl DateFixtures {
    /// Invoice creation date (Mar 1, 2024)
    pub fn created() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Invoice due date (Mar 31, 2024)
    pub fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }
}

/// Fixture for JSON request bodies and stored documents
pub struct JsonFixtures;

impl JsonFixtures {
    pub fn fixed_rate(unit_rate: u32) -> Value {
        json!({ "rateType": "Fixed Rate", "params": { "Rate": unit_rate } })
    }

    pub fn flat_rate(amount: u32) -> Value {
        json!({ "rateType": "Flat Rate", "params": { "Rate": amount } })
    }

    pub fn wifi() -> Value {
        json!({ "id": "wifi", "name": "WiFi", "rate": Self::flat_rate(20) })
    }

    pub fn parking() -> Value {
        json!({ "id": "parking", "name": "Parking", "rate": Self::flat_rate(15) })
    }

    pub fn suite() -> Value {
        json!({
            "id": "suite",
            "name": "Suite",
            "rate": Self::fixed_rate(100),
            "addOns": [Self::wifi()]
        })
    }

    pub fn lounge() -> Value {
        json!({
            "id": "lounge",
            "name": "Lounge",
            "rate": Self::fixed_rate(150),
            "addOns": [Self::parking()]
        })
    }

    /// Room Bundle Discount over Suite and Lounge at 10%
    pub fn bundle_discount() -> Value {
        json!({
            "discountType": "Room Bundle Discount",
            "params": { "room bundle names": ["Suite", "Lounge"], "rate": 0.1 }
        })
    }
}
