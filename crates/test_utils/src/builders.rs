//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::RentalDuration;
use domain_rental::{fixed_rate, flat_rate, AddOn, Invoiceable, Rate, Room};

use crate::fixtures::{DateFixtures, JsonFixtures};

/// Builder for constructing test rooms
pub struct TestRoomBuilder {
    id: String,
    name: String,
    rate: Rate,
    add_ons: Vec<AddOn>,
}

impl Default for TestRoomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoomBuilder {
    /// Creates a new builder: "Room" at a fixed 100 per unit, no add-ons
    pub fn new() -> Self {
        Self {
            id: "room".to_string(),
            name: "Room".to_string(),
            rate: fixed_rate(dec!(100)),
            add_ons: Vec::new(),
        }
    }

    /// Sets both the id and the name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.id = name.to_lowercase();
        self.name = name;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_fixed_rate(self, unit_rate: Decimal) -> Self {
        self.with_rate(fixed_rate(unit_rate))
    }

    pub fn with_flat_rate(self, amount: Decimal) -> Self {
        self.with_rate(flat_rate(amount))
    }

    /// Declares a supported add-on
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    pub fn build(self) -> Room {
        Room::new(self.id, self.name, self.rate).with_add_ons(self.add_ons)
    }
}

/// Builder for constructing test rental selections
pub struct TestInvoiceableBuilder {
    rooms: Vec<Room>,
    add_ons: Vec<AddOn>,
    duration: RentalDuration,
}

impl Default for TestInvoiceableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceableBuilder {
    /// Creates an empty selection of one unit
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            add_ons: Vec::new(),
            duration: RentalDuration::from_units(1),
        }
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    pub fn with_units(mut self, units: u32) -> Self {
        self.duration = RentalDuration::from_units(units);
        self
    }

    pub fn with_duration(mut self, duration: RentalDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn build(self) -> Invoiceable {
        Invoiceable::new(self.rooms, self.add_ons, self.duration)
    }
}

/// Builder for invoice request bodies
pub struct TestInvoiceRequestBuilder {
    invoice_num: u64,
    payee: String,
    date_created: NaiveDate,
    date_due: NaiveDate,
    rooms: Vec<Value>,
    add_ons: Vec<Value>,
    t: Value,
    discounts: Vec<Value>,
}

impl Default for TestInvoiceRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceRequestBuilder {
    /// Creates a request for invoice 1 to "Jane Doe", one unit, no rooms
    pub fn new() -> Self {
        Self {
            invoice_num: 1,
            payee: "Jane Doe".to_string(),
            date_created: DateFixtures::created(),
            date_due: DateFixtures::due(),
            rooms: Vec::new(),
            add_ons: Vec::new(),
            t: json!(1),
            discounts: Vec::new(),
        }
    }

    pub fn with_invoice_num(mut self, invoice_num: u64) -> Self {
        self.invoice_num = invoice_num;
        self
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = payee.into();
        self
    }

    pub fn with_room(mut self, room: Value) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn with_add_on(mut self, add_on: Value) -> Self {
        self.add_ons.push(add_on);
        self
    }

    /// Sets the duration; any JSON value, so invalid durations can be sent
    pub fn with_t(mut self, t: impl Into<Value>) -> Self {
        self.t = t.into();
        self
    }

    pub fn with_discount(mut self, discount: Value) -> Self {
        self.discounts.push(discount);
        self
    }

    /// Adds the Room Bundle Discount over Suite and Lounge
    pub fn with_bundle_discount(self) -> Self {
        self.with_discount(JsonFixtures::bundle_discount())
    }

    pub fn build(self) -> Value {
        json!({
            "invoiceNum": self.invoice_num,
            "payee": self.payee,
            "dateCreated": self.date_created.to_string(),
            "dateDue": self.date_due.to_string(),
            "invoiceable": {
                "rooms": self.rooms,
                "addOns": self.add_ons,
                "t": self.t
            },
            "discounts": self.discounts
        })
    }
}
