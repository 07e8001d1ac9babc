//! Rentable entities
//!
//! Rooms and add-ons are both rentable: each has a display name and a
//! [`Rate`] that prices it over a duration. A room also declares which
//! add-ons it supports. Support is decided by add-on name, so two add-ons
//! with the same name but different ids or rates are interchangeable for
//! approval purposes.

use core_kernel::{AddOnId, Amount, MoneyError, RentalDuration, RoomId};

use crate::rate::Rate;

/// Something that can be rented and priced over a duration
pub trait Rentable {
    /// Identifier, unique among rentables of the same kind
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn rate(&self) -> &Rate;

    /// Prices this rentable for the given duration using its rate
    fn subtotal(&self, duration: RentalDuration) -> Result<Amount, MoneyError> {
        self.rate().compute(duration)
    }
}

/// An optional extra (e.g. "WiFi", "Projector") rented alongside rooms
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    id: AddOnId,
    name: String,
    rate: Rate,
}

impl AddOn {
    pub fn new(id: impl Into<AddOnId>, name: impl Into<String>, rate: Rate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate,
        }
    }
}

impl Rentable for AddOn {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rate(&self) -> &Rate {
        &self.rate
    }
}

/// A bookable room and the add-ons it can be rented with
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: RoomId,
    name: String,
    rate: Rate,
    add_ons: Vec<AddOn>,
}

impl Room {
    /// Creates a room that supports no add-ons
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, rate: Rate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate,
            add_ons: Vec::new(),
        }
    }

    /// Declares an add-on as supported by this room
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    pub fn with_add_ons(mut self, add_ons: impl IntoIterator<Item = AddOn>) -> Self {
        self.add_ons.extend(add_ons);
        self
    }

    /// Add-ons this room supports
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Returns true if the room supports an add-on with the same name
    pub fn supports(&self, add_on: &AddOn) -> bool {
        self.add_ons.iter().any(|supported| supported.name == add_on.name)
    }
}

impl Rentable for Room {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rate(&self) -> &Rate {
        &self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{fixed_rate, flat_rate};
    use rust_decimal_macros::dec;

    #[test]
    fn test_supports_matches_by_name() {
        let wifi = AddOn::new("a1", "WiFi", flat_rate(dec!(20)));
        let room = Room::new("r1", "Suite", fixed_rate(dec!(100))).with_add_on(wifi);

        let other_wifi = AddOn::new("a9", "WiFi", flat_rate(dec!(35)));
        let parking = AddOn::new("a2", "Parking", flat_rate(dec!(15)));

        assert!(room.supports(&other_wifi));
        assert!(!room.supports(&parking));
    }

    #[test]
    fn test_subtotal_uses_rate() {
        let room = Room::new("r1", "Suite", fixed_rate(dec!(100)));
        assert_eq!(room.subtotal(RentalDuration::from_units(3)).unwrap().value(), dec!(300));
    }
}
