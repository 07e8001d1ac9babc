//! Invoiceable rental selections
//!
//! An [`Invoiceable`] bundles the rooms and add-ons a customer selected
//! with the rental duration. Construction never fails; whether the
//! selection is coherent is checked separately by [`Invoiceable::approve`]
//! so that callers can inspect a rejected selection.

use std::collections::BTreeSet;

use core_kernel::RentalDuration;

use crate::error::RentalError;
use crate::rentable::{AddOn, Rentable, Room};

/// Rooms and add-ons selected for a rental, plus its duration
#[derive(Debug, Clone, PartialEq)]
pub struct Invoiceable {
    rooms: Vec<Room>,
    add_ons: Vec<AddOn>,
    duration: RentalDuration,
}

impl Invoiceable {
    pub fn new(rooms: Vec<Room>, add_ons: Vec<AddOn>, duration: RentalDuration) -> Self {
        Self {
            rooms,
            add_ons,
            duration,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn duration(&self) -> RentalDuration {
        self.duration
    }

    /// Names of the selected rooms
    pub fn room_names(&self) -> BTreeSet<&str> {
        self.rooms.iter().map(Room::name).collect()
    }

    /// Checks that every selected add-on is supported by at least one
    /// selected room
    ///
    /// # Errors
    ///
    /// `UnsupportedAddOn` naming the first add-on, in selection order,
    /// that no selected room supports.
    pub fn approve(&self) -> Result<(), RentalError> {
        match self
            .add_ons
            .iter()
            .find(|add_on| !self.rooms.iter().any(|room| room.supports(add_on)))
        {
            Some(unsupported) => Err(RentalError::unsupported_add_on(unsupported.name())),
            None => Ok(()),
        }
    }

    /// Every selected rentable, rooms first, in selection order
    pub fn rentables(&self) -> impl Iterator<Item = &dyn Rentable> {
        self.rooms
            .iter()
            .map(|room| room as &dyn Rentable)
            .chain(self.add_ons.iter().map(|add_on| add_on as &dyn Rentable))
    }
}
