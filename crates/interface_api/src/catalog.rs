//! Rentable catalog
//!
//! Persists the rooms and add-ons on offer as `rooms.json` and
//! `addons.json` under a data directory. Records are validated by
//! translating them before they are stored, so everything in the catalog
//! rebuilds into a domain value.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use core_kernel::{Repository, RepositoryError};
use domain_rental::{AddOn, Rentable, Room};
use infra_store::{JsonRepository, StoreError};

use crate::dto::{AddOnDto, RoomDto};
use crate::translate::{RentalApi, TranslateError};

pub const ROOMS_FILE: &str = "rooms.json";
pub const ADD_ONS_FILE: &str = "addons.json";

/// Errors raised by catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Stored rooms and add-ons
#[derive(Debug, Clone)]
pub struct RentableCatalog {
    rooms: JsonRepository<RoomDto>,
    add_ons: JsonRepository<AddOnDto>,
}

impl RentableCatalog {
    /// Opens the catalog under `data_dir`, creating empty documents as needed
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        Ok(Self {
            rooms: JsonRepository::open(data_dir.join(ROOMS_FILE))?,
            add_ons: JsonRepository::open(data_dir.join(ADD_ONS_FILE))?,
        })
    }

    pub fn list_rooms(&self, api: &RentalApi) -> Result<Vec<Room>, CatalogError> {
        self.rooms
            .list()?
            .iter()
            .map(|dto| api.build_room(dto).map_err(CatalogError::from))
            .collect()
    }

    pub fn get_room(&self, api: &RentalApi, id: &str) -> Result<Room, CatalogError> {
        Ok(api.build_room(&self.rooms.get(id)?)?)
    }

    /// Validates and stores a room
    pub fn add_room(&self, api: &RentalApi, dto: RoomDto) -> Result<Room, CatalogError> {
        let room = api.build_room(&dto)?;
        self.rooms.add(dto)?;
        info!(id = room.id(), "Room added to catalog");
        Ok(room)
    }

    pub fn delete_room(&self, id: &str) -> Result<(), CatalogError> {
        Ok(self.rooms.delete(id)?)
    }

    pub fn list_add_ons(&self, api: &RentalApi) -> Result<Vec<AddOn>, CatalogError> {
        self.add_ons
            .list()?
            .iter()
            .map(|dto| api.build_add_on(dto).map_err(CatalogError::from))
            .collect()
    }

    pub fn get_add_on(&self, api: &RentalApi, id: &str) -> Result<AddOn, CatalogError> {
        Ok(api.build_add_on(&self.add_ons.get(id)?)?)
    }

    /// Validates and stores an add-on
    pub fn add_add_on(&self, api: &RentalApi, dto: AddOnDto) -> Result<AddOn, CatalogError> {
        let add_on = api.build_add_on(&dto)?;
        self.add_ons.add(dto)?;
        info!(id = add_on.id(), "Add-on added to catalog");
        Ok(add_on)
    }

    pub fn delete_add_on(&self, id: &str) -> Result<(), CatalogError> {
        Ok(self.add_ons.delete(id)?)
    }
}
