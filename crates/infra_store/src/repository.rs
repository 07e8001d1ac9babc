//! JSON-backed repository
//!
//! Implements the [`Repository`] port over a [`JsonStore`]. Records keep
//! their insertion order; ids are unique within one repository.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::JsonRepository;
//!
//! let rooms: JsonRepository<RoomDto> = JsonRepository::open("data/rooms.json")?;
//! rooms.add(suite)?;
//! let suite = rooms.get("suite")?;
//! ```

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, instrument};

use core_kernel::{Identified, Repository, RepositoryError};

use crate::error::StoreError;
use crate::store::JsonStore;

/// Repository of `R` records persisted in a single JSON document
#[derive(Debug, Clone)]
pub struct JsonRepository<R> {
    store: JsonStore,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonRepository<R> {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Opens (or creates) the document at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        JsonStore::open(path).map(Self::new)
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }
}

impl<R> Repository<R> for JsonRepository<R>
where
    R: Identified + Clone + Serialize + DeserializeOwned,
{
    fn list(&self) -> Result<Vec<R>, RepositoryError> {
        Ok(self.store.load()?)
    }

    #[instrument(skip(self, record), fields(entity = R::ENTITY, id = record.id()))]
    fn add(&self, record: R) -> Result<R, RepositoryError> {
        let mut records: Vec<R> = self.store.load()?;

        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepositoryError::duplicate::<R>(record.id()));
        }

        records.push(record.clone());
        self.store.save(&records)?;
        info!("Record added");

        Ok(record)
    }

    fn get(&self, id: &str) -> Result<R, RepositoryError> {
        let records: Vec<R> = self.store.load()?;
        records
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| RepositoryError::not_found::<R>(id))
    }

    #[instrument(skip(self), fields(entity = R::ENTITY))]
    fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let records: Vec<R> = self.store.load()?;

        if !records.iter().any(|record| record.id() == id) {
            return Err(RepositoryError::not_found::<R>(id));
        }

        let remaining: Vec<R> = records
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();
        self.store.save(&remaining)?;
        info!("Record deleted");

        Ok(())
    }
}
