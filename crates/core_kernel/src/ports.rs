//! Repository Port
//!
//! The pricing core consumes rooms and add-ons that have already been
//! constructed; it never touches how they are stored. This module defines
//! the port that storage adapters implement so the outer layers can swap
//! a JSON file for any other backend.
//!
//! ```text
//! ┌───────────────────────────┐
//! │   interface_api catalog   │
//! └─────────────┬─────────────┘
//!               │ Repository<R>
//!               ▼
//! ┌───────────────────────────┐
//! │ infra_store JsonRepository│
//! └───────────────────────────┘
//! ```

use thiserror::Error;

/// Error type for repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record with the same id already exists
    #[error("{entity} with id '{id}' already exists")]
    DuplicateId {
        entity: &'static str,
        id: String,
    },

    /// No record exists with the requested id
    #[error("{entity} with id '{id}' does not exist")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// The underlying storage failed
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RepositoryError {
    pub fn duplicate<R: Identified>(id: impl Into<String>) -> Self {
        RepositoryError::DuplicateId {
            entity: R::ENTITY,
            id: id.into(),
        }
    }

    pub fn not_found<R: Identified>(id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity: R::ENTITY,
            id: id.into(),
        }
    }

    pub fn storage(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RepositoryError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// A record keyed by a string id
pub trait Identified {
    /// Entity label used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

/// Id-keyed collection of records
pub trait Repository<R: Identified> {
    /// Returns every stored record in insertion order
    fn list(&self) -> Result<Vec<R>, RepositoryError>;

    /// Stores a new record
    ///
    /// # Errors
    ///
    /// `DuplicateId` if a record with the same id is already stored
    fn add(&self, record: R) -> Result<R, RepositoryError>;

    /// Returns the record with the given id
    ///
    /// # Errors
    ///
    /// `NotFound` if no such record exists
    fn get(&self, id: &str) -> Result<R, RepositoryError>;

    /// Removes the record with the given id
    ///
    /// # Errors
    ///
    /// `NotFound` if no such record exists
    fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
