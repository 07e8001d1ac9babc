//! Rule Registry
//!
//! This module provides a named registry of rule builders. It decouples the
//! *kinds* of pricing and discount rules from the code that applies them:
//! new kinds are added by registering a builder under a type name, and
//! callers build rule instances by name without knowing the concrete kind.
//!
//! # Architecture
//!
//! Each entry pairs a builder function with the [`ParamSchema`] it expects.
//! Building a rule:
//!
//! 1. looks up the entry by type name,
//! 2. validates the supplied [`Params`] against the declared schema,
//! 3. invokes the builder,
//! 4. decorates the result with the supplied params so it can later be
//!    persisted and rebuilt identically.
//!
//! A registry starts empty. Default kinds are installed by explicit
//! registration calls at start-up; there is no process-wide instance.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::registry::Registry;
//!
//! let mut rates: Registry<Rate> = Registry::new();
//! rates.register("Flat Rate", schema, |params| {
//!     let amount = params.decimal("Rate")?;
//!     Ok(Rate::new("Flat Rate", move |_| Ok(Amount::new(amount))))
//! });
//!
//! let rate = rates.build("Flat Rate", &params)?;
//! assert_eq!(rate.params(), &params);
//! ```
//!
//! # Concurrency
//!
//! Registration takes `&mut self`; building takes `&self`. A registry that
//! is populated once and then shared (e.g. behind an `Arc`) needs no locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::params::{ParamError, ParamSchema, Params};

/// Errors raised by registry lookups and builds
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No builder was registered under the requested type name
    #[error("Unknown {kind} type: {type_name}")]
    UnknownType {
        kind: &'static str,
        type_name: String,
    },

    /// The builder (or the declared schema) rejected the supplied params
    #[error("Invalid {kind} definition for '{type_name}': {source}")]
    InvalidDefinition {
        kind: &'static str,
        type_name: String,
        #[source]
        source: ParamError,
    },
}

impl RegistryError {
    /// Returns the type name the failure refers to
    pub fn type_name(&self) -> &str {
        match self {
            RegistryError::UnknownType { type_name, .. }
            | RegistryError::InvalidDefinition { type_name, .. } => type_name,
        }
    }
}

/// A value that can be produced by a [`Registry`]
pub trait Registrable: Sized {
    /// Label used in error messages ("rate", "discount", ...)
    const KIND: &'static str;

    /// Returns the value carrying the params it was built from
    fn with_params(self, params: Params) -> Self;
}

/// Builder function stored in a registry
pub type Builder<T> = Arc<dyn Fn(&Params) -> Result<T, ParamError> + Send + Sync>;

struct RegistryEntry<T> {
    schema: ParamSchema,
    builder: Builder<T>,
}

/// Maps rule type names to builders and parameter schemas
pub struct Registry<T> {
    order: Vec<String>,
    entries: HashMap<String, RegistryEntry<T>>,
}

impl<T: Registrable> Registry<T> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Registers a builder under a type name
    ///
    /// Registering a name that already exists replaces the previous entry
    /// (last writer wins); the name keeps its original position in
    /// [`Registry::list`].
    pub fn register<F>(&mut self, type_name: impl Into<String>, schema: ParamSchema, builder: F)
    where
        F: Fn(&Params) -> Result<T, ParamError> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        let entry = RegistryEntry {
            schema,
            builder: Arc::new(builder),
        };

        if self.entries.insert(type_name.clone(), entry).is_none() {
            self.order.push(type_name);
        }
    }

    /// Builds a rule of the given type from params
    ///
    /// # Errors
    ///
    /// * `UnknownType` if nothing is registered under `type_name`
    /// * `InvalidDefinition` if the params fail schema validation or the
    ///   builder rejects them
    pub fn build(&self, type_name: &str, params: &Params) -> Result<T, RegistryError> {
        let entry = self.entry(type_name)?;

        let invalid = |source| RegistryError::InvalidDefinition {
            kind: T::KIND,
            type_name: type_name.to_string(),
            source,
        };

        entry.schema.validate(params).map_err(invalid)?;
        let built = (entry.builder)(params).map_err(invalid)?;

        Ok(built.with_params(params.clone()))
    }

    /// Returns the parameter schema declared for a type
    pub fn param_schema(&self, type_name: &str) -> Result<&ParamSchema, RegistryError> {
        self.entry(type_name).map(|entry| &entry.schema)
    }

    /// Returns registered type names in registration order
    pub fn list(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entry(&self, type_name: &str) -> Result<&RegistryEntry<T>, RegistryError> {
        self.entries
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType {
                kind: T::KIND,
                type_name: type_name.to_string(),
            })
    }
}

impl<T: Registrable> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.order)
            .finish()
    }
}
