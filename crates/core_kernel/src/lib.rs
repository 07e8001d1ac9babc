//! Core Kernel - Foundational types for the rental pricing system
//!
//! This crate provides the building blocks shared by every layer:
//! - Amounts and fractions with precise decimal arithmetic
//! - Rental durations
//! - Rentable identifiers and invoice numbers
//! - Rule parameters and their declared schemas
//! - The generic rule registry behind rate and discount kinds
//! - The repository port implemented by storage adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod params;
pub mod registry;
pub mod ports;
pub mod error;

pub use money::{Amount, Fraction, MoneyError};
pub use temporal::{RentalDuration, TemporalError};
pub use identifiers::{RoomId, AddOnId, InvoiceNumber};
pub use params::{Params, ParamSpec, ParamType, ParamSchema, ParamConstraints, ParamError};
pub use registry::{Registry, Registrable, RegistryError};
pub use ports::{Repository, RepositoryError, Identified};
pub use error::CoreError;
