//! Rental Domain
//!
//! This crate models what a customer rents: rooms, the add-ons they
//! support, and the rates that price them.
//!
//! # Architecture
//!
//! - [`rate`]: named pricing functions over a rental duration
//! - [`rates`]: the built-in `Fixed Rate` and `Flat Rate` kinds
//! - [`rentable`]: rooms and add-ons
//! - [`invoiceable`]: a rental selection and its approval check
//!
//! Rate kinds are looked up by name in a [`RateRegistry`], so new kinds can
//! be registered without touching the entities that use them.

pub mod error;
pub mod invoiceable;
pub mod rate;
pub mod rates;
pub mod rentable;

pub use error::RentalError;
pub use invoiceable::Invoiceable;
pub use rate::{Rate, RateFn};
pub use rates::{
    default_rate_registry, fixed_rate, flat_rate, register_default_rates, RateRegistry,
    FIXED_RATE, FLAT_RATE, UNIT_RATE_PARAM,
};
pub use rentable::{AddOn, Rentable, Room};
