//! Billing Domain - Discounts, Pricing, and Invoices
//!
//! This crate prices approved rental selections and issues invoices.
//!
//! # Pipeline
//!
//! Every invoice is computed in the same order:
//!
//! - approve the selection (every add-on supported by a selected room)
//! - price each room, then each add-on, for the rental duration
//! - sum the lines into a subtotal
//! - evaluate each eligible discount against that subtotal
//! - subtract the discounts to get the total
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{default_discount_registry, InvoiceBuilder};
//!
//! let discounts = default_discount_registry();
//! let bundle = discounts.build("Room Bundle Discount", &params)?;
//!
//! let invoice = InvoiceBuilder::new().build(
//!     InvoiceNumber::new(42),
//!     "Jane Doe",
//!     created,
//!     due,
//!     &selection,
//!     &[bundle],
//! )?;
//! ```

pub mod builder;
pub mod discount;
pub mod discounts;
pub mod error;
pub mod invoice;
pub mod pricing;

pub use builder::InvoiceBuilder;
pub use discount::{AmountFn, AppliesFn, Discount};
pub use discounts::{
    default_discount_registry, register_default_discounts, room_bundle_discount,
    DiscountRegistry, BUNDLE_NAMES_PARAM, BUNDLE_RATE_PARAM, ROOM_BUNDLE_DISCOUNT,
};
pub use error::BillingError;
pub use invoice::{DiscountLine, Invoice, InvoiceLine};
pub use pricing::PricingEngine;
