//! Request handlers, one module per resource

pub mod add_ons;
pub mod discounts;
pub mod health;
pub mod invoices;
pub mod rates;
pub mod rooms;
