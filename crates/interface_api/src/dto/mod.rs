//! Request/response data transfer objects
//!
//! The JSON shape is camelCase and matches the persisted room and add-on
//! documents, so stored records and request bodies share one format.

pub mod invoice;
pub mod rental;

pub use invoice::{
    DiscountLineResponse, InvoiceDto, InvoiceLineResponse, InvoiceResponse, InvoiceableDto,
};
pub use rental::{AddOnDto, DiscountDto, RateDto, RoomDto};
