//! JSON-to-domain translation
//!
//! [`RentalApi`] turns DTOs into domain values by looking rate and discount
//! kinds up in its registries. It is the single place where type names in
//! requests and stored documents become closures.
//!
//! # Usage
//!
//! ```rust,ignore
//! let api = RentalApi::with_defaults();
//!
//! let room = api.build_room_from_json(&json!({
//!     "id": "suite",
//!     "name": "Suite",
//!     "rate": { "rateType": "Fixed Rate", "params": { "Rate": 100 } }
//! }))?;
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use core_kernel::{
    InvoiceNumber, ParamSchema, RegistryError, RentalDuration, TemporalError,
};
use domain_billing::{
    register_default_discounts, BillingError, Discount, DiscountRegistry, Invoice,
    InvoiceBuilder,
};
use domain_rental::{register_default_rates, AddOn, Invoiceable, Rate, RateRegistry, Room};

use crate::dto::{AddOnDto, DiscountDto, InvoiceDto, InvoiceableDto, RateDto, RoomDto};

/// Errors raised while translating DTOs into domain values
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The JSON does not have the expected shape
    #[error("Malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A rate or discount could not be built
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid add-on '{id}'")]
    AddOn {
        id: String,
        #[source]
        source: Box<TranslateError>,
    },

    #[error("Invalid room '{id}'")]
    Room {
        id: String,
        #[source]
        source: Box<TranslateError>,
    },

    #[error("Invalid discount #{position}")]
    Discount {
        position: usize,
        #[source]
        source: RegistryError,
    },

    #[error(transparent)]
    Duration(#[from] TemporalError),

    /// The selection failed approval or pricing
    #[error(transparent)]
    Billing(#[from] BillingError),
}

impl TranslateError {
    pub fn malformed(what: &'static str, source: serde_json::Error) -> Self {
        TranslateError::Malformed { what, source }
    }

    /// Innermost translation error, past any room/add-on context
    pub fn root(&self) -> &TranslateError {
        match self {
            TranslateError::AddOn { source, .. } | TranslateError::Room { source, .. } => {
                source.root()
            }
            other => other,
        }
    }

    /// Returns true if the input was not valid JSON for the expected DTO
    pub fn is_malformed(&self) -> bool {
        matches!(self.root(), TranslateError::Malformed { .. })
    }
}

/// Parses a DTO from a JSON value
pub fn parse_dto<T: DeserializeOwned>(what: &'static str, value: &Value) -> Result<T, TranslateError> {
    T::deserialize(value).map_err(|e| TranslateError::malformed(what, e))
}

/// Rate and discount registries plus the invoice builder
#[derive(Debug, Default)]
pub struct RentalApi {
    rates: RateRegistry,
    discounts: DiscountRegistry,
    builder: InvoiceBuilder,
}

impl RentalApi {
    /// Creates an API with empty registries
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an API with the built-in rate and discount kinds registered
    pub fn with_defaults() -> Self {
        let mut api = Self::new();
        register_default_rates(&mut api.rates);
        register_default_discounts(&mut api.discounts);
        api
    }

    pub fn rates(&self) -> &RateRegistry {
        &self.rates
    }

    /// Mutable access for registering additional rate kinds
    pub fn rates_mut(&mut self) -> &mut RateRegistry {
        &mut self.rates
    }

    pub fn discounts(&self) -> &DiscountRegistry {
        &self.discounts
    }

    /// Mutable access for registering additional discount kinds
    pub fn discounts_mut(&mut self) -> &mut DiscountRegistry {
        &mut self.discounts
    }

    pub fn list_rates(&self) -> Vec<&str> {
        self.rates.list()
    }

    pub fn list_discounts(&self) -> Vec<&str> {
        self.discounts.list()
    }

    pub fn rate_schema(&self, rate_type: &str) -> Result<&ParamSchema, RegistryError> {
        self.rates.param_schema(rate_type)
    }

    pub fn discount_schema(&self, discount_type: &str) -> Result<&ParamSchema, RegistryError> {
        self.discounts.param_schema(discount_type)
    }

    pub fn build_rate(&self, dto: &RateDto) -> Result<Rate, TranslateError> {
        Ok(self.rates.build(&dto.rate_type, &dto.params)?)
    }

    pub fn build_discount(&self, dto: &DiscountDto) -> Result<Discount, TranslateError> {
        Ok(self.discounts.build(&dto.discount_type, &dto.params)?)
    }

    pub fn build_add_on(&self, dto: &AddOnDto) -> Result<AddOn, TranslateError> {
        let rate = self.build_rate(&dto.rate).map_err(|e| TranslateError::AddOn {
            id: dto.id.to_string(),
            source: Box::new(e),
        })?;

        Ok(AddOn::new(dto.id.clone(), dto.name.clone(), rate))
    }

    pub fn build_room(&self, dto: &RoomDto) -> Result<Room, TranslateError> {
        let in_room = |e: TranslateError| TranslateError::Room {
            id: dto.id.to_string(),
            source: Box::new(e),
        };

        let rate = self.build_rate(&dto.rate).map_err(in_room)?;
        let add_ons = dto
            .add_ons
            .iter()
            .map(|add_on| self.build_add_on(add_on))
            .collect::<Result<Vec<_>, _>>()
            .map_err(in_room)?;

        Ok(Room::new(dto.id.clone(), dto.name.clone(), rate).with_add_ons(add_ons))
    }

    /// Builds a selection; approval is left to invoice construction
    pub fn build_invoiceable(&self, dto: &InvoiceableDto) -> Result<Invoiceable, TranslateError> {
        let rooms = dto
            .rooms
            .iter()
            .map(|room| self.build_room(room))
            .collect::<Result<Vec<_>, _>>()?;
        let add_ons = dto
            .add_ons
            .iter()
            .map(|add_on| self.build_add_on(add_on))
            .collect::<Result<Vec<_>, _>>()?;
        let duration = RentalDuration::new(dto.t)?;

        Ok(Invoiceable::new(rooms, add_ons, duration))
    }

    /// Builds, approves, and prices an invoice request
    pub fn build_invoice(&self, dto: &InvoiceDto) -> Result<Invoice, TranslateError> {
        let invoiceable = self.build_invoiceable(&dto.invoiceable)?;
        let discounts = dto
            .discounts
            .iter()
            .enumerate()
            .map(|(position, discount)| {
                self.discounts
                    .build(&discount.discount_type, &discount.params)
                    .map_err(|source| TranslateError::Discount { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.builder.build(
            InvoiceNumber::new(dto.invoice_num),
            dto.payee.clone(),
            dto.date_created,
            dto.date_due,
            &invoiceable,
            &discounts,
        )?)
    }

    pub fn build_rate_from_json(&self, value: &Value) -> Result<Rate, TranslateError> {
        self.build_rate(&parse_dto("rate", value)?)
    }

    pub fn build_discount_from_json(&self, value: &Value) -> Result<Discount, TranslateError> {
        self.build_discount(&parse_dto("discount", value)?)
    }

    pub fn build_add_on_from_json(&self, value: &Value) -> Result<AddOn, TranslateError> {
        self.build_add_on(&parse_dto("add-on", value)?)
    }

    pub fn build_room_from_json(&self, value: &Value) -> Result<Room, TranslateError> {
        self.build_room(&parse_dto("room", value)?)
    }

    pub fn build_invoiceable_from_json(&self, value: &Value) -> Result<Invoiceable, TranslateError> {
        self.build_invoiceable(&parse_dto("invoiceable", value)?)
    }

    pub fn build_invoice_from_json(&self, value: &Value) -> Result<Invoice, TranslateError> {
        self.build_invoice(&parse_dto("invoice", value)?)
    }
}
