//! Invoice request and response DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Amount;
use domain_billing::{DiscountLine, Invoice, InvoiceLine};

use super::rental::{AddOnDto, DiscountDto, RoomDto};

/// A rental selection: rooms, add-ons, and duration `t`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceableDto {
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub add_ons: Vec<AddOnDto>,
    /// Rental duration in rate units
    pub t: Decimal,
}

/// Request to price a selection into an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub invoice_num: u64,
    pub payee: String,
    pub date_created: NaiveDate,
    pub date_due: NaiveDate,
    pub invoiceable: InvoiceableDto,
    #[serde(default)]
    pub discounts: Vec<DiscountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineResponse {
    pub name: String,
    pub rate_description: String,
    pub quantity: Decimal,
    pub subtotal: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountLineResponse {
    pub name: String,
    pub amount: Amount,
}

/// A priced invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub invoice_num: u64,
    /// Formatted invoice number, e.g. "INV-000042"
    pub invoice_ref: String,
    pub payee: String,
    pub date_created: NaiveDate,
    pub date_due: NaiveDate,
    pub invoice_lines: Vec<InvoiceLineResponse>,
    pub discount_lines: Vec<DiscountLineResponse>,
    pub subtotal: Amount,
    pub total: Amount,
}

impl From<&InvoiceLine> for InvoiceLineResponse {
    fn from(line: &InvoiceLine) -> Self {
        Self {
            name: line.name.clone(),
            rate_description: line.rate_description.clone(),
            quantity: line.quantity,
            subtotal: line.subtotal,
        }
    }
}

impl From<&DiscountLine> for DiscountLineResponse {
    fn from(line: &DiscountLine) -> Self {
        Self {
            name: line.name.clone(),
            amount: line.amount,
        }
    }
}

impl From<&Invoice> for InvoiceResponse {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_num: invoice.invoice_number().value(),
            invoice_ref: invoice.invoice_number().to_string(),
            payee: invoice.payee().to_string(),
            date_created: invoice.date_created(),
            date_due: invoice.date_due(),
            invoice_lines: invoice.invoice_lines().iter().map(Into::into).collect(),
            discount_lines: invoice.discount_lines().iter().map(Into::into).collect(),
            subtotal: invoice.subtotal(),
            total: invoice.total(),
        }
    }
}
