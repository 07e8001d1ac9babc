//! Invoices
//!
//! An [`Invoice`] is the priced result of an approved rental selection.
//! It is immutable: fields are private and only exposed through accessors.
//! Use [`crate::InvoiceBuilder`] to create one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Amount, InvoiceNumber, MoneyError};

/// A priced rentable on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    /// Rentable name
    pub name: String,
    /// Name of the rate that priced it
    pub rate_description: String,
    /// Rental duration, recorded even for flat rates
    pub quantity: Decimal,
    /// Line subtotal
    pub subtotal: Amount,
}

/// A discount applied to an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountLine {
    /// Discount name
    pub name: String,
    /// Amount taken off the subtotal
    pub amount: Amount,
}

/// An issued invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    invoice_number: InvoiceNumber,
    payee: String,
    date_created: NaiveDate,
    date_due: NaiveDate,
    invoice_lines: Vec<InvoiceLine>,
    discount_lines: Vec<DiscountLine>,
    subtotal: Amount,
    total: Amount,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        invoice_number: InvoiceNumber,
        payee: String,
        date_created: NaiveDate,
        date_due: NaiveDate,
        invoice_lines: Vec<InvoiceLine>,
        discount_lines: Vec<DiscountLine>,
        subtotal: Amount,
        total: Amount,
    ) -> Self {
        Self {
            invoice_number,
            payee,
            date_created,
            date_due,
            invoice_lines,
            discount_lines,
            subtotal,
            total,
        }
    }

    pub fn invoice_number(&self) -> InvoiceNumber {
        self.invoice_number
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    pub fn date_due(&self) -> NaiveDate {
        self.date_due
    }

    /// Priced rooms followed by priced add-ons
    pub fn invoice_lines(&self) -> &[InvoiceLine] {
        &self.invoice_lines
    }

    pub fn discount_lines(&self) -> &[DiscountLine] {
        &self.discount_lines
    }

    /// Sum of line subtotals before discounts
    pub fn subtotal(&self) -> Amount {
        self.subtotal
    }

    /// Subtotal less every discount; may be negative
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Sum of all discount amounts
    pub fn total_discount(&self) -> Result<Amount, MoneyError> {
        Amount::checked_sum(self.discount_lines.iter().map(|line| &line.amount))
    }
}
