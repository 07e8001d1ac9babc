//! Invoice construction
//!
//! [`InvoiceBuilder`] ties approval and pricing together: a selection is
//! approved first, and only an approved selection is priced. A rejected
//! selection yields an error and no invoice.

use chrono::NaiveDate;

use core_kernel::InvoiceNumber;
use domain_rental::Invoiceable;

use crate::discount::Discount;
use crate::error::BillingError;
use crate::invoice::Invoice;
use crate::pricing::PricingEngine;

/// Builds invoices from rental selections
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    engine: PricingEngine,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Approves the selection and prices it into an invoice
    ///
    /// # Arguments
    ///
    /// * `invoice_number` - Number printed on the invoice
    /// * `payee` - Who the invoice is addressed to
    /// * `date_created` / `date_due` - Issue and due dates, taken as given
    /// * `invoiceable` - The rental selection
    /// * `discounts` - Candidate discounts, in the order their lines should
    ///   appear
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Rental` if the selection contains an add-on no
    /// selected room supports, or `BillingError::Overflow` naming the first
    /// line whose amount does not fit in a decimal.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let invoice = InvoiceBuilder::new().build(
    ///     InvoiceNumber::new(1),
    ///     "Acme Ltd",
    ///     created,
    ///     due,
    ///     &selection,
    ///     &[bundle_discount],
    /// )?;
    /// println!("Total due: {}", invoice.total());
    /// ```
    pub fn build(
        &self,
        invoice_number: InvoiceNumber,
        payee: impl Into<String>,
        date_created: NaiveDate,
        date_due: NaiveDate,
        invoiceable: &Invoiceable,
        discounts: &[Discount],
    ) -> Result<Invoice, BillingError> {
        invoiceable.approve()?;

        let invoice_lines = self.engine.line_items(invoiceable)?;
        let subtotal = self.engine.subtotal(&invoice_lines)?;
        let discount_lines = self.engine.discount_lines(invoiceable, subtotal, discounts)?;
        let total = self.engine.total(subtotal, &discount_lines)?;

        Ok(Invoice::new(
            invoice_number,
            payee.into(),
            date_created,
            date_due,
            invoice_lines,
            discount_lines,
            subtotal,
            total,
        ))
    }
}
