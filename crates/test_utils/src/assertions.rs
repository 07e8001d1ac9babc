//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Amount;
use domain_billing::{BillingError, Invoice};
use domain_rental::RentalError;

/// Asserts that an amount equals the expected decimal value
pub fn assert_amount_eq(actual: Amount, expected: Decimal) {
    assert_eq!(
        actual.value(),
        expected,
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that two amounts are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_amount_approx_eq(actual: Amount, expected: Amount, tolerance: Decimal) {
    let diff = actual
        .checked_sub(&expected)
        .unwrap_or_else(|err| panic!("Cannot compare {} and {}: {}", actual, expected, err))
        .abs();
    assert!(
        diff.value() <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that the invoice lines are named as expected, in order
pub fn assert_line_names(invoice: &Invoice, expected: &[&str]) {
    let names: Vec<&str> = invoice
        .invoice_lines()
        .iter()
        .map(|line| line.name.as_str())
        .collect();
    assert_eq!(names, expected, "Unexpected invoice lines");
}

/// Asserts the invoice arithmetic: subtotal is the sum of lines and total is
/// subtotal less every discount
pub fn assert_invoice_consistent(invoice: &Invoice) {
    let lines = Amount::checked_sum(invoice.invoice_lines().iter().map(|line| &line.subtotal))
        .expect("Invoice lines overflow");
    assert_eq!(
        invoice.subtotal(),
        lines,
        "Subtotal {} is not the sum of lines {}",
        invoice.subtotal(),
        lines
    );

    let expected_total = invoice
        .total_discount()
        .and_then(|discount| invoice.subtotal().checked_sub(&discount))
        .expect("Invoice discounts overflow");
    assert_eq!(
        invoice.total(),
        expected_total,
        "Total {} is not subtotal less discounts {}",
        invoice.total(),
        expected_total
    );
}

/// Asserts that invoicing failed because of the named unsupported add-on
pub fn assert_unsupported_add_on(result: &Result<Invoice, BillingError>, add_on: &str) {
    match result {
        Err(BillingError::Rental(RentalError::UnsupportedAddOn { add_on: actual })) => {
            assert_eq!(actual, add_on, "Wrong add-on reported as unsupported");
        }
        Err(other) => panic!("Expected add-on '{}' to be rejected, got: {}", add_on, other),
        Ok(invoice) => panic!(
            "Expected add-on '{}' to be rejected, got invoice totalling {}",
            add_on,
            invoice.total()
        ),
    }
}
