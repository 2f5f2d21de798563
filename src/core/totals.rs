use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::Invoice;

/// Derived invoice totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate / 100`.
    pub tax: Decimal,
    /// `subtotal + tax - discount - advance_payment`.
    ///
    /// May be negative when discount and advance exceed subtotal plus tax;
    /// no clamping is applied.
    pub total: Decimal,
}

/// Compute the derived totals for an invoice.
///
/// Pure — never mutates the record and never rounds intermediate values.
pub fn compute_totals(invoice: &Invoice) -> Totals {
    let subtotal: Decimal = invoice.items.iter().map(|item| item.amount()).sum();
    let tax = subtotal * invoice.tax_rate / dec!(100);
    let total = subtotal + tax - invoice.discount - invoice.advance_payment;
    Totals {
        subtotal,
        tax,
        total,
    }
}

impl Invoice {
    /// Convenience wrapper around [`compute_totals`].
    pub fn totals(&self) -> Totals {
        compute_totals(self)
    }
}
