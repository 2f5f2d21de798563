use super::error::{InvoiceError, ValidationError};
use super::types::Invoice;

/// Validate an invoice before save-for-output, preview, export, or print.
/// Returns all validation errors found (not just the first).
///
/// An invoice with zero line items is a valid in-memory draft, but it is
/// rejected here: nothing invalid ever reaches the renderer or the blob
/// store through the checked entry points.
pub fn validate_for_output(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoiceNumber",
            "invoice number must not be empty",
        ));
    }

    // Invoice date is required too, but NaiveDate is always a valid date —
    // guaranteed by the type system.

    if invoice.business.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.name",
            "business name must not be empty",
        ));
    }

    if invoice.business.email.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.email",
            "business email must not be empty",
        ));
    }

    if invoice.client.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "client.name",
            "client name must not be empty",
        ));
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        let prefix = format!("items[{i}]");

        if item.description.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.description"),
                "item description must not be empty",
            ));
        }

        if item.quantity.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                "item quantity must not be negative",
            ));
        }

        if item.rate.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.rate"),
                "item rate must not be negative",
            ));
        }
    }

    if invoice.tax_rate.is_sign_negative() {
        errors.push(ValidationError::new(
            "taxRate",
            "tax rate must not be negative",
        ));
    }

    if invoice.discount.is_sign_negative() {
        errors.push(ValidationError::new(
            "discount",
            "discount must not be negative",
        ));
    }

    if invoice.advance_payment.is_sign_negative() {
        errors.push(ValidationError::new(
            "advancePayment",
            "advance payment must not be negative",
        ));
    }

    errors
}

/// Run [`validate_for_output`] and fold any failures into a single
/// [`InvoiceError::Validation`].
pub fn ensure_valid(invoice: &Invoice) -> Result<(), InvoiceError> {
    let errors = validate_for_output(invoice);
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(InvoiceError::Validation(msg))
}
