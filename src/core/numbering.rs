use super::types::Invoice;

/// Prefix shared by every generated invoice number.
pub const NUMBER_PREFIX: &str = "INV";

/// Generate the next invoice number for `year`, formatted
/// `INV-<year>-<4-digit sequence>`.
///
/// The sequence counts existing invoices whose number starts with
/// `INV-<year>`, plus one. The count is a call-time snapshot and is not
/// re-checked at save time, so two drafts created before either is saved
/// can share a number. That matches the single-user contract; callers that
/// need stronger guarantees must renumber before saving.
pub fn generate_invoice_number(existing: &[Invoice], year: i32) -> String {
    let prefix = format!("{NUMBER_PREFIX}-{year}");
    let count = existing
        .iter()
        .filter(|inv| inv.number.starts_with(&prefix))
        .count()
        + 1;
    format!("{prefix}-{count:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Business, Client};
    use chrono::{NaiveDate, Utc};

    fn invoice_numbered(number: &str) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        Invoice {
            id: format!("inv_{number}"),
            number: number.to_string(),
            date,
            due_date: date,
            currency: Default::default(),
            business: Business::default(),
            client: Client::default(),
            items: Vec::new(),
            tax_rate: Default::default(),
            discount: Default::default(),
            advance_payment: Default::default(),
            notes: String::new(),
            template: Default::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(generate_invoice_number(&[], 2025), "INV-2025-0001");
    }

    #[test]
    fn counts_existing_numbers() {
        let existing = vec![
            invoice_numbered("INV-2025-0001"),
            invoice_numbered("INV-2025-0002"),
            invoice_numbered("INV-2025-0003"),
        ];
        assert_eq!(generate_invoice_number(&existing, 2025), "INV-2025-0004");
    }

    #[test]
    fn other_years_do_not_count() {
        let existing = vec![
            invoice_numbered("INV-2024-0001"),
            invoice_numbered("INV-2024-0002"),
            invoice_numbered("INV-2025-0001"),
        ];
        assert_eq!(generate_invoice_number(&existing, 2025), "INV-2025-0002");
    }

    #[test]
    fn zero_padding() {
        assert!(generate_invoice_number(&[], 2025).ends_with("-0001"));

        let existing: Vec<_> = (1..=9)
            .map(|n| invoice_numbered(&format!("INV-2025-{n:04}")))
            .collect();
        assert_eq!(generate_invoice_number(&existing, 2025), "INV-2025-0010");
    }
}
