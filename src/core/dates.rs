//! Date defaults and display formatting.

use chrono::{Duration, NaiveDate};

/// Payment window applied to new drafts.
pub const DEFAULT_PAYMENT_WINDOW_DAYS: i64 = 30;

/// Default due date for an invoice issued on `date`.
pub fn default_due_date(date: NaiveDate) -> NaiveDate {
    date + Duration::days(DEFAULT_PAYMENT_WINDOW_DAYS)
}

/// Long-form display date, e.g. "January 5, 2025".
///
/// Display only — never used for storage or comparison.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
