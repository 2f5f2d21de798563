use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::template::Template;

/// Invoice — the top-level record and sole persisted entity.
///
/// Serialized field names match the stored blob format (`invoiceNumber`,
/// `dueDate`, `taxRate`, …). Numeric fields absent from a stored record
/// read as zero rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Opaque unique id, generated at creation, immutable for the record's
    /// lifetime. Used as the persistence key.
    pub id: String,
    /// Human-facing invoice number, `INV-<year>-<4-digit sequence>`.
    #[serde(rename = "invoiceNumber")]
    pub number: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date. Defaults to `date + 30 days` on draft creation.
    pub due_date: NaiveDate,
    #[serde(default)]
    pub currency: Currency,
    /// Sender identity. New drafts inherit the persisted business profile.
    pub business: Business,
    pub client: Client,
    /// Line items in display order; order survives load/save round-trips.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Tax percentage, ≥ 0 and not necessarily ≤ 100.
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Flat amount subtracted after tax.
    #[serde(default)]
    pub discount: Decimal,
    /// Flat amount subtracted after the discount.
    #[serde(default)]
    pub advance_payment: Decimal,
    /// Free text; newlines become line breaks on render.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub template: Template,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save.
    pub updated_at: DateTime<Utc>,
}

/// Sender identity. Doubles as the persisted "last used business profile"
/// that new drafts inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Recipient identity. Unlike [`Business`], no default is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// One billable entry: description × quantity × rate.
///
/// The line amount is derived, never stored: [`LineItem::amount`] always
/// reflects the current quantity and rate. The serialized form carries an
/// `amount` field for blob compatibility, but it is discarded on load and
/// recomputed, so a stale value cannot survive a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineItemRecord", into = "LineItemRecord")]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub rate: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
        }
    }

    /// Derived line amount, `quantity * rate`.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }
}

/// Wire shape of a line item in the stored blob.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    description: String,
    #[serde(default)]
    quantity: Decimal,
    #[serde(default)]
    rate: Decimal,
    /// Present in stored records; ignored on load in favor of recomputation.
    #[serde(default)]
    amount: Decimal,
}

impl From<LineItemRecord> for LineItem {
    fn from(record: LineItemRecord) -> Self {
        Self {
            description: record.description,
            quantity: record.quantity,
            rate: record.rate,
        }
    }
}

impl From<LineItem> for LineItemRecord {
    fn from(item: LineItem) -> Self {
        let amount = item.amount();
        Self {
            description: item.description,
            quantity: item.quantity,
            rate: item.rate,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_tracks_edits() {
        let mut item = LineItem::new("Consulting", dec!(2), dec!(150));
        assert_eq!(item.amount(), dec!(300));

        item.quantity = dec!(3);
        assert_eq!(item.amount(), dec!(450));

        item.rate = dec!(100.50);
        assert_eq!(item.amount(), dec!(301.50));
    }

    #[test]
    fn stale_stored_amount_is_discarded() {
        let json = r#"{"description":"Widget","quantity":"2","rate":"9.99","amount":"999"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount(), dec!(19.98));
    }

    #[test]
    fn record_without_amount_loads() {
        let json = r#"{"description":"Widget","quantity":"1","rate":"5"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount(), dec!(5));
    }
}
