//! # quickbill
//!
//! Invoice drafting core: the canonical invoice record shape, derived-total
//! arithmetic, sequential numbering, and a persistence contract against an
//! injected key-value blob store.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The crate owns only plain data; form binding, template layout, and PDF
//! rasterization are external collaborators that read from and write into
//! these types (see [`export`] for the contracts they implement).
//!
//! ## Quick Start
//!
//! ```rust
//! use quickbill::core::*;
//! use quickbill::store::{InvoiceStore, MemoryStore};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let store = InvoiceStore::new(MemoryStore::default());
//!
//! let mut invoice = store.create_draft_on(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
//! invoice.business.email = "billing@example.com".into();
//! invoice.client.name = "Widget Co".into();
//! invoice.items.push(LineItem::new("Widget", dec!(2), dec!(9.99)));
//! invoice.tax_rate = dec!(10);
//!
//! let totals = compute_totals(&invoice);
//! assert_eq!(totals.subtotal, dec!(19.98));
//! assert_eq!(totals.total, dec!(21.978));
//!
//! assert!(ensure_valid(&invoice).is_ok());
//! let saved = store.save(&invoice).unwrap();
//! assert_eq!(store.find_by_id(&saved.id).unwrap().number, saved.number);
//! ```

pub mod core;
pub mod export;
pub mod store;

// Re-export core types at crate root for convenience
pub use crate::core::*;
