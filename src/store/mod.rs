//! Invoice persistence against an injected key-value blob store.
//!
//! The backing contract is two string keys holding JSON blobs: one for the
//! whole invoice collection, one for the last-used business profile. The
//! store itself is stateless — the caller owns the current draft and passes
//! it into every operation.
//!
//! Reads are deliberately lenient: a corrupt or unreadable blob degrades to
//! the empty collection (logged, never a crash on the read path). Writes
//! surface their failures with no retry.

mod memory;

pub use memory::MemoryStore;

use chrono::{Datelike, Local, NaiveDate, Utc};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::core::{
    Business, Client, Invoice, InvoiceError, default_due_date, generate_invoice_number,
};

/// Key under which the JSON-serialized invoice collection is stored.
pub const INVOICES_KEY: &str = "invoices";

/// Key under which the JSON-serialized business profile is stored.
pub const BUSINESS_PROFILE_KEY: &str = "businessInfo";

/// String key-value blob store backing the invoice collection.
///
/// Methods take `&self`; implementations use interior mutability or
/// external storage. Any persistence backend with get/set semantics
/// qualifies — browser storage is the original backing, [`MemoryStore`]
/// the in-process reference.
pub trait KeyValueStore {
    /// Retrieve the blob stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, InvoiceError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> Result<(), InvoiceError>;
}

/// Generate a fresh opaque invoice id.
pub fn new_invoice_id() -> String {
    format!("inv_{}", Uuid::new_v4().simple())
}

/// Invoice construction defaults, numbering, and persistence over a
/// [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct InvoiceStore<S> {
    backing: S,
}

impl<S: KeyValueStore> InvoiceStore<S> {
    pub fn new(backing: S) -> Self {
        Self { backing }
    }

    /// Access the backing store.
    pub fn backing(&self) -> &S {
        &self.backing
    }

    /// Build a new draft dated today. Reads the persisted collection (for
    /// numbering) and the business profile; persists nothing.
    pub fn create_draft(&self) -> Invoice {
        self.create_draft_on(Local::now().date_naive())
    }

    /// Build a new draft issued on `today`.
    ///
    /// The invoice number counts the currently persisted collection and is
    /// not re-checked at save time, so two drafts created before either is
    /// saved may share a number.
    pub fn create_draft_on(&self, today: NaiveDate) -> Invoice {
        let existing = self.list_all();
        let now = Utc::now();
        Invoice {
            id: new_invoice_id(),
            number: generate_invoice_number(&existing, today.year()),
            date: today,
            due_date: default_due_date(today),
            currency: Default::default(),
            business: self.business_profile(),
            client: Client::default(),
            items: Vec::new(),
            tax_rate: Default::default(),
            discount: Default::default(),
            advance_payment: Default::default(),
            notes: String::new(),
            template: Default::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Persist an invoice: refresh `updated_at`, replace the record with
    /// the same id in place or append, and overwrite the business profile
    /// with the invoice's sender. Returns the record as saved.
    ///
    /// Validation is the caller's responsibility (see
    /// [`crate::core::ensure_valid`]); the store persists whatever it is
    /// given, always as a whole-record overwrite.
    pub fn save(&self, invoice: &Invoice) -> Result<Invoice, InvoiceError> {
        let mut saved = invoice.clone();
        saved.updated_at = Utc::now();

        let mut collection = self.list_all();
        match collection.iter_mut().find(|inv| inv.id == saved.id) {
            Some(slot) => *slot = saved.clone(),
            None => collection.push(saved.clone()),
        }

        self.write_json(INVOICES_KEY, &collection)?;
        self.write_json(BUSINESS_PROFILE_KEY, &saved.business)?;
        Ok(saved)
    }

    /// Every persisted invoice, in storage order. Callers sort as needed.
    pub fn list_all(&self) -> Vec<Invoice> {
        self.read_json(INVOICES_KEY).unwrap_or_default()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Invoice> {
        self.list_all().into_iter().find(|inv| inv.id == id)
    }

    /// Remove the record with matching id. A missing id is a no-op, not an
    /// error.
    pub fn delete_by_id(&self, id: &str) -> Result<(), InvoiceError> {
        let mut collection = self.list_all();
        collection.retain(|inv| inv.id != id);
        self.write_json(INVOICES_KEY, &collection)
    }

    /// The last-used business profile, falling back to the built-in default
    /// when none is persisted (or the stored blob is unreadable).
    pub fn business_profile(&self) -> Business {
        self.read_json(BUSINESS_PROFILE_KEY)
            .unwrap_or_else(default_business_profile)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backing.get(key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("read of '{key}' failed, treating as absent: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("stored blob '{key}' is corrupt, treating as absent: {err}");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), InvoiceError> {
        let raw = serde_json::to_string(value).map_err(|err| {
            InvoiceError::Storage(format!("failed to serialize '{key}': {err}"))
        })?;
        self.backing.set(key, &raw)
    }
}

/// Built-in sender identity used when no business profile is persisted.
pub fn default_business_profile() -> Business {
    Business {
        name: "SK Constructions and Engineering Solutions".into(),
        email: String::new(),
        phone: "7377377757".into(),
        address: "NH-66, Majali, Karnataka 581345".into(),
    }
}
