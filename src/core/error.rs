use thiserror::Error;

/// Errors that can occur while working with invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backing blob store rejected a read or write, or a record could
    /// not be serialized for storage.
    #[error("storage error: {0}")]
    Storage(String),

    /// The external rendering or export collaborator failed.
    #[error("render error: {0}")]
    Render(String),

    /// An export for this invoice is already in flight.
    #[error("export already in progress for invoice {0}")]
    ExportInFlight(String),
}

/// A single validation failure with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "business.email").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
