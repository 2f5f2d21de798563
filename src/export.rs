//! Render and export collaborator contracts.
//!
//! The core never assembles layout itself: it hands an invoice and its
//! template tag to a [`DocumentRenderer`] and the rendered bytes to an
//! [`ExportSink`] (file download, print surface). This module also enforces
//! the export discipline: validation runs first, at most one export is in
//! flight per invoice id, and the in-flight reservation is released on
//! success and failure alike. Exports for different invoices interleave
//! freely. There is no cancellation and no timeout at this layer — once
//! started, an export runs to completion or propagated failure.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::core::{Invoice, InvoiceError, Template, ensure_valid};

/// Produces a rendered document from invoice data and a template tag.
///
/// Layout, styling, and rasterization are entirely the implementor's
/// concern; the core only supplies data.
pub trait DocumentRenderer {
    fn render(&self, invoice: &Invoice, template: Template) -> Result<Vec<u8>, InvoiceError>;
}

/// Delivers a rendered document to its destination (download, printer).
pub trait ExportSink {
    fn deliver(&self, document: &RenderedDocument) -> Result<(), InvoiceError>;
}

/// A rendered document ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// `<invoiceNumber>.pdf`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// File name under which an invoice is exported.
pub fn export_file_name(invoice: &Invoice) -> String {
    format!("{}.pdf", invoice.number)
}

/// Coordinates exports, holding the set of invoice ids currently in flight.
#[derive(Debug, Default)]
pub struct ExportManager {
    in_flight: Mutex<HashSet<String>>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, render, and deliver an invoice.
    ///
    /// Fails with [`InvoiceError::ExportInFlight`] when an export for the
    /// same invoice id has started and not yet finished; renderer and sink
    /// failures propagate as-is. The in-flight reservation is dropped on
    /// every exit path.
    pub fn export<R, S>(
        &self,
        invoice: &Invoice,
        renderer: &R,
        sink: &S,
    ) -> Result<RenderedDocument, InvoiceError>
    where
        R: DocumentRenderer,
        S: ExportSink,
    {
        ensure_valid(invoice)?;
        let _guard = self.reserve(&invoice.id)?;

        let bytes = renderer.render(invoice, invoice.template)?;
        let document = RenderedDocument {
            file_name: export_file_name(invoice),
            bytes,
        };
        sink.deliver(&document)?;
        Ok(document)
    }

    /// Whether an export for `id` is currently in flight.
    pub fn is_in_flight(&self, id: &str) -> bool {
        self.lock_in_flight().contains(id)
    }

    fn reserve(&self, id: &str) -> Result<InFlightGuard<'_>, InvoiceError> {
        let mut in_flight = self.lock_in_flight();
        if !in_flight.insert(id.to_string()) {
            return Err(InvoiceError::ExportInFlight(id.to_string()));
        }
        Ok(InFlightGuard {
            manager: self,
            id: id.to_string(),
        })
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the in-flight reservation when dropped, on any exit path.
struct InFlightGuard<'a> {
    manager: &'a ExportManager,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.manager.lock_in_flight().remove(&self.id);
    }
}
