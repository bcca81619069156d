//! Advisory reporting for unsuccessful responses.

use tracing::warn;

/// Receives advisory messages about non-200 responses.
///
/// Reporting never affects the response returned to the caller.
pub trait Diagnostics: Send + Sync {
    /// Called once for each response whose status is not 200.
    ///
    /// `endpoint` is the request path (e.g., "/filing") and `subject` the
    /// identifier that was asked for: the accession number for filings, the
    /// CIK for facts and tags.
    fn request_failed(&self, endpoint: &str, subject: &str, status: u16, message: &str);
}

/// Emits a `tracing` warning for each failed request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn request_failed(&self, endpoint: &str, subject: &str, status: u16, message: &str) {
        warn!(endpoint, subject, status, "Error {}: {}", status, message);
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn request_failed(&self, _endpoint: &str, _subject: &str, _status: u16, _message: &str) {}
}
