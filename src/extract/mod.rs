//! Document-to-text extraction.
//!
//! The parser consumes one plain string; how that string is obtained is an
//! injectable capability. The PDF provider runs a best-effort fallback chain
//! (text layer, then raw-byte ASCII filtering) and treats "nothing found" as
//! an empty string rather than an error, so the caller can surface a
//! no-sessions message instead of failing.

mod pdf;
mod plain;

use std::path::Path;

pub use pdf::PdfTextProvider;
pub use plain::PlainTextProvider;

/// Errors from text extraction. Providers keep these rare on purpose: a
/// degraded-but-nonempty result beats an error for this pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read document: {0}")]
    Read(#[from] std::io::Error),
}

/// A source of extracted document text.
pub trait TextProvider {
    /// Human-readable provider name, for logs.
    fn name(&self) -> &'static str;

    /// Extracts text from raw document bytes. Best-effort: an empty string
    /// means "no text found", not a failure.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Picks a provider from the file extension: PDFs get the fallback-chain PDF
/// provider, everything else is treated as plain text (e.g. a company-name
/// list).
pub fn provider_for_path(path: &Path) -> Box<dyn TextProvider> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        Box::new(PdfTextProvider::new())
    } else {
        Box::new(PlainTextProvider)
    }
}
