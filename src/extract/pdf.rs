//! PDF text extraction with a raw-byte fallback.
//!
//! Chain, in order:
//! 1. `pdf-extract` text layer extraction
//! 2. if that yields almost nothing (scanned or malformed PDFs), filter the
//!    raw bytes down to printable ASCII, which at least recovers embedded
//!    metadata and any uncompressed text objects
//!
//! OCR is deliberately not part of this chain; an OCR-backed provider can
//! implement [`TextProvider`] separately.

use tracing::{debug, warn};

use super::{ExtractError, TextProvider};

/// Text-layer output shorter than this (after trim) is considered a failed
/// extraction and triggers the raw-byte fallback.
const MIN_TEXT_LAYER_LEN: usize = 20;

/// PDF provider with text-layer extraction and ASCII-filter fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextProvider;

impl PdfTextProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TextProvider for PdfTextProvider {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut text = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "pdf text layer extraction failed");
                String::new()
            }
        };

        if text.trim().len() < MIN_TEXT_LAYER_LEN {
            debug!(
                text_layer_len = text.trim().len(),
                "text layer too short, falling back to raw-byte filtering"
            );
            text = ascii_filter(bytes);
        }

        Ok(text)
    }
}

/// Keeps printable ASCII, replaces everything else with a space. Runs of
/// replaced bytes become whitespace runs, which the splitter already treats
/// as block boundaries.
fn ascii_filter(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (32..=126).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_filter_replaces_non_printable() {
        let bytes = b"Hello\x00\x01World\xff";
        assert_eq!(ascii_filter(bytes), "Hello  World ");
    }

    #[test]
    fn garbage_bytes_fall_back_without_error() {
        // Not a PDF at all; the provider must still return something.
        let provider = PdfTextProvider::new();
        let text = provider.extract(b"plain bytes that are not a pdf").unwrap();
        assert!(text.contains("plain bytes"));
    }
}
