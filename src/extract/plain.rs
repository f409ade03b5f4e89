//! Plain text passthrough provider.

use super::{ExtractError, TextProvider};

/// Treats the document bytes as UTF-8 text (lossy). Used for company-name
/// lists and any other non-PDF input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextProvider;

impl TextProvider for PlainTextProvider {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
