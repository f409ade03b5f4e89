//! Output record type for reconstructed sessions.

use serde::{Deserialize, Serialize};

/// A single reconstructed session entry.
///
/// Immutable once emitted by the reconstructor: enrichment and export read
/// these values but never write them back. All fields may be empty strings
/// when the source document did not yield the corresponding feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Last-known sticky time at emission (e.g. `"10:00"` or `"09:00 - 10:30"`).
    pub time: String,
    /// Last-known sticky place at emission (e.g. `"Hall A"`).
    pub place: String,
    /// Recognized title, or empty when the block had no title shape.
    pub title: String,
    /// The title if present, else the raw block text.
    pub text: String,
    /// Detected language code (`"en"`, `"ko"`, ...); `"en"` on detection failure.
    pub language: String,
}

impl SessionRecord {
    /// The body used for keyword matching and summarization: title plus text.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}
