//! Language detection capability.
//!
//! Detection is a best-effort hint used only for labeling records; it must
//! never fail the pipeline. The trait is injected into the reconstructor at
//! construction time so tests (and callers that don't care) can swap in a
//! fixed-answer detector.

use tracing::debug;

/// Fallback code used whenever detection cannot produce an answer.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Best-effort language detection. Infallible by contract: implementations
/// return a default code instead of erroring.
pub trait LanguageDetector {
    /// Returns an ISO 639-1 language code for the text, `"en"` on failure.
    fn detect(&self, text: &str) -> String;
}

/// Statistical detection backed by whatlang.
///
/// Short fragments (a bare title, a room name) are often ambiguous; whatlang
/// returns `None` for those and we fall back to the default code rather than
/// guessing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return DEFAULT_LANGUAGE.to_string();
        }
        // whatlang reports ISO 639-3 codes ("eng", "kor"); the default stays
        // the short "en" since that is what downstream labels key on.
        match whatlang::detect_lang(trimmed) {
            Some(lang) => lang.code().to_string(),
            None => {
                debug!(sample = %truncate(trimmed, 40), "language detection inconclusive");
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }
}

/// Always answers with one fixed code. Used in tests and as the no-op default
/// when detection is disabled.
#[derive(Debug, Clone)]
pub struct FixedLanguage(pub String);

impl FixedLanguage {
    pub fn english() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> String {
        self.0.clone()
    }
}

/// Display label for a detected code: English passes through, anything else
/// gets a warning label so it stands out in the table.
pub fn language_label(code: &str) -> String {
    if code.starts_with("en") {
        "EN".to_string()
    } else {
        format!("not English ({code})")
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_defaults_to_english() {
        assert_eq!(WhatlangDetector::new().detect("   "), "en");
    }

    #[test]
    fn fixed_detector_ignores_input() {
        let detector = FixedLanguage("ko".to_string());
        assert_eq!(detector.detect("anything at all"), "ko");
    }

    #[test]
    fn label_flags_non_english() {
        assert_eq!(language_label("en"), "EN");
        assert_eq!(language_label("ko"), "not English (ko)");
    }
}
