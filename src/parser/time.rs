//! Time token recognition.
//!
//! Program layouts are inconsistent about where times appear: some put a bare
//! `10:00` in its own column (which the extractor hands us as its own block),
//! others bury a `09:00 - 10:30` range inside a session description. Two
//! recognition modes cover both:
//!
//! - **Leading**: the block must *start* with a time shape to count as a time
//!   token. Strict, suited to column layouts.
//! - **Scan**: search the whole block for a range first, then a single time.
//!   Lenient, suited to prose layouts.

use once_cell::sync::Lazy;
use regex::Regex;

/// `H:MM` / `HH:MM` / `H.MM` anchored at the start of the block.
static LEADING_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[:.]\d{2}").expect("leading time pattern"));

/// A time range like `09:00 - 10:30`, separator dash (ASCII or typographic) or tilde.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}[:.]\d{2}\b\s*[-\u{2013}\u{2014}~]\s*\b\d{1,2}[:.]\d{2}\b")
        .expect("time range pattern")
});

/// A single `H:MM`-shaped token anywhere in the block.
static SINGLE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[:.]\d{2}\b").expect("single time pattern"));

/// Returns true when the block begins with a time shape.
///
/// Used by the leading-anchor mode to decide that the entire block is a pure
/// time token (the block is consumed, never becoming a title or place).
pub fn starts_with_time(block: &str) -> bool {
    LEADING_TIME.is_match(block)
}

/// Scans a block for the most specific time it contains.
///
/// Prefers a full range (returned verbatim, separator included) over a single
/// token. Returns an empty string when the block holds no time shape at all.
pub fn find_time_in_block(block: &str) -> String {
    if let Some(m) = TIME_RANGE.find(block) {
        return m.as_str().to_string();
    }
    match SINGLE_TIME.find(block) {
        Some(m) => m.as_str().to_string(),
        None => String::new(),
    }
}
