//! Default output filename derivation.
//!
//! When the user gives no `--output` path, the export filename is built from
//! the sanitized document stem plus the current date, e.g.
//! `dsei-program-sessions-2026-08-27.csv`.

use std::path::Path;

use chrono::Local;
use deunicode::deunicode;

/// Fallback stem when sanitization eats the whole name.
const FALLBACK_STEM: &str = "sessions";

/// Characters stripped from stems (filesystem-hostile on some platform).
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Builds the default output filename for a source document and extension.
pub fn default_output_name(source: &Path, extension: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(FALLBACK_STEM);
    let date = Local::now().format("%Y-%m-%d");
    format!("{}-sessions-{}.{}", sanitize_stem(stem), date, extension)
}

/// ASCII-transliterates and lowercases a stem, replacing whitespace with
/// hyphens and dropping filesystem-hostile characters.
fn sanitize_stem(stem: &str) -> String {
    let ascii = deunicode(stem).to_lowercase();
    let mut out = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen && !out.is_empty() {
                out.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else {
            out.push(c);
            last_was_hyphen = false;
        }
    }
    let trimmed = out.trim_matches(&['-', '.'][..]).to_string();
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed
    }
}
