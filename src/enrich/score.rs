//! Keyword scoring and priority ranking.

use serde::{Deserialize, Serialize};

use crate::parser::SessionRecord;

/// Priority label derived from keyword hits: 0 hits → Low, 1 → Medium,
/// 2 or more → High.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_hits(hits: usize) -> Self {
        match hits {
            0 => Priority::Low,
            1 => Priority::Medium,
            _ => Priority::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a user-supplied comma-separated keyword list: entries trimmed,
/// lower-cased, empties dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Counts how many distinct keywords occur (case-insensitive substring) in
/// the record's title + text.
pub fn keyword_hits(record: &SessionRecord, keywords: &[String]) -> usize {
    let haystack = record.haystack().to_lowercase();
    keywords.iter().filter(|kw| haystack.contains(kw.as_str())).count()
}
