//! Downstream enrichment of reconstructed records.
//!
//! Runs strictly after the parse pass: keyword scoring, priority ranking,
//! language labeling, and summarization. Nothing here mutates the emitted
//! [`SessionRecord`]s; enrichment wraps them.

mod score;
mod summary;

use serde::Serialize;

use crate::lang::language_label;
use crate::parser::SessionRecord;

pub use score::{keyword_hits, parse_keywords, Priority};
pub use summary::{CommandSummarizer, ExtractiveSummary, Summarizer, DEFAULT_SUMMARY_WORDS};

/// A session record plus its derived presentation fields.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: SessionRecord,
    pub summary: String,
    pub language_label: String,
    pub keyword_hits: usize,
    pub priority: Priority,
}

/// Enriches records in order. `summarize_full_text` controls whether the
/// summarizer sees title plus body (useful for external summarizers) or just
/// the title line (the cheap default).
pub fn enrich_records(
    records: Vec<SessionRecord>,
    keywords: &[String],
    summarizer: &dyn Summarizer,
    summarize_full_text: bool,
) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| {
            let hits = keyword_hits(&record, keywords);
            let summary_input = if summarize_full_text {
                format!("{}\n{}", record.title, record.text)
            } else if record.title.is_empty() {
                record.text.clone()
            } else {
                record.title.clone()
            };
            EnrichedRecord {
                summary: summarizer.summarize(&summary_input),
                language_label: language_label(&record.language),
                keyword_hits: hits,
                priority: Priority::from_hits(hits),
                record,
            }
        })
        .collect()
}
