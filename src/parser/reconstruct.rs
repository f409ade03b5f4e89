//! Session reconstruction state machine.
//!
//! Consumes candidate blocks in document order and turns them into
//! [`SessionRecord`]s. The machine keeps a small rolling state (sticky time,
//! sticky place, a seen-block set for exact-duplicate suppression) and applies
//! a fixed classification order per block:
//!
//! 1. Skip empty and verbatim-duplicate blocks
//! 2. Pure time token: update sticky time, consume the block
//! 3. Venue keyword hit: update sticky place, do NOT consume
//! 4. Title shape: the whole block becomes the title candidate
//! 5. Emit a record when a title was found or either sticky field is set;
//!    otherwise drop the block silently
//!
//! Every operation here is total: nothing raises, and the only caller-visible
//! "failure" is an empty output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::SessionRecord;
use super::splitter::{split_blocks, SplitMode};
use super::state::ParseState;
use super::time::{find_time_in_block, starts_with_time};
use crate::lang::LanguageDetector;

/// Uppercase start followed by letters, spaces, comma, ampersand, hyphen, colon.
static TITLE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z ,&:-]+").expect("title shape pattern"));

/// Venue keywords used when no configuration overrides them.
pub const DEFAULT_VENUE_KEYWORDS: &[&str] = &[
    "room",
    "hall",
    "stage",
    "theater",
    "theatre",
    "ballroom",
    "auditorium",
    "pavilion",
];

/// How blocks are tested for time tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimeMode {
    /// The block must start with `H:MM`; the whole block then becomes the
    /// sticky time. Strict, for column layouts.
    #[default]
    Leading,
    /// Scan the whole block for a range or single time. The block is consumed
    /// only when the match covers it entirely.
    Scan,
}

/// Parser configuration: split mode, time mode, venue keyword set.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub split_mode: SplitMode,
    pub time_mode: TimeMode,
    /// Substrings that classify a block as naming a place. Matched
    /// case-insensitively; any casing is accepted here.
    pub venue_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::default(),
            time_mode: TimeMode::default(),
            venue_keywords: DEFAULT_VENUE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Counters from one reconstruction pass. The core never logs these per-block
/// decisions above debug level; callers surface the aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_blocks: usize,
    pub duplicate_blocks: usize,
    pub time_blocks: usize,
    pub dropped_blocks: usize,
}

/// Records plus pass counters.
#[derive(Debug)]
pub struct ParseOutcome {
    pub records: Vec<SessionRecord>,
    pub stats: ParseStats,
}

/// The reconstruction pass. Holds configuration and the injected language
/// detector; all per-document state lives in a fresh [`ParseState`] per call,
/// so one reconstructor can parse any number of documents.
pub struct SessionReconstructor<'a> {
    config: ParserConfig,
    detector: &'a dyn LanguageDetector,
}

impl<'a> SessionReconstructor<'a> {
    pub fn new(mut config: ParserConfig, detector: &'a dyn LanguageDetector) -> Self {
        // Venue matching is case-insensitive; normalize user-supplied
        // keywords once instead of per block.
        for kw in &mut config.venue_keywords {
            *kw = kw.to_lowercase();
        }
        Self { config, detector }
    }

    /// Runs the full pass: split, classify, emit. Pure function of the input
    /// text and the configuration; parsing the same text twice yields
    /// identical output.
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let blocks = split_blocks(text, self.config.split_mode);
        let mut state = ParseState::new();
        let mut records = Vec::new();
        let mut stats = ParseStats {
            total_blocks: blocks.len(),
            ..ParseStats::default()
        };

        for block in &blocks {
            if state.check_and_mark_seen(block) {
                stats.duplicate_blocks += 1;
                debug!(block = %block, "duplicate block suppressed");
                continue;
            }

            if self.consume_as_time(block, &mut state) {
                stats.time_blocks += 1;
                continue;
            }

            if let Some(place) = self.classify_place(block) {
                state.current_place = place;
            }

            let title = self.classify_title(block);

            if title.is_empty() && state.current_time.is_empty() && state.current_place.is_empty() {
                stats.dropped_blocks += 1;
                debug!(block = %block, "block matched no feature, dropped");
                continue;
            }

            let text = if title.is_empty() {
                block.clone()
            } else {
                title.clone()
            };
            let language = self.detector.detect(&text);
            records.push(SessionRecord {
                time: state.current_time.clone(),
                place: state.current_place.clone(),
                title,
                text,
                language,
            });
        }

        ParseOutcome { records, stats }
    }

    /// Applies the configured time check. Returns true when the block was a
    /// pure time token and must not be classified further.
    fn consume_as_time(&self, block: &str, state: &mut ParseState) -> bool {
        match self.config.time_mode {
            TimeMode::Leading => {
                if starts_with_time(block) {
                    state.current_time = block.to_string();
                    return true;
                }
                false
            }
            TimeMode::Scan => {
                let found = find_time_in_block(block);
                if found.is_empty() {
                    return false;
                }
                let consumed = found == block;
                state.current_time = found;
                consumed
            }
        }
    }

    /// Case-insensitive venue keyword substring check.
    fn classify_place(&self, block: &str) -> Option<String> {
        let lowered = block.to_lowercase();
        if self
            .config
            .venue_keywords
            .iter()
            .any(|kw| lowered.contains(kw.as_str()))
        {
            Some(block.to_string())
        } else {
            None
        }
    }

    /// Title-shape check; the entire block is the candidate, or empty.
    fn classify_title(&self, block: &str) -> String {
        if TITLE_SHAPE.is_match(block) {
            block.to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::FixedLanguage;

    fn parse(text: &str) -> ParseOutcome {
        let detector = FixedLanguage::english();
        SessionReconstructor::new(ParserConfig::default(), &detector).parse(text)
    }

    #[test]
    fn time_block_is_sticky_across_records() {
        let outcome = parse("10:00\n\nTitle A\n\nTitle B");
        let records = &outcome.records;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, "10:00");
        assert_eq!(records[1].time, "10:00");
        assert_eq!(records[0].title, "Title A");
        assert_eq!(records[1].title, "Title B");
    }

    #[test]
    fn time_block_never_becomes_a_record() {
        let outcome = parse("09:30\n\nOpening Remarks");
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.records.iter().all(|r| r.text != "09:30"));
        assert_eq!(outcome.stats.time_blocks, 1);
    }

    #[test]
    fn venue_updates_place_without_consuming() {
        let outcome = parse("Omega Room\n\nKeynote Talk");
        let last = outcome.records.last().unwrap();
        assert_eq!(last.place, "Omega Room");
        assert_eq!(last.title, "Keynote Talk");
    }

    #[test]
    fn venue_block_matching_title_shape_also_emits() {
        // "Omega Room" has a title shape, so it produces its own record too.
        let outcome = parse("Omega Room\n\nKeynote Talk");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].title, "Omega Room");
    }

    #[test]
    fn duplicate_blocks_contribute_once() {
        let text = "10:00\n\nKeynote: AI Trends\n\n10:00\n\nKeynote: AI Trends";
        let outcome = parse(text);
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.time, "10:00");
        assert_eq!(record.title, "Keynote: AI Trends");
        assert_eq!(record.place, "");
        assert_eq!(record.language, "en");
        assert_eq!(outcome.stats.duplicate_blocks, 2);
    }

    #[test]
    fn unclassifiable_block_is_dropped_silently() {
        let outcome = parse("---///---");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats.dropped_blocks, 1);
    }

    #[test]
    fn lowercase_fragment_rides_on_sticky_time() {
        // Once a time is set, even a non-title fragment emits with it as body.
        let outcome = parse("10:00\n\nlunch buffet");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "");
        assert_eq!(outcome.records[0].text, "lunch buffet");
        assert_eq!(outcome.records[0].time, "10:00");
    }

    #[test]
    fn empty_document_yields_no_records() {
        let outcome = parse("   \n\n  ");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats.total_blocks, 0);
    }

    #[test]
    fn parse_is_idempotent() {
        let text = "10:00\n\nHall B\n\nPanel: Future of Flight";
        let first = parse(text);
        let second = parse(text);
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn records_preserve_block_order() {
        let outcome = parse("Alpha Session\n\nBeta Session\n\nGamma Session");
        // No sticky fields ever set; all three are pure title records.
        let titles: Vec<_> = outcome.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Session", "Beta Session", "Gamma Session"]);
    }

    #[test]
    fn scan_mode_picks_time_out_of_prose() {
        let config = ParserConfig {
            time_mode: TimeMode::Scan,
            ..ParserConfig::default()
        };
        let detector = FixedLanguage::english();
        let outcome = SessionReconstructor::new(config, &detector)
            .parse("Session runs 09:00 - 10:30 in the Main Hall");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].time, "09:00 - 10:30");
        // The block itself was not a pure time token, so it still emitted.
        assert_eq!(outcome.stats.time_blocks, 0);
    }

    #[test]
    fn scan_mode_consumes_pure_time_range_block() {
        let config = ParserConfig {
            time_mode: TimeMode::Scan,
            split_mode: SplitMode::BlankLine,
            ..ParserConfig::default()
        };
        let detector = FixedLanguage::english();
        let outcome =
            SessionReconstructor::new(config, &detector).parse("09:00 - 10:30\n\nWorkshop Intro");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].time, "09:00 - 10:30");
        assert_eq!(outcome.records[0].title, "Workshop Intro");
        assert_eq!(outcome.stats.time_blocks, 1);
    }

    #[test]
    fn venue_keywords_match_case_insensitively() {
        // Configured keywords may arrive in any casing.
        let config = ParserConfig {
            venue_keywords: vec!["Room".to_string()],
            ..ParserConfig::default()
        };
        let detector = FixedLanguage::english();
        let outcome =
            SessionReconstructor::new(config, &detector).parse("Omega room\n\nKeynote Talk");
        let last = outcome.records.last().unwrap();
        assert_eq!(last.place, "Omega room");
        assert_eq!(last.title, "Keynote Talk");
    }

    #[test]
    fn custom_venue_keywords_apply() {
        let config = ParserConfig {
            venue_keywords: vec!["deck".to_string()],
            ..ParserConfig::default()
        };
        let detector = FixedLanguage::english();
        let outcome =
            SessionReconstructor::new(config, &detector).parse("Observation Deck\n\nClosing Notes");
        assert_eq!(outcome.records.last().unwrap().place, "Observation Deck");
    }
}
