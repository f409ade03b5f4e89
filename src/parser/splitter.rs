//! Candidate block splitting.
//!
//! PDF text extractors preserve layout gaps as runs of whitespace: a visual
//! column or paragraph break typically survives as two-or-more consecutive
//! whitespace characters. Splitting on those runs yields the candidate blocks
//! the reconstructor classifies. No semantic validation happens here; a block
//! that turns out to be noise is the reconstructor's problem.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace run pattern"));

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("blank line run pattern"));

/// How the raw document text is cut into candidate blocks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    /// Split on runs of two-or-more whitespace characters (column-aware).
    #[default]
    WhitespaceRun,
    /// Split only on blank lines (paragraph-style layouts).
    BlankLine,
}

/// Splits extracted text into trimmed, non-empty candidate blocks, in order.
///
/// A document with no qualifying separator comes back as a single block (or
/// none, when the whole input is whitespace).
pub fn split_blocks(text: &str, mode: SplitMode) -> Vec<String> {
    let pattern: &Regex = match mode {
        SplitMode::WhitespaceRun => &WHITESPACE_RUN,
        SplitMode::BlankLine => &BLANK_LINE_RUN,
    };
    pattern
        .split(text)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines_in_both_modes() {
        let text = "10:00\n\nKeynote\n\nHall A";
        let expected = vec!["10:00", "Keynote", "Hall A"];
        assert_eq!(split_blocks(text, SplitMode::WhitespaceRun), expected);
        assert_eq!(split_blocks(text, SplitMode::BlankLine), expected);
    }

    #[test]
    fn whitespace_run_splits_column_gaps() {
        let text = "10:00  Keynote: AI Trends   Hall A";
        assert_eq!(
            split_blocks(text, SplitMode::WhitespaceRun),
            vec!["10:00", "Keynote: AI Trends", "Hall A"]
        );
    }

    #[test]
    fn blank_line_mode_keeps_column_gaps_intact() {
        let text = "10:00  Keynote";
        assert_eq!(split_blocks(text, SplitMode::BlankLine), vec!["10:00  Keynote"]);
    }

    #[test]
    fn unbroken_text_is_one_block() {
        assert_eq!(
            split_blocks("one long line", SplitMode::WhitespaceRun),
            vec!["one long line"]
        );
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(split_blocks("   \n\n \t ", SplitMode::WhitespaceRun).is_empty());
        assert!(split_blocks("", SplitMode::BlankLine).is_empty());
    }
}
