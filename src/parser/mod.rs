//! Session listing reconstruction from extracted document text.
//!
//! This is the algorithmic heart of confsift. Extracted PDF text arrives as
//! one noisy string; this module cuts it into candidate blocks and runs a
//! single-pass state machine over them to rebuild discrete session entries
//! with a time, place, title, and body.
//!
//! # Module structure
//!
//! - [`splitter`] - whitespace-run / blank-line block splitting
//! - [`time`] - time token recognition (leading-anchor and scan modes)
//! - [`state`] - rolling per-pass parse state
//! - [`reconstruct`] - the classification state machine
//! - [`record`] - the emitted [`SessionRecord`] type

mod reconstruct;
mod record;
mod splitter;
mod state;
mod time;

pub use record::SessionRecord;
pub use reconstruct::{
    ParseOutcome, ParseStats, ParserConfig, SessionReconstructor, TimeMode, DEFAULT_VENUE_KEYWORDS,
};
pub use splitter::{split_blocks, SplitMode};
pub use time::find_time_in_block;
