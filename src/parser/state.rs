//! Rolling parse state for a single reconstruction pass.

use std::collections::HashSet;

/// Mutable state threaded through one pass over a document's blocks.
///
/// Created fresh per parse and discarded afterwards; nothing here survives
/// between documents. The sticky fields implement last-write-wins: once a time
/// or place is observed it attaches to every subsequent record until a later
/// block overwrites it.
#[derive(Debug, Default)]
pub struct ParseState {
    /// Most recently observed time token; empty until one is seen.
    pub current_time: String,
    /// Most recently observed place; empty until one is seen.
    pub current_place: String,
    /// Verbatim blocks already encountered in this document.
    seen_blocks: HashSet<String>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the block as seen and reports whether it was already present.
    ///
    /// Exact string membership only; near-duplicates pass through.
    pub fn check_and_mark_seen(&mut self, block: &str) -> bool {
        !self.seen_blocks.insert(block.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_is_not_a_duplicate() {
        let mut state = ParseState::new();
        assert!(!state.check_and_mark_seen("Keynote"));
        assert!(state.check_and_mark_seen("Keynote"));
    }

    #[test]
    fn near_duplicates_are_distinct() {
        let mut state = ParseState::new();
        assert!(!state.check_and_mark_seen("Keynote"));
        assert!(!state.check_and_mark_seen("Keynote "));
    }
}
