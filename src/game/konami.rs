//! Konami-code input sequence matcher
//!
//! A small state machine that watches raw key tokens for the classic
//! up-up-down-down sequence. The matcher only reports progress; what a
//! full match triggers is the caller's business.

/// The sequence that unlocks the bug-squash game.
///
/// Matched exactly, in order, case-sensitive for the letter keys.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Outcome of feeding one token to the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Token matched; sequence not yet complete
    Progressing,
    /// Token completed the sequence (cursor has reset)
    Matched,
    /// Token broke the sequence (cursor has reset)
    Reset,
}

/// Stateful matcher for one fixed key sequence
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    sequence: &'static [&'static str],
    cursor: usize,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::konami()
    }
}

impl SequenceMatcher {
    /// Matcher for [`KONAMI_SEQUENCE`]
    pub fn konami() -> Self {
        Self {
            sequence: &KONAMI_SEQUENCE,
            cursor: 0,
        }
    }

    /// Feed one key token.
    ///
    /// A mismatch resets the cursor unconditionally; the mismatched token is
    /// not re-checked against the start of the sequence in the same call.
    pub fn feed(&mut self, token: &str) -> MatchResult {
        if token == self.sequence[self.cursor] {
            self.cursor += 1;
            if self.cursor == self.sequence.len() {
                self.cursor = 0;
                MatchResult::Matched
            } else {
                MatchResult::Progressing
            }
        } else {
            self.cursor = 0;
            MatchResult::Reset
        }
    }

    /// Current position within the sequence (0 = nothing matched yet)
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence_matches_on_tenth_token() {
        let mut matcher = SequenceMatcher::konami();
        for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
            let result = matcher.feed(key);
            if i == KONAMI_SEQUENCE.len() - 1 {
                assert_eq!(result, MatchResult::Matched);
            } else {
                assert_eq!(result, MatchResult::Progressing, "prefix token {}", i);
            }
        }
        // Cursor resets after a match, ready for another run
        assert_eq!(matcher.cursor(), 0);
    }

    #[test]
    fn test_mismatch_resets_then_fresh_run_matches() {
        let mut matcher = SequenceMatcher::konami();
        for key in &KONAMI_SEQUENCE[..4] {
            matcher.feed(key);
        }
        assert_eq!(matcher.feed("x"), MatchResult::Reset);
        assert_eq!(matcher.cursor(), 0);

        for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
            let result = matcher.feed(key);
            if i == KONAMI_SEQUENCE.len() - 1 {
                assert_eq!(result, MatchResult::Matched);
            }
        }
    }

    #[test]
    fn test_mismatch_is_not_rechecked_against_start() {
        let mut matcher = SequenceMatcher::konami();
        matcher.feed("ArrowUp");
        matcher.feed("ArrowUp");
        // Expected token is ArrowDown; a third ArrowUp equals the sequence
        // start but the matcher resets without consuming it
        assert_eq!(matcher.feed("ArrowUp"), MatchResult::Reset);
        assert_eq!(matcher.cursor(), 0);
    }

    #[test]
    fn test_unknown_token_is_a_reset_not_an_error() {
        let mut matcher = SequenceMatcher::konami();
        assert_eq!(matcher.feed("F13"), MatchResult::Reset);
        assert_eq!(matcher.feed(""), MatchResult::Reset);
    }

    #[test]
    fn test_case_sensitive_letters() {
        let mut matcher = SequenceMatcher::konami();
        for key in &KONAMI_SEQUENCE[..8] {
            matcher.feed(key);
        }
        assert_eq!(matcher.feed("B"), MatchResult::Reset);
    }

    #[test]
    fn test_matcher_reusable_after_match() {
        let mut matcher = SequenceMatcher::konami();
        for _ in 0..2 {
            let mut last = MatchResult::Reset;
            for key in &KONAMI_SEQUENCE {
                last = matcher.feed(key);
            }
            assert_eq!(last, MatchResult::Matched);
        }
    }
}
