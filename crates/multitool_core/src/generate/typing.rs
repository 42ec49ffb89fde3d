//! Typing speed test against a fixed reference passage.
//!
//! Timestamps are caller-supplied milliseconds so a session can be replayed
//! deterministically.

pub const REFERENCE_TEXT: &str = "The quick brown fox jumps over the lazy dog. This is a sample text for typing speed test. Keep typing to measure your words per minute and accuracy.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingScore {
    pub wpm: u32,
    /// Percent of typed characters matching the reference at the same position.
    pub accuracy: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharMark {
    Correct,
    Incorrect,
    Cursor,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSession {
    reference: Vec<char>,
    input: Vec<char>,
    started_at_ms: Option<u64>,
    score: Option<TypingScore>,
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new(REFERENCE_TEXT)
    }
}

impl TypingSession {
    pub fn new(reference: &str) -> Self {
        Self {
            reference: reference.chars().collect(),
            input: Vec::new(),
            started_at_ms: None,
            score: None,
        }
    }

    pub fn reference(&self) -> String {
        self.reference.iter().collect()
    }

    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    /// Typing has begun and the passage is not complete yet.
    pub fn is_active(&self) -> bool {
        self.started_at_ms.is_some() && self.score.is_none()
    }

    pub fn is_finished(&self) -> bool {
        self.score.is_some()
    }

    /// Final score, available once the input reaches the reference length.
    pub fn score(&self) -> Option<TypingScore> {
        self.score
    }

    /// Replaces the input with `value` as typed at `now_ms`.
    ///
    /// The clock starts on the first non-empty input, even when several
    /// characters arrive at once; input past the reference
    /// length is cut off, and reaching that length finishes the session.
    /// Changes after finishing are ignored until [`TypingSession::reset`].
    pub fn update(&mut self, value: &str, now_ms: u64) {
        if self.is_finished() {
            return;
        }
        self.input = value.chars().take(self.reference.len()).collect();
        if self.started_at_ms.is_none() && !self.input.is_empty() {
            self.started_at_ms = Some(now_ms);
        }
        if self.input.len() == self.reference.len() {
            if let Some(started) = self.started_at_ms {
                let elapsed_ms = now_ms.saturating_sub(started);
                self.score = Some(score_input(&self.reference, &self.input, elapsed_ms));
            }
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.started_at_ms = None;
        self.score = None;
    }

    /// Per-character highlight of the reference for the current input.
    pub fn marks(&self) -> Vec<CharMark> {
        self.reference
            .iter()
            .enumerate()
            .map(|(index, expected)| match self.input.get(index) {
                Some(typed) if typed == expected => CharMark::Correct,
                Some(_) => CharMark::Incorrect,
                None if index == self.input.len() => CharMark::Cursor,
                None => CharMark::Pending,
            })
            .collect()
    }
}

fn score_input(reference: &[char], input: &[char], elapsed_ms: u64) -> TypingScore {
    let words = input.iter().collect::<String>().split(' ').count();
    let minutes = elapsed_ms as f64 / 60_000.0;
    let wpm = if minutes > 0.0 {
        (words as f64 / minutes).round() as u32
    } else {
        0
    };
    let matches = input
        .iter()
        .zip(reference)
        .filter(|(typed, expected)| typed == expected)
        .count();
    let accuracy = if input.is_empty() {
        100
    } else {
        (matches as f64 / input.len() as f64 * 100.0).round() as u32
    };
    TypingScore { wpm, accuracy }
}

#[cfg(test)]
mod tests {
    use super::{CharMark, TypingSession};

    #[test]
    fn perfect_passage_in_one_minute() {
        let mut session = TypingSession::new("ab cd ef");
        session.update("a", 1_000);
        assert!(session.is_active());
        session.update("ab cd ef", 61_000);
        let score = session.score().unwrap();
        assert_eq!(score.wpm, 3);
        assert_eq!(score.accuracy, 100);
        assert!(!session.is_active());
    }

    #[test]
    fn accuracy_counts_positional_matches() {
        let mut session = TypingSession::new("abcd");
        session.update("x", 0);
        session.update("xbcd", 30_000);
        assert_eq!(session.score().unwrap().accuracy, 75);
    }

    #[test]
    fn pasted_first_input_starts_the_clock() {
        let mut session = TypingSession::new("ab cd ef");
        session.update("ab cd", 5_000);
        assert!(session.is_active());
        session.update("ab cd ef", 35_000);
        assert_eq!(session.score().unwrap().wpm, 6);

        let mut session = TypingSession::new("abc");
        session.update("abc", 2_000);
        assert!(session.is_finished());
        assert_eq!(session.score().unwrap().wpm, 0);
    }

    #[test]
    fn clearing_the_input_keeps_the_clock_running() {
        let mut session = TypingSession::new("abc");
        session.update("a", 0);
        session.update("", 1_000);
        assert!(session.is_active());
        session.update("abc", 60_000);
        assert_eq!(session.score().unwrap().wpm, 1);
    }

    #[test]
    fn marks_track_cursor_and_errors() {
        let mut session = TypingSession::new("abc");
        session.update("a", 0);
        session.update("ax", 10);
        assert_eq!(
            session.marks(),
            vec![CharMark::Correct, CharMark::Incorrect, CharMark::Cursor]
        );
        session.reset();
        assert_eq!(session.input(), "");
        assert!(!session.is_active());
    }
}
