//! Word, sentence and paragraph statistics.
//!
//! Counts are in Unicode scalar values.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph regex"));

/// Reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Whole minutes, rounded up.
    pub reading_minutes: usize,
}

impl TextStats {
    /// `0.0` when there are no sentences.
    pub fn average_words_per_sentence(&self) -> f64 {
        ratio(self.words, self.sentences)
    }

    /// `0.0` when there are no words.
    pub fn average_characters_per_word(&self) -> f64 {
        ratio(self.characters_no_spaces, self.words)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn count_segments(re: &Regex, text: &str) -> usize {
    re.split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

pub fn text_stats(text: &str) -> TextStats {
    let trimmed = text.trim();
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    if trimmed.is_empty() {
        return TextStats {
            characters,
            characters_no_spaces,
            ..TextStats::default()
        };
    }

    let words = count_segments(&WHITESPACE_RE, trimmed);
    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences: count_segments(&SENTENCE_END_RE, text),
        paragraphs: count_segments(&PARAGRAPH_BREAK_RE, text),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}
