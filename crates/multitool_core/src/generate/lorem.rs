//! Lorem ipsum placeholder text.

use super::RandomSource;

pub const LOREM_WORDS: [&str; 62] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

const SENTENCE_MIN_WORDS: usize = 5;
const SENTENCE_WORD_SPREAD: usize = 10;
const PARAGRAPH_MIN_SENTENCES: usize = 3;
const PARAGRAPH_SENTENCE_SPREAD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoremUnit {
    Words,
    Sentences,
    #[default]
    Paragraphs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremRequest {
    pub unit: LoremUnit,
    /// Values below one are treated as one.
    pub amount: usize,
}

impl Default for LoremRequest {
    fn default() -> Self {
        Self {
            unit: LoremUnit::Paragraphs,
            amount: 3,
        }
    }
}

pub fn word<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    LOREM_WORDS[rng.next_index(LOREM_WORDS.len())]
}

/// 5 to 14 words, first letter capitalized, closing period.
pub fn sentence<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let count = SENTENCE_MIN_WORDS + rng.next_index(SENTENCE_WORD_SPREAD);
    let words: Vec<&str> = (0..count).map(|_| word(rng)).collect();
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

/// 3 to 7 sentences separated by single spaces.
pub fn paragraph<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let count = PARAGRAPH_MIN_SENTENCES + rng.next_index(PARAGRAPH_SENTENCE_SPREAD);
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn generate_lorem<R: RandomSource + ?Sized>(request: &LoremRequest, rng: &mut R) -> String {
    let amount = request.amount.max(1);
    match request.unit {
        LoremUnit::Words => (0..amount)
            .map(|_| word(rng))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Sentences => (0..amount)
            .map(|_| sentence(rng))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Paragraphs => (0..amount)
            .map(|_| paragraph(rng))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_lorem, sentence, LoremRequest, LoremUnit, LOREM_WORDS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sentence_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let text = sentence(&mut rng);
            assert!(text.ends_with('.'));
            assert!(text.chars().next().unwrap().is_uppercase());
            let words = text.trim_end_matches('.').split(' ').count();
            assert!((5..=14).contains(&words));
        }
    }

    #[test]
    fn zero_amount_yields_one_word() {
        let mut rng = StdRng::seed_from_u64(11);
        let request = LoremRequest {
            unit: LoremUnit::Words,
            amount: 0,
        };
        let text = generate_lorem(&request, &mut rng);
        assert!(LOREM_WORDS.contains(&text.as_str()));
    }
}
