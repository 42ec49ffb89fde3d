//! Case conversions for free text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\S*").expect("valid word regex"));
static WORD_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^\w|[A-Z]|\b\w)").expect("valid word start regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Upper,
    Lower,
    /// First letter of every word upper, the rest lower.
    Title,
    /// First character upper, everything else lower.
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl TextCase {
    pub const ALL: [TextCase; 8] = [
        Self::Upper,
        Self::Lower,
        Self::Title,
        Self::Sentence,
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "UPPERCASE",
            Self::Lower => "lowercase",
            Self::Title => "Title Case",
            Self::Sentence => "Sentence case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
        }
    }
}

fn capitalize_rest_lower(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

fn word_starts(text: &str, lower_first: bool) -> String {
    let marked = WORD_START_RE.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        let at_start = caps.get(0).is_some_and(|m| m.start() == 0);
        if lower_first && at_start {
            matched.to_lowercase()
        } else {
            matched.to_uppercase()
        }
    });
    WHITESPACE_RE.replace_all(&marked, "").into_owned()
}

pub fn convert_case(text: &str, case: TextCase) -> String {
    match case {
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
        TextCase::Title => WORD_RE
            .replace_all(text, |caps: &Captures| capitalize_rest_lower(&caps[0]))
            .into_owned(),
        TextCase::Sentence => capitalize_rest_lower(text),
        TextCase::Camel => word_starts(text, true),
        TextCase::Pascal => word_starts(text, false),
        TextCase::Snake => WHITESPACE_RE
            .replace_all(&text.to_lowercase(), "_")
            .into_owned(),
        TextCase::Kebab => WHITESPACE_RE
            .replace_all(&text.to_lowercase(), "-")
            .into_owned(),
    }
}
