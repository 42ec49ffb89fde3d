//! Motivational quotes.

use super::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// `"text" - author`, the form used when sharing or copying.
    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.text, self.author)
    }
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: [Quote; 15] = [
    quote("The only way to do great work is to love what you do.", "Steve Jobs"),
    quote("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    quote(
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    quote(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    quote(
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    quote("The only impossible journey is the one you never begin.", "Tony Robbins"),
    quote(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    quote("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    quote("Don't let yesterday take up too much of today.", "Will Rogers"),
    quote("You learn more from failure than from success.", "Unknown"),
    quote(
        "If you are working on something that you really care about, you don't have to be pushed.",
        "Steve Jobs",
    ),
    quote("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    quote(
        "The only limit to our realization of tomorrow will be our doubts of today.",
        "Franklin D. Roosevelt",
    ),
    quote(
        "Do something today that your future self will thank you for.",
        "Sean Patrick Flanery",
    ),
    quote(
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
];

pub fn random_quote<R: RandomSource + ?Sized>(rng: &mut R) -> Quote {
    QUOTES[rng.next_index(QUOTES.len())]
}
