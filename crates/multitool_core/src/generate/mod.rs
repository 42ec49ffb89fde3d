//! Text and random generators.
//!
//! # Responsibility
//! - Produce passwords, placeholder text, quotes and random numbers from an
//!   injected [`RandomSource`].
//! - Score typing-test input against a fixed reference text.
//!
//! # Invariants
//! - Generation never panics; rejected requests return [`GenerateError`].
//! - Output depends only on the request and the random source.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod lorem;
pub mod password;
pub mod quote;
pub mod random;
pub mod random_number;
pub mod typing;

pub use random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Password request with every character class switched off.
    NoCharacterClass,
    LengthOutOfRange { length: usize, min: usize, max: usize },
    /// Random number range where `min >= max`.
    InvalidRange { min: i64, max: i64 },
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCharacterClass => write!(f, "select at least one character type"),
            Self::LengthOutOfRange { length, min, max } => {
                write!(f, "length {length} is outside {min}..={max}")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "minimum {min} must be less than maximum {max}")
            }
        }
    }
}

impl Error for GenerateError {}
