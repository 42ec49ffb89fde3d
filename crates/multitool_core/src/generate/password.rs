//! Password generation and strength scoring.

use super::{GenerateError, RandomSource};
use std::ops::RangeInclusive;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const PASSWORD_LENGTH: RangeInclusive<usize> = 4..=50;

/// Length at which a password earns the length point of its score.
const STRONG_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    /// Concatenation of the enabled character classes.
    pub fn charset(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, class)| class.chars())
        .collect()
    }

    fn enabled_classes(&self) -> usize {
        [self.uppercase, self.lowercase, self.digits, self.symbols]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

/// Samples `options.length` characters uniformly from the enabled classes.
pub fn generate_password<R: RandomSource + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if !PASSWORD_LENGTH.contains(&options.length) {
        return Err(GenerateError::LengthOutOfRange {
            length: options.length,
            min: *PASSWORD_LENGTH.start(),
            max: *PASSWORD_LENGTH.end(),
        });
    }
    let charset = options.charset();
    if charset.is_empty() {
        return Err(GenerateError::NoCharacterClass);
    }
    Ok((0..options.length)
        .map(|_| charset[rng.next_index(charset.len())])
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// One point for a long enough password plus one per enabled class.
pub fn strength_score(password: &str, options: &PasswordOptions) -> u8 {
    let length_point = usize::from(password.chars().count() >= STRONG_LENGTH);
    (length_point + options.enabled_classes()) as u8
}

/// `None` until a password has been generated.
pub fn password_strength(password: &str, options: &PasswordOptions) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let score = strength_score(password, options);
    Some(PasswordStrength::from_score(score))
}
