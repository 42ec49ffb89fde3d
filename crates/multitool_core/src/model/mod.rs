//! Persisted widget records.
//!
//! # Responsibility
//! - Define the JSON shape each stateful widget stores under its own key.
//! - Build and edit records from user drafts with field validation.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused within a list.
//! - Field names serialize as camelCase; dates serialize as ISO-8601.
//! - A record that fails `validate()` is never persisted.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod flashcard;
pub mod note;
pub mod quiz;
pub mod task;
pub mod todo;

/// Identifier derived from the creation time in epoch milliseconds.
pub type RecordId = String;

/// Where `create` places a new record in the persisted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// A user-created item persisted as one element of a JSON array.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// User-supplied fields for create and update.
    type Draft;

    /// Key the whole list is stored under.
    const STORAGE_KEY: &'static str;
    const INSERT_POSITION: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &str;

    /// Builds a fresh record with default lifecycle flags.
    fn from_draft(
        id: RecordId,
        now: DateTime<Utc>,
        draft: Self::Draft,
    ) -> Result<Self, ValidationError>;

    /// Replaces user-editable fields in place.
    fn apply_draft(
        &mut self,
        draft: Self::Draft,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError>;

    /// Checks invariants of a record read back from storage.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Records carrying a `completed` flag that can be toggled.
pub trait Completable: Record {
    fn is_completed(&self) -> bool;
    fn set_completed(&mut self, completed: bool);
}

/// Field-level validation failure for record drafts and stored records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    Blank(&'static str),
    /// Quiz has no questions.
    NoQuestions,
    /// Question option list has the wrong size.
    OptionCount { expected: usize, actual: usize },
    /// Correct option index is outside the option list.
    CorrectAnswerOutOfRange { index: usize, options: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(field) => write!(f, "{field} cannot be empty"),
            Self::NoQuestions => write!(f, "quiz needs at least one question"),
            Self::OptionCount { expected, actual } => {
                write!(f, "question needs {expected} options, got {actual}")
            }
            Self::CorrectAnswerOutOfRange { index, options } => write!(
                f,
                "correct answer index {index} is out of range for {options} options"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}
