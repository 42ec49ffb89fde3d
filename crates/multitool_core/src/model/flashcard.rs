//! Two-sided study card.

use super::{require_text, Record, RecordId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: RecordId,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDraft {
    pub front: String,
    pub back: String,
}

impl FlashcardDraft {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_text("card front", &self.front)?;
        require_text("card back", &self.back)
    }
}

impl Record for Flashcard {
    type Draft = FlashcardDraft;

    const STORAGE_KEY: &'static str = "flashcards";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: RecordId,
        _now: DateTime<Utc>,
        draft: FlashcardDraft,
    ) -> Result<Self, ValidationError> {
        draft.check()?;
        Ok(Self {
            id,
            front: draft.front.trim().to_string(),
            back: draft.back.trim().to_string(),
        })
    }

    fn apply_draft(
        &mut self,
        draft: FlashcardDraft,
        _now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        draft.check()?;
        self.front = draft.front.trim().to_string();
        self.back = draft.back.trim().to_string();
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("card front", &self.front)?;
        require_text("card back", &self.back)
    }
}
