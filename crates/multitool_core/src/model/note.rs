//! Note record.
//!
//! Title and content are trimmed on write; the newest note sits at the
//! front of the stored list.

use super::{require_text, InsertPosition, Record, RecordId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Bumped on every edit; equals `created_at` until then.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Record for Note {
    type Draft = NoteDraft;

    const STORAGE_KEY: &'static str = "notes";
    const INSERT_POSITION: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: RecordId,
        now: DateTime<Utc>,
        draft: NoteDraft,
    ) -> Result<Self, ValidationError> {
        require_text("note title", &draft.title)?;
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply_draft(&mut self, draft: NoteDraft, now: DateTime<Utc>) -> Result<(), ValidationError> {
        require_text("note title", &draft.title)?;
        self.title = draft.title.trim().to_string();
        self.content = draft.content.trim().to_string();
        self.updated_at = now;
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("note title", &self.title)
    }
}
