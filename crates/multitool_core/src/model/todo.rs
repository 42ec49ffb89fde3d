//! To-do item record.

use super::{require_text, Completable, Record, RecordId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: RecordId,
    /// Stored as entered; only blank input is rejected.
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Record for Todo {
    type Draft = TodoDraft;

    const STORAGE_KEY: &'static str = "todos";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: RecordId,
        now: DateTime<Utc>,
        draft: TodoDraft,
    ) -> Result<Self, ValidationError> {
        require_text("todo text", &draft.text)?;
        Ok(Self {
            id,
            text: draft.text,
            completed: false,
            created_at: now,
        })
    }

    fn apply_draft(
        &mut self,
        draft: TodoDraft,
        _now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        require_text("todo text", &draft.text)?;
        self.text = draft.text;
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("todo text", &self.text)
    }
}

impl Completable for Todo {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
