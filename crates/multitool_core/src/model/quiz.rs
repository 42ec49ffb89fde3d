//! Quiz aggregate: a title plus an ordered list of multiple-choice questions.
//!
//! # Invariants
//! - Every question has exactly [`QUESTION_OPTION_COUNT`] non-blank options.
//! - `correct_answer` indexes into `options`.
//! - A persisted quiz has a title and at least one question.

use super::{require_text, Record, RecordId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options offered per question.
pub const QUESTION_OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: RecordId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    /// Builds a question, trimming the prompt and every option.
    pub fn new(
        id: RecordId,
        prompt: &str,
        options: &[&str],
        correct_answer: usize,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            question: prompt.trim().to_string(),
            options: options.iter().map(|opt| opt.trim().to_string()).collect(),
            correct_answer,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("question", &self.question)?;
        if self.options.len() != QUESTION_OPTION_COUNT {
            return Err(ValidationError::OptionCount {
                expected: QUESTION_OPTION_COUNT,
                actual: self.options.len(),
            });
        }
        if self.options.iter().any(|opt| opt.trim().is_empty()) {
            return Err(ValidationError::Blank("question option"));
        }
        if self.correct_answer >= self.options.len() {
            return Err(ValidationError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        self.correct_answer == answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

fn check_quiz(title: &str, questions: &[Question]) -> Result<(), ValidationError> {
    require_text("quiz title", title)?;
    if questions.is_empty() {
        return Err(ValidationError::NoQuestions);
    }
    questions.iter().try_for_each(Question::validate)
}

impl Record for Quiz {
    type Draft = QuizDraft;

    const STORAGE_KEY: &'static str = "quizzes";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: RecordId,
        now: DateTime<Utc>,
        draft: QuizDraft,
    ) -> Result<Self, ValidationError> {
        check_quiz(&draft.title, &draft.questions)?;
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            questions: draft.questions,
            created_at: now,
        })
    }

    fn apply_draft(
        &mut self,
        draft: QuizDraft,
        _now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        check_quiz(&draft.title, &draft.questions)?;
        self.title = draft.title.trim().to_string();
        self.description = draft.description.trim().to_string();
        self.questions = draft.questions;
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_quiz(&self.title, &self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Question, ValidationError};

    #[test]
    fn correct_answer_must_index_options() {
        let err = Question::new("1".into(), "2+2?", &["3", "4", "5", "6"], 4).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CorrectAnswerOutOfRange {
                index: 4,
                options: 4
            }
        );
    }

    #[test]
    fn option_list_has_fixed_size() {
        let err = Question::new("1".into(), "pick", &["a", "b"], 0).unwrap_err();
        assert!(matches!(err, ValidationError::OptionCount { actual: 2, .. }));
    }

    #[test]
    fn blank_option_is_rejected() {
        let err = Question::new("1".into(), "pick", &["a", " ", "c", "d"], 0).unwrap_err();
        assert_eq!(err, ValidationError::Blank("question option"));
    }
}
