//! Quiz authoring, taking and scoring.
//!
//! # Invariants
//! - Questions are answered strictly in order, once each.
//! - A result exists only after the last question is answered.

use crate::clock::{Clock, SystemClock};
use crate::model::quiz::{Question, Quiz, QuizDraft, QUESTION_OPTION_COUNT};
use crate::model::ValidationError;
use crate::repo::{RecordList, RepoResult};
use crate::store::KeyValueStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub struct QuizService<S, C = SystemClock> {
    list: RecordList<Quiz, S, C>,
    clock: C,
}

impl<S: KeyValueStore> QuizService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock + Clone> QuizService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            list: RecordList::with_clock(store, clock.clone()),
            clock,
        }
    }

    /// Starts authoring a quiz; question ids continue from the current time.
    pub fn builder(&self, title: &str, description: &str) -> QuizBuilder {
        QuizBuilder::new(title, description, self.clock.now().timestamp_millis())
    }

    pub fn create(&self, builder: QuizBuilder) -> RepoResult<Quiz> {
        self.list.create(builder.into_draft())
    }

    pub fn get(&self, id: &str) -> RepoResult<Option<Quiz>> {
        self.list.get(id)
    }

    pub fn list(&self) -> RepoResult<Vec<Quiz>> {
        self.list.load()
    }

    pub fn remove(&self, id: &str) -> RepoResult<()> {
        self.list.remove(id)
    }
}

/// Accumulates questions before a quiz is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBuilder {
    title: String,
    description: String,
    questions: Vec<Question>,
    next_question_id: i64,
}

impl QuizBuilder {
    pub fn new(title: &str, description: &str, first_question_id: i64) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            questions: Vec::new(),
            next_question_id: first_question_id,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Adds a question with all option fields filled in.
    pub fn add_question(
        &mut self,
        prompt: &str,
        options: [&str; QUESTION_OPTION_COUNT],
        correct_answer: usize,
    ) -> Result<&Question, ValidationError> {
        let id = self.next_question_id.to_string();
        let question = Question::new(id, prompt, &options, correct_answer)?;
        self.next_question_id += 1;
        self.questions.push(question);
        Ok(&self.questions[self.questions.len() - 1])
    }

    pub fn remove_question(&mut self, id: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|question| question.id != id);
        self.questions.len() != before
    }

    fn into_draft(self) -> QuizDraft {
        QuizDraft {
            title: self.title,
            description: self.description,
            questions: self.questions,
        }
    }
}

/// Misuse of a quiz-taking session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSessionError {
    AlreadyCompleted,
    AnswerOutOfRange { answer: usize, options: usize },
}

impl Display for QuizSessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyCompleted => write!(f, "quiz is already completed"),
            Self::AnswerOutOfRange { answer, options } => {
                write!(f, "answer {answer} is out of range for {options} options")
            }
        }
    }
}

impl Error for QuizSessionError {}

/// Qualitative band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizGrade {
    Excellent,
    Good,
    KeepPracticing,
}

impl QuizGrade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60.. => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good Job!",
            Self::KeepPracticing => "Keep Practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
    pub grade: QuizGrade,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (score as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percentage,
            grade: QuizGrade::from_percentage(percentage),
        }
    }
}

/// One attempt at a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    quiz: Quiz,
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn start(quiz: Quiz) -> Self {
        Self {
            quiz,
            answers: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn is_completed(&self) -> bool {
        self.answers.len() >= self.quiz.questions.len()
    }

    /// Question awaiting an answer, `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.answers.len())
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Records an answer for the current question and advances.
    pub fn answer(&mut self, option: usize) -> Result<Option<QuizResult>, QuizSessionError> {
        let question = self
            .current_question()
            .ok_or(QuizSessionError::AlreadyCompleted)?;
        if option >= question.options.len() {
            return Err(QuizSessionError::AnswerOutOfRange {
                answer: option,
                options: question.options.len(),
            });
        }
        self.answers.push(option);
        Ok(self.result())
    }

    pub fn result(&self) -> Option<QuizResult> {
        if !self.is_completed() {
            return None;
        }
        let score = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| question.is_correct(**answer))
            .count();
        Some(QuizResult::new(score, self.quiz.questions.len()))
    }

    /// Clears answers to retake the same quiz.
    pub fn restart(&mut self) {
        self.answers.clear();
    }
}
