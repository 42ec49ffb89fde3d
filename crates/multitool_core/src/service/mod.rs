//! Widget use-case services.
//!
//! # Responsibility
//! - Wrap record lists with the per-widget views and rules the UI needs.
//! - Keep rendering layers decoupled from storage and JSON details.

pub mod flashcard_service;
pub mod note_service;
pub mod planner_service;
pub mod quiz_service;
pub mod todo_service;
