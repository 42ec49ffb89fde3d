//! To-do list use cases.

use crate::clock::{Clock, SystemClock};
use crate::model::todo::{Todo, TodoDraft};
use crate::repo::{RecordList, RepoResult};
use crate::store::KeyValueStore;

/// View filter for the to-do list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

/// Counters shown next to the filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub struct TodoService<S, C = SystemClock> {
    list: RecordList<Todo, S, C>,
}

impl<S: KeyValueStore> TodoService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            list: RecordList::new(store),
        }
    }
}

impl<S: KeyValueStore, C: Clock> TodoService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            list: RecordList::with_clock(store, clock),
        }
    }

    /// Appends a new open item; blank text is rejected.
    pub fn add(&self, text: impl Into<String>) -> RepoResult<Todo> {
        self.list.create(TodoDraft::new(text))
    }

    pub fn edit(&self, id: &str, text: impl Into<String>) -> RepoResult<Todo> {
        self.list.update(id, TodoDraft::new(text))
    }

    pub fn toggle(&self, id: &str) -> RepoResult<Todo> {
        self.list.toggle(id)
    }

    pub fn remove(&self, id: &str) -> RepoResult<()> {
        self.list.remove(id)
    }

    /// Items in insertion order, restricted by `filter`.
    pub fn list(&self, filter: TodoFilter) -> RepoResult<Vec<Todo>> {
        let mut todos = self.list.load()?;
        todos.retain(|todo| filter.matches(todo));
        Ok(todos)
    }

    pub fn counts(&self) -> RepoResult<TodoCounts> {
        let todos = self.list.load()?;
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Ok(TodoCounts {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        })
    }

    /// Removes every completed item, returning how many were dropped.
    pub fn clear_completed(&self) -> RepoResult<usize> {
        let mut todos = self.list.load()?;
        let before = todos.len();
        todos.retain(|todo| !todo.completed);
        let removed = before - todos.len();
        if removed > 0 {
            self.list.save(&todos)?;
        }
        Ok(removed)
    }
}
