//! Notes use cases.
//!
//! Notes are kept newest-first; editing replaces title and content in full.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteDraft};
use crate::repo::{RecordList, RepoResult};
use crate::store::KeyValueStore;

pub struct NoteService<S, C = SystemClock> {
    list: RecordList<Note, S, C>,
}

impl<S: KeyValueStore> NoteService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            list: RecordList::new(store),
        }
    }
}

impl<S: KeyValueStore, C: Clock> NoteService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            list: RecordList::with_clock(store, clock),
        }
    }

    pub fn create(&self, title: &str, content: &str) -> RepoResult<Note> {
        self.list.create(NoteDraft::new(title, content))
    }

    pub fn update(&self, id: &str, title: &str, content: &str) -> RepoResult<Note> {
        self.list.update(id, NoteDraft::new(title, content))
    }

    pub fn get(&self, id: &str) -> RepoResult<Option<Note>> {
        self.list.get(id)
    }

    pub fn remove(&self, id: &str) -> RepoResult<()> {
        self.list.remove(id)
    }

    /// All notes, most recently created first.
    pub fn list(&self) -> RepoResult<Vec<Note>> {
        self.list.load()
    }
}
