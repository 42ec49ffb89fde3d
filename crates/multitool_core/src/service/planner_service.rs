//! Daily task planner use cases.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{PlannedTask, PlannedTaskDraft};
use crate::repo::{RecordList, RepoResult};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use std::cmp::Reverse;

pub struct PlannerService<S, C = SystemClock> {
    list: RecordList<PlannedTask, S, C>,
}

impl<S: KeyValueStore> PlannerService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            list: RecordList::new(store),
        }
    }
}

impl<S: KeyValueStore, C: Clock> PlannerService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            list: RecordList::with_clock(store, clock),
        }
    }

    pub fn add(&self, draft: PlannedTaskDraft) -> RepoResult<PlannedTask> {
        self.list.create(draft)
    }

    pub fn update(&self, id: &str, draft: PlannedTaskDraft) -> RepoResult<PlannedTask> {
        self.list.update(id, draft)
    }

    pub fn toggle(&self, id: &str) -> RepoResult<PlannedTask> {
        self.list.toggle(id)
    }

    pub fn remove(&self, id: &str) -> RepoResult<()> {
        self.list.remove(id)
    }

    /// Tasks scheduled on `date`, in insertion order.
    pub fn tasks_on(&self, date: NaiveDate) -> RepoResult<Vec<PlannedTask>> {
        let mut tasks = self.list.load()?;
        tasks.retain(|task| task.date == date);
        Ok(tasks)
    }

    /// Distinct dates that have at least one task, ascending.
    pub fn scheduled_dates(&self) -> RepoResult<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self.list.load()?.iter().map(|task| task.date).collect();
        dates.sort_unstable();
        dates.dedup();
        Ok(dates)
    }
}

/// Orders open tasks before completed ones, then high priority first.
/// Stable, so equal tasks keep insertion order.
pub fn sort_by_priority(tasks: &mut [PlannedTask]) {
    tasks.sort_by_key(|task| (task.completed, Reverse(task.priority)));
}
