//! Generic JSON-array record list.
//!
//! # Invariants
//! - Missing or blank persisted value loads as an empty list.
//! - `load` recovers from malformed data with an empty list and a warning;
//!   the next successful write replaces the unreadable value.
//! - `load_strict` reports malformed data as `RepoError::InvalidData`.
//! - Ids are decimal epoch milliseconds, strictly increasing within a list.

use crate::clock::{Clock, SystemClock};
use crate::model::{Completable, InsertPosition, Record, RecordId, ValidationError};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Record list failure.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
    NotFound(RecordId),
    InvalidData(String),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// List of `R` persisted as one JSON array under `R::STORAGE_KEY`.
pub struct RecordList<R, S, C = SystemClock> {
    store: S,
    clock: C,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, S: KeyValueStore> RecordList<R, S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<R: Record, S: KeyValueStore, C: Clock> RecordList<R, S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            _record: PhantomData,
        }
    }

    pub fn storage_key(&self) -> &'static str {
        R::STORAGE_KEY
    }

    /// Loads the persisted list, falling back to empty on unreadable data.
    pub fn load(&self) -> RepoResult<Vec<R>> {
        match self.load_strict() {
            Err(RepoError::InvalidData(reason)) => {
                warn!(
                    "event=record_load module=repo status=recovered key={} reason={}",
                    R::STORAGE_KEY,
                    reason
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Loads the persisted list, rejecting unreadable data.
    pub fn load_strict(&self) -> RepoResult<Vec<R>> {
        let Some(raw) = self.store.get(R::STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<R> = serde_json::from_str(&raw)
            .map_err(|err| RepoError::InvalidData(format!("json decode failed: {err}")))?;
        for record in &records {
            record.validate().map_err(|err| {
                RepoError::InvalidData(format!("record `{}` failed validation: {err}", record.id()))
            })?;
        }

        debug!(
            "event=record_load module=repo status=ok key={} count={}",
            R::STORAGE_KEY,
            records.len()
        );
        Ok(records)
    }

    /// Serializes and stores the whole list.
    pub fn save(&self, records: &[R]) -> RepoResult<()> {
        for record in records {
            record.validate()?;
        }
        let encoded = serde_json::to_string(records).map_err(RepoError::Encode)?;
        self.store.set(R::STORAGE_KEY, &encoded)?;
        debug!(
            "event=record_save module=repo status=ok key={} count={}",
            R::STORAGE_KEY,
            records.len()
        );
        Ok(())
    }

    pub fn get(&self, id: &str) -> RepoResult<Option<R>> {
        Ok(self.load()?.into_iter().find(|record| record.id() == id))
    }

    /// Builds a record from `draft`, stores it and returns it.
    pub fn create(&self, draft: R::Draft) -> RepoResult<R> {
        let mut records = self.load()?;
        let now = self.clock.now();
        let id = next_id(now.timestamp_millis(), &records).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "record ids under `{}` are exhausted",
                R::STORAGE_KEY
            ))
        })?;
        let record = R::from_draft(id, now, draft)?;

        match R::INSERT_POSITION {
            InsertPosition::Front => records.insert(0, record.clone()),
            InsertPosition::Back => records.push(record.clone()),
        }
        self.save(&records)?;

        debug!(
            "event=record_create module=repo status=ok key={} id={}",
            R::STORAGE_KEY,
            record.id()
        );
        Ok(record)
    }

    /// Replaces editable fields of the record with `id`.
    pub fn update(&self, id: &str, draft: R::Draft) -> RepoResult<R> {
        let now = self.clock.now();
        self.modify(id, |record| record.apply_draft(draft, now))
    }

    /// Deletes the record with `id`.
    pub fn remove(&self, id: &str) -> RepoResult<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(RepoError::NotFound(id.to_string()));
        }
        self.save(&records)?;
        debug!(
            "event=record_remove module=repo status=ok key={} id={}",
            R::STORAGE_KEY,
            id
        );
        Ok(())
    }

    /// Drops the stored list entirely.
    pub fn clear(&self) -> RepoResult<()> {
        self.store.remove(R::STORAGE_KEY)?;
        Ok(())
    }

    fn modify(
        &self,
        id: &str,
        change: impl FnOnce(&mut R) -> Result<(), ValidationError>,
    ) -> RepoResult<R> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        change(record)?;
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }
}

impl<R: Completable, S: KeyValueStore, C: Clock> RecordList<R, S, C> {
    /// Flips the `completed` flag of the record with `id`.
    pub fn toggle(&self, id: &str) -> RepoResult<R> {
        self.modify(id, |record| {
            record.set_completed(!record.is_completed());
            Ok(())
        })
    }
}

/// Uses the creation millisecond unless an existing numeric id is at or
/// past it; then continues from the largest one. `None` once that would
/// pass `i64::MAX`.
fn next_id<R: Record>(now_ms: i64, records: &[R]) -> Option<RecordId> {
    let newest = records
        .iter()
        .filter_map(|record| record.id().parse::<i64>().ok())
        .max();
    let id = match newest {
        Some(newest) if newest >= now_ms => newest.checked_add(1)?,
        _ => now_ms,
    };
    Some(id.to_string())
}
