//! Planner task scheduled on a calendar day.

use super::{require_text, Completable, Record, RecordId, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTask {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Persisted as the UTC instant of local midnight; plain `YYYY-MM-DD`
    /// values are accepted on load.
    #[serde(with = "calendar_day")]
    pub date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTaskDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub priority: Priority,
}

impl PlannedTaskDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            priority: Priority::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl Record for PlannedTask {
    type Draft = PlannedTaskDraft;

    const STORAGE_KEY: &'static str = "plannedTasks";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(
        id: RecordId,
        _now: DateTime<Utc>,
        draft: PlannedTaskDraft,
    ) -> Result<Self, ValidationError> {
        require_text("task title", &draft.title)?;
        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            priority: draft.priority,
            completed: false,
        })
    }

    fn apply_draft(
        &mut self,
        draft: PlannedTaskDraft,
        _now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        require_text("task title", &draft.title)?;
        self.title = draft.title;
        self.description = draft.description;
        self.date = draft.date;
        self.priority = draft.priority;
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("task title", &self.title)
    }
}

mod calendar_day {
    use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        let midnight = date.and_time(NaiveTime::MIN);
        let instant = Local
            .from_local_datetime(&midnight)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
        serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|instant| instant.with_timezone(&Local).date_naive())
            .map_err(D::Error::custom)
    }
}

impl Completable for PlannedTask {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
