//! Core logic for the multitool widget collection.
//! Persistent record lists, calculators, timers and generators live here,
//! independent of any rendering layer.

pub mod calc;
pub mod clock;
pub mod db;
pub mod generate;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod text;
pub mod timing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use generate::{GenerateError, RandomSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Completable, Record, RecordId, ValidationError};
pub use repo::{RecordList, RepoError, RepoResult};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use timing::{IntervalScheduler, ManualScheduler, TickScheduler, TimingError};

