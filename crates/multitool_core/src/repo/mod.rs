//! Persistent record lists over a key-value store.
//!
//! # Responsibility
//! - Load, mutate and save whole record lists under their storage key.
//! - Keep JSON parsing and id assignment out of widget services.
//!
//! # Invariants
//! - Every mutation is a whole-list read-modify-write.
//! - Write paths validate records before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   store transport errors.

pub mod record_list;

pub use record_list::{RecordList, RepoError, RepoResult};
