//! Text utilities: statistics and case conversion.

pub mod case;
pub mod stats;

pub use case::{convert_case, TextCase};
pub use stats::{text_stats, TextStats};
