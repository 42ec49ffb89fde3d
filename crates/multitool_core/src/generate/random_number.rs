//! Batches of random integers from an inclusive range.

use super::{GenerateError, RandomSource};

pub const MAX_BATCH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomNumberRequest {
    pub min: i64,
    pub max: i64,
    /// Clamped to `1..=MAX_BATCH`.
    pub count: usize,
}

impl Default for RandomNumberRequest {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            count: 1,
        }
    }
}

impl RandomNumberRequest {
    /// Builds a request from raw form fields. A field that does not parse,
    /// or parses to zero, takes its fallback: min 0, max 100, count 1.
    pub fn from_fields(min: &str, max: &str, count: &str) -> Self {
        let count = crate::calc::input::parse_count(count, 1);
        Self {
            min: crate::calc::input::parse_count(min, 0),
            max: crate::calc::input::parse_count(max, 100),
            count: usize::try_from(count).unwrap_or(1),
        }
    }
}

pub fn generate_numbers<R: RandomSource + ?Sized>(
    request: &RandomNumberRequest,
    rng: &mut R,
) -> Result<Vec<i64>, GenerateError> {
    if request.min >= request.max {
        return Err(GenerateError::InvalidRange {
            min: request.min,
            max: request.max,
        });
    }
    let count = request.count.clamp(1, MAX_BATCH);
    Ok((0..count)
        .map(|_| rng.range_inclusive(request.min, request.max))
        .collect())
}
