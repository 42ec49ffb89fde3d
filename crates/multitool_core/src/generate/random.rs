//! Random source seam for the generators and the speed test simulation.

use rand::Rng;

/// Uniform random draws. Implemented for every [`rand::Rng`], so a seeded
/// `StdRng` gives reproducible output under test.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`; `min` must not exceed `max`.
    fn range_inclusive(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }
}

/// Picks one element uniformly; `None` for an empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}
