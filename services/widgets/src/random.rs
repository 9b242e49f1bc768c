//! Randomness source for the widgets
//!
//! Every draw the widgets make goes through [`RandomSource`] so the host can
//! pick OS entropy or a fixed seed, and tests can script exact outcomes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::Range;

/// Uniform draws used by the widget controllers
pub trait RandomSource {
    /// Fair coin trial (`p = 0.5`)
    fn next_bool(&mut self) -> bool;

    /// Uniform integer in the closed interval of `range`
    fn range_inclusive(&mut self, range: Range) -> i64;

    /// Uniform index in `[0, len)`; `len` is never zero
    fn index(&mut self, len: usize) -> usize;
}

/// Production source backed by `StdRng`
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn range_inclusive(&mut self, range: Range) -> i64 {
        self.rng.gen_range(range.min()..=range.max())
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Scripted source returning queued values in order
///
/// Exhausted queues fall back to `false`, the range minimum and index 0.
/// Queued numbers and indices are clamped into the requested bounds.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    bools: VecDeque<bool>,
    numbers: VecDeque<i64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }

    pub fn with_numbers(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.numbers.extend(values);
        self
    }

    pub fn with_indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn next_bool(&mut self) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }

    fn range_inclusive(&mut self, range: Range) -> i64 {
        self.numbers
            .pop_front()
            .map(|value| value.clamp(range.min(), range.max()))
            .unwrap_or(range.min())
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .map(|value| value.min(len.saturating_sub(1)))
            .unwrap_or(0)
    }
}
