use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers for the telemetry simulation.
pub trait RandomSource {
    /// Uniform integer in the closed interval `[min, max]`.
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32;
}

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside the requested interval are clamped into it, so a script of
/// extremes (`i32::MIN`, `i32::MAX`) drives every draw to its bound.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let Some(value) = self.values.pop_front() else {
            return min;
        };
        self.values.push_back(value);
        value.clamp(min, max.max(min))
    }
}
