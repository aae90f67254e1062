use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::random::RandomSource;

/// Points in a freshly generated history when no count is given.
pub const DEFAULT_HISTORY_LEN: usize = 7;
/// Spacing between consecutive samples.
pub const SAMPLE_SPACING_MINUTES: u32 = 5;

pub const INITIAL_CPU_RANGE: (i32, i32) = (30, 50);
pub const INITIAL_MEMORY_RANGE: (i32, i32) = (20, 40);
pub const CPU_STEP: (i32, i32) = (-10, 15);
pub const MEMORY_STEP: (i32, i32) = (-5, 10);
pub const CPU_BOUNDS: (i32, i32) = (10, 95);
pub const MEMORY_BOUNDS: (i32, i32) = (20, 90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub time: ClockTime,
    pub cpu: i32,
    pub memory: i32,
}

pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    value.max(lo).min(hi)
}

/// `count` samples spaced five minutes apart, the newest five minutes
/// before `now`. Oldest first.
pub fn generate_initial_history(
    count: usize,
    now: ClockTime,
    rng: &mut dyn RandomSource,
) -> Vec<MetricPoint> {
    (1..=count)
        .rev()
        .map(|i| MetricPoint {
            time: now.minus_minutes(i as u32 * SAMPLE_SPACING_MINUTES),
            cpu: rng.int_inclusive(INITIAL_CPU_RANGE.0, INITIAL_CPU_RANGE.1),
            memory: rng.int_inclusive(INITIAL_MEMORY_RANGE.0, INITIAL_MEMORY_RANGE.1),
        })
        .collect()
}

/// Bounded random-walk successor of `last`.
pub fn generate_next_point(last: &MetricPoint, rng: &mut dyn RandomSource) -> MetricPoint {
    let cpu_step = rng.int_inclusive(CPU_STEP.0, CPU_STEP.1);
    let memory_step = rng.int_inclusive(MEMORY_STEP.0, MEMORY_STEP.1);

    MetricPoint {
        time: last.time.plus_minutes(SAMPLE_SPACING_MINUTES),
        cpu: clamp(last.cpu.saturating_add(cpu_step), CPU_BOUNDS.0, CPU_BOUNDS.1),
        memory: clamp(
            last.memory.saturating_add(memory_step),
            MEMORY_BOUNDS.0,
            MEMORY_BOUNDS.1,
        ),
    }
}
