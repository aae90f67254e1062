use std::collections::VecDeque;

use super::clock::ClockTime;
use super::generator::{MetricPoint, generate_initial_history, generate_next_point};
use super::random::RandomSource;

/// Samples kept by the live chart.
pub const DEFAULT_WINDOW_LEN: usize = 10;

/// Fixed-length, oldest-first buffer of samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingWindow {
    points: VecDeque<MetricPoint>,
    capacity: usize,
}

impl RollingWindow {
    pub fn seeded(len: usize, now: ClockTime, rng: &mut dyn RandomSource) -> Self {
        Self::from_points(generate_initial_history(len, now, rng))
    }

    /// Wraps existing samples; the window length is fixed to `points.len()`.
    pub fn from_points(points: Vec<MetricPoint>) -> Self {
        let capacity = points.len();
        Self {
            points: points.into(),
            capacity,
        }
    }

    /// Drops the oldest sample and appends the successor of the newest.
    /// Returns the appended sample, or `None` for a zero-length window.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> Option<MetricPoint> {
        let next = generate_next_point(self.points.back()?, rng);
        self.points.pop_front();
        self.points.push_back(next);
        debug_assert_eq!(self.points.len(), self.capacity);
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&MetricPoint> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&MetricPoint> {
        self.points.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> Vec<MetricPoint> {
        self.iter().copied().collect()
    }
}
