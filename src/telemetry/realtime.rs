use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::clock::ClockTime;
use super::generator::MetricPoint;
use super::random::RandomSource;
use super::ticker::{PeriodicTask, Tick, TickSource};
use super::window::{DEFAULT_WINDOW_LEN, RollingWindow};

/// Refresh period when no caller-specific rate is given.
pub const DEFAULT_REALTIME_PERIOD: Duration = Duration::from_millis(3000);
/// Refresh period used by the usage chart.
pub const CHART_PERIOD: Duration = Duration::from_millis(2000);

/// Owns a rolling window of CPU/memory samples and the timer that advances it.
///
/// Idle until [`activate`](Self::activate); every tick from the installed
/// timer shifts the window by one sample. [`deactivate`](Self::deactivate)
/// cancels the timer, after which the window no longer changes.
pub struct RealTimeMetrics {
    window: RollingWindow,
    window_len: usize,
    period: Duration,
    task: Option<PeriodicTask>,
    generation: u64,
    rng: Box<dyn RandomSource>,
}

impl RealTimeMetrics {
    pub fn new(window_len: usize, period: Duration, rng: Box<dyn RandomSource>) -> Self {
        Self {
            window: RollingWindow::from_points(Vec::new()),
            window_len,
            period,
            task: None,
            generation: 0,
            rng,
        }
    }

    pub fn with_defaults(rng: Box<dyn RandomSource>) -> Self {
        Self::new(DEFAULT_WINDOW_LEN, DEFAULT_REALTIME_PERIOD, rng)
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn points(&self) -> Vec<MetricPoint> {
        self.window.points()
    }

    /// Seeds the window with history ending at the local clock and installs the timer.
    pub fn activate<E>(&mut self, events: &mpsc::UnboundedSender<E>)
    where
        E: From<Tick> + Send + 'static,
    {
        self.activate_at(ClockTime::now(), events);
    }

    pub fn activate_at<E>(&mut self, now: ClockTime, events: &mpsc::UnboundedSender<E>)
    where
        E: From<Tick> + Send + 'static,
    {
        if self.is_active() {
            return;
        }
        self.window = RollingWindow::seeded(self.window_len, now, self.rng.as_mut());
        self.install(events);
        info!(
            window_len = self.window_len,
            period_ms = self.period.as_millis() as u64,
            "chart metrics activated"
        );
    }

    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            info!("chart metrics deactivated");
        }
    }

    /// Changes the refresh period. An active timer is replaced; the window is kept.
    pub fn set_period<E>(&mut self, period: Duration, events: &mpsc::UnboundedSender<E>)
    where
        E: From<Tick> + Send + 'static,
    {
        if period == self.period {
            return;
        }
        self.period = period;
        if let Some(old) = self.task.take() {
            old.cancel();
            self.install(events);
        }
        debug!(period_ms = period.as_millis() as u64, "chart period changed");
    }

    /// Applies `tick` if it came from the currently installed timer.
    /// Returns whether the window changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        match &self.task {
            Some(task) if task.owns(tick) => self.advance().is_some(),
            _ => false,
        }
    }

    /// Advances the window once, outside of the timer. No-op while idle.
    pub fn advance(&mut self) -> Option<MetricPoint> {
        if !self.is_active() {
            return None;
        }
        let next = self.window.advance(self.rng.as_mut())?;
        debug!(time = %next.time, cpu = next.cpu, memory = next.memory, "chart sample");
        Some(next)
    }

    fn install<E>(&mut self, events: &mpsc::UnboundedSender<E>)
    where
        E: From<Tick> + Send + 'static,
    {
        self.generation += 1;
        let task = PeriodicTask::spawn(TickSource::Chart, self.generation, self.period, events);
        debug!(generation = task.generation(), "chart timer installed");
        self.task = Some(task);
    }
}
