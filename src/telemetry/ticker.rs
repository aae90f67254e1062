use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Which controller a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSource {
    Chart,
    Earnings,
}

/// One firing of a controller's periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub source: TickSource,
    pub generation: u64,
}

/// An owned periodic timer. The underlying task is aborted on `cancel` or drop.
#[derive(Debug)]
pub struct PeriodicTask {
    tick: Tick,
    period: Duration,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Sends one tick every `period`, starting one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<E>(
        source: TickSource,
        generation: u64,
        period: Duration,
        events: &mpsc::UnboundedSender<E>,
    ) -> Self
    where
        E: From<Tick> + Send + 'static,
    {
        let tick = Tick { source, generation };
        let tx = events.clone();
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(E::from(tick)).is_err() {
                    break;
                }
            }
        });

        Self {
            tick,
            period,
            handle,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.tick.generation
    }

    /// True if `tick` was produced by this timer.
    pub fn owns(&self, tick: Tick) -> bool {
        self.tick == tick
    }

    pub fn cancel(self) {
        // Drop does the abort.
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_arrives_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
        let start = Instant::now();
        let _task = PeriodicTask::spawn(TickSource::Chart, 1, Duration::from_millis(2000), &tx);

        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.source, TickSource::Chart);
        assert_eq!(tick.generation, 1);
        assert_eq!(start.elapsed(), Duration::from_millis(2000));

        rx.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_stops_sending() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
        let task = PeriodicTask::spawn(TickSource::Earnings, 3, Duration::from_millis(500), &tx);
        rx.recv().await.unwrap();

        task.cancel();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn owns_matches_source_and_generation() {
        let (tx, _rx) = mpsc::unbounded_channel::<Tick>();
        let task = PeriodicTask::spawn(TickSource::Chart, 7, Duration::from_millis(100), &tx);
        assert!(task.owns(Tick {
            source: TickSource::Chart,
            generation: 7
        }));
        assert!(!task.owns(Tick {
            source: TickSource::Chart,
            generation: 6
        }));
        assert!(!task.owns(Tick {
            source: TickSource::Earnings,
            generation: 7
        }));
        assert_eq!(task.period(), Duration::from_millis(100));
        assert_eq!(task.generation(), 7);
    }
}
