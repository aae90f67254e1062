use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::descriptors::{Icon, MetricDescriptor, Tone, with_dynamic};
use super::earnings::{EARNINGS_INCREMENT, EARNINGS_UNIT, EarningsAccumulator, INITIAL_EARNINGS};
use super::ticker::{PeriodicTask, Tick, TickSource};

pub const EARNINGS_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub struct EarningsSettings {
    pub initial: f64,
    pub increment: f64,
    pub period: Duration,
    pub unit: String,
}

impl Default for EarningsSettings {
    fn default() -> Self {
        Self {
            initial: INITIAL_EARNINGS,
            increment: EARNINGS_INCREMENT,
            period: EARNINGS_PERIOD,
            unit: EARNINGS_UNIT.to_string(),
        }
    }
}

/// The metric card list: externally supplied static cards plus a live
/// earnings card that grows on every tick while active.
pub struct DashboardMetrics {
    static_metrics: Vec<MetricDescriptor>,
    settings: EarningsSettings,
    earnings: EarningsAccumulator,
    task: Option<PeriodicTask>,
    generation: u64,
}

impl DashboardMetrics {
    pub fn new(static_metrics: Vec<MetricDescriptor>, settings: EarningsSettings) -> Self {
        let earnings = EarningsAccumulator::new(settings.initial, settings.increment);
        Self {
            static_metrics,
            settings,
            earnings,
            task: None,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn earnings(&self) -> &EarningsAccumulator {
        &self.earnings
    }

    pub fn activate<E>(&mut self, events: &mpsc::UnboundedSender<E>)
    where
        E: From<Tick> + Send + 'static,
    {
        if self.is_active() {
            return;
        }
        self.earnings = EarningsAccumulator::new(self.settings.initial, self.settings.increment);
        self.generation += 1;
        let task = PeriodicTask::spawn(
            TickSource::Earnings,
            self.generation,
            self.settings.period,
            events,
        );
        info!(
            generation = task.generation(),
            initial = self.settings.initial,
            period_ms = self.settings.period.as_millis() as u64,
            "earnings metrics activated"
        );
        self.task = Some(task);
    }

    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            info!(ticks = self.earnings.ticks(), "earnings metrics deactivated");
        }
    }

    /// Applies `tick` if it came from the installed timer.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        match &self.task {
            Some(task) if task.owns(tick) => {
                self.accrue();
                true
            }
            _ => false,
        }
    }

    /// One accrual step outside of the timer. No-op while idle.
    pub fn accrue(&mut self) {
        if !self.is_active() {
            return;
        }
        self.earnings.tick();
        debug!(value = self.earnings.value(), "earnings accrued");
    }

    pub fn earnings_metric(&self) -> MetricDescriptor {
        MetricDescriptor {
            id: "earnings".to_string(),
            name: "Est. Earnings".to_string(),
            value: self.earnings.formatted(&self.settings.unit),
            status: "Pending payout".to_string(),
            status_tone: Tone::Amber,
            icon: Icon::Wallet,
            tone: Tone::Amber,
        }
    }

    /// All cards, static ones first and earnings last.
    pub fn metrics(&self) -> Vec<MetricDescriptor> {
        with_dynamic(&self.static_metrics, self.earnings_metric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::descriptors::default_static_metrics;
    use insta::assert_snapshot;

    fn dashboard() -> DashboardMetrics {
        DashboardMetrics::new(default_static_metrics(), EarningsSettings::default())
    }

    fn card_lines(metrics: &[MetricDescriptor]) -> String {
        metrics
            .iter()
            .map(|m| format!("{} | {} | {} | {}", m.id, m.name, m.value, m.status))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn earnings_card_is_last() {
        let (tx, _rx) = mpsc::unbounded_channel::<Tick>();
        let mut dash = dashboard();
        dash.activate(&tx);

        assert_snapshot!(card_lines(&dash.metrics()), @r"
        nodes | Active Nodes | 3 | Operational
        jobs | Total Compute Jobs | 1,284 | +12% this week
        latency | Network Latency | 24ms | Optimal
        earnings | Est. Earnings | 450.0000 RIT | Pending payout
        ");
    }

    #[tokio::test(start_paused = true)]
    async fn k_ticks_accrue_linearly() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
        let mut dash = dashboard();
        let start = tokio::time::Instant::now();
        dash.activate(&tx);

        for _ in 0..5 {
            let tick = rx.recv().await.unwrap();
            assert!(dash.on_tick(tick));
        }
        assert_eq!(start.elapsed(), Duration::from_millis(10_000));
        let expected = 450.0 + 0.0042 * 5.0;
        assert!((dash.earnings().value() - expected).abs() < 1e-4);
        assert_eq!(dash.metrics().last().unwrap().value, "450.0210 RIT");
    }

    #[tokio::test(start_paused = true)]
    async fn deactivation_freezes_value() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
        let mut dash = dashboard();
        dash.activate(&tx);
        let tick = rx.recv().await.unwrap();
        dash.on_tick(tick);

        dash.deactivate();
        assert!(!dash.on_tick(tick));
        dash.accrue();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(dash.earnings_metric().value, "450.0042 RIT");
    }

    #[tokio::test]
    async fn idle_dashboard_ignores_foreign_ticks() {
        let mut dash = dashboard();
        let stray = Tick {
            source: TickSource::Earnings,
            generation: 1,
        };
        assert!(!dash.on_tick(stray));
        assert_eq!(dash.earnings().ticks(), 0);
    }

    #[tokio::test]
    async fn custom_unit_and_static_overrides() {
        let (tx, _rx) = mpsc::unbounded_channel::<Tick>();
        let settings = EarningsSettings {
            unit: "ETH".to_string(),
            initial: 1.5,
            ..EarningsSettings::default()
        };
        let mut dash = DashboardMetrics::new(Vec::new(), settings);
        dash.activate(&tx);
        let metrics = dash.metrics();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].value, "1.5000 ETH");
    }

    #[tokio::test(start_paused = true)]
    async fn activating_twice_keeps_earnings_and_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
        let mut dash = dashboard();
        dash.activate(&tx);
        let first = rx.recv().await.unwrap();
        assert!(dash.on_tick(first));

        dash.activate(&tx);
        assert!(dash.is_active());
        assert_eq!(dash.earnings().ticks(), 1);
        assert_eq!(dash.earnings_metric().value, "450.0042 RIT");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.generation, first.generation);
        assert!(dash.on_tick(second));
        assert_eq!(dash.earnings_metric().value, "450.0084 RIT");
    }
}
