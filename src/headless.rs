use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::app::clamp_chart_period;
use crate::config::Config;
use crate::telemetry::dashboard::DashboardMetrics;
use crate::telemetry::descriptors::MetricDescriptor;
use crate::telemetry::generator::MetricPoint;
use crate::telemetry::random::RandomSource;
use crate::telemetry::realtime::RealTimeMetrics;
use crate::telemetry::ticker::Tick;

#[derive(Debug, Serialize)]
pub struct DashboardCapture {
    pub ticks: u64,
    pub chart_period_ms: u64,
    pub window: Vec<MetricPoint>,
    pub metrics: Vec<MetricDescriptor>,
}

/// Mounts both controllers, applies `ticks` manual advances to each and
/// returns the resulting state. Timers are installed but never awaited.
/// The chart period is clamped the same way the interactive app clamps it.
pub fn capture(config: Config, rng: Box<dyn RandomSource>, ticks: u64) -> DashboardCapture {
    let (tx, _rx) = mpsc::unbounded_channel::<Tick>();
    let period = clamp_chart_period(Duration::from_millis(config.chart.refresh_rate_ms));

    let mut chart = RealTimeMetrics::new(config.chart.window_len, period, rng);
    let mut dashboard = DashboardMetrics::new(config.metrics, config.earnings.settings());
    chart.activate(&tx);
    dashboard.activate(&tx);

    for _ in 0..ticks {
        chart.advance();
        dashboard.accrue();
    }

    let snapshot = DashboardCapture {
        ticks,
        chart_period_ms: period.as_millis() as u64,
        window: chart.points(),
        metrics: dashboard.metrics(),
    };
    chart.deactivate();
    dashboard.deactivate();
    snapshot
}
