use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::info;

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::event::Event;
use crate::format::short_address;
use crate::telemetry::dashboard::DashboardMetrics;
use crate::telemetry::random::RandomSource;
use crate::telemetry::realtime::RealTimeMetrics;
use crate::telemetry::ticker::{Tick, TickSource};
use crate::ui::theme::Theme;

pub const MIN_CHART_PERIOD: Duration = Duration::from_millis(500);
pub const MAX_CHART_PERIOD: Duration = Duration::from_millis(10_000);
pub const CHART_PERIOD_STEP: Duration = Duration::from_millis(500);
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// How the status bar should color a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connected { address: String },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn label(&self) -> String {
        match self {
            WalletState::Disconnected => "Not connected".to_string(),
            WalletState::Connected { address } => short_address(address),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub connect: KeyCode,
    pub cycle_theme: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
    pub refresh: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            connect: parse_key(&kb.connect).unwrap_or(KeyCode::Char('w')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
            faster: parse_key(&kb.faster).unwrap_or(KeyCode::Char('+')),
            slower: parse_key(&kb.slower).unwrap_or(KeyCode::Char('-')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.connect), "Connect/disconnect wallet"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.faster), "Faster live chart"),
            (key_label(self.slower), "Slower live chart"),
            (key_label(self.refresh), "Advance metrics now"),
            (key_label(self.help), "Toggle help"),
        ];
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub wallet: WalletState,
    wallet_address: String,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub status_message: Option<StatusMessage>,
    pub chart: RealTimeMetrics,
    pub dashboard: DashboardMetrics,
    pub keybinds: ResolvedKeybinds,
    events: mpsc::UnboundedSender<Event>,
}

impl App {
    /// Builds the app; with `wallet.auto_connect` the dashboard is mounted
    /// immediately, which needs a running tokio runtime.
    pub fn new(
        config: Config,
        rng: Box<dyn RandomSource>,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let configured = Duration::from_millis(config.chart.refresh_rate_ms);
        let chart_period = clamp_chart_period(configured);
        let chart = RealTimeMetrics::new(config.chart.window_len, chart_period, rng);
        let dashboard = DashboardMetrics::new(config.metrics, config.earnings.settings());

        let mut app = App {
            running: true,
            wallet: WalletState::Disconnected,
            wallet_address: config.wallet.address,
            input_mode: InputMode::Normal,
            theme: Theme::from_config(&config.general.theme),
            status_message: None,
            chart,
            dashboard,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            events,
        };
        if config.wallet.auto_connect {
            app.connect_wallet();
        }
        app
    }

    pub fn is_dashboard_mounted(&self) -> bool {
        self.wallet.is_connected()
    }

    /// Routes a controller tick. Returns true when visible state changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        match tick.source {
            TickSource::Chart => self.chart.on_tick(tick),
            TickSource::Earnings => self.dashboard.on_tick(tick),
        }
    }

    /// Expires stale status messages. Returns true when one was cleared.
    pub fn housekeeping(&mut self) -> bool {
        if let Some(status) = &self.status_message
            && status.created.elapsed() >= STATUS_TTL
        {
            self.status_message = None;
            return true;
        }
        false
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.connect {
            return Action::ToggleWallet;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        // Chart controls only mean something while the dashboard is mounted.
        if !self.is_dashboard_mounted() {
            return Action::None;
        }
        if code == kb.faster {
            return Action::FasterChart;
        }
        if code == kb.slower {
            return Action::SlowerChart;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.disconnect_wallet();
                self.running = false;
            }
            Action::ToggleWallet => {
                if self.wallet.is_connected() {
                    self.disconnect_wallet();
                    self.set_status("Wallet disconnected", StatusKind::Warn);
                } else {
                    self.connect_wallet();
                    let text = format!("Connected {}", self.wallet.label());
                    self.set_status(text, StatusKind::Ok);
                }
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::CycleTheme => {
                self.theme = self.theme.next();
            }
            Action::FasterChart => {
                let period = self.chart.period().saturating_sub(CHART_PERIOD_STEP);
                self.set_chart_period(period);
            }
            Action::SlowerChart => {
                let period = self.chart.period() + CHART_PERIOD_STEP;
                self.set_chart_period(period);
            }
            Action::Refresh => {
                self.chart.advance();
                self.dashboard.accrue();
            }
            Action::None => {}
        }
    }

    fn set_chart_period(&mut self, period: Duration) {
        let period = clamp_chart_period(period);
        self.chart.set_period(period, &self.events);
        self.set_status(
            format!("Live feed every {} ms", period.as_millis()),
            StatusKind::Ok,
        );
    }

    fn connect_wallet(&mut self) {
        if self.wallet.is_connected() {
            return;
        }
        self.wallet = WalletState::Connected {
            address: self.wallet_address.clone(),
        };
        self.dashboard.activate(&self.events);
        self.chart.activate(&self.events);
        info!(address = %self.wallet_address, "dashboard mounted");
    }

    fn disconnect_wallet(&mut self) {
        if !self.wallet.is_connected() {
            return;
        }
        self.chart.deactivate();
        self.dashboard.deactivate();
        self.wallet = WalletState::Disconnected;
        info!("dashboard unmounted");
    }

    fn set_status(&mut self, msg: impl Into<String>, kind: StatusKind) {
        self.status_message = Some(StatusMessage::new(msg, kind));
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}

/// Chart periods outside [`MIN_CHART_PERIOD`, `MAX_CHART_PERIOD`] are pulled to the nearest bound.
pub fn clamp_chart_period(period: Duration) -> Duration {
    period.clamp(MIN_CHART_PERIOD, MAX_CHART_PERIOD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::random::ScriptedRandom;

    fn make_app(config: Config) -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let rng = Box::new(ScriptedRandom::new([5, -3, 12, 0, -8]));
        (App::new(config, rng, tx), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn starts_on_landing_with_controllers_idle() {
        let (app, _rx) = make_app(Config::default());
        assert!(!app.is_dashboard_mounted());
        assert!(!app.chart.is_active());
        assert!(!app.dashboard.is_active());
        assert_eq!(app.wallet.label(), "Not connected");
    }

    #[tokio::test]
    async fn auto_connect_mounts_dashboard() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        let (app, _rx) = make_app(config);
        assert!(app.is_dashboard_mounted());
        assert!(app.chart.is_active());
        assert!(app.dashboard.is_active());
        assert_eq!(app.chart.window().len(), 10);
    }

    #[tokio::test]
    async fn toggle_wallet_activates_and_deactivates_controllers() {
        let (mut app, _rx) = make_app(Config::default());
        app.dispatch(Action::ToggleWallet);
        assert!(app.chart.is_active());
        assert!(app.dashboard.is_active());
        let status = app.status_message.as_ref().unwrap();
        assert!(status.text.starts_with("Connected"));
        assert_eq!(status.kind, StatusKind::Ok);

        app.dispatch(Action::ToggleWallet);
        assert!(!app.chart.is_active());
        assert!(!app.dashboard.is_active());
        assert_eq!(app.wallet, WalletState::Disconnected);
        assert_eq!(app.status_message.as_ref().unwrap().kind, StatusKind::Warn);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_route_to_their_controller() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        let (mut app, mut rx) = make_app(config);

        let mut earnings_ticks = 0;
        let mut chart_ticks = 0;
        while earnings_ticks < 2 || chart_ticks < 2 {
            if let Some(Event::Tick(tick)) = rx.recv().await {
                assert!(app.on_tick(tick));
                match tick.source {
                    TickSource::Chart => chart_ticks += 1,
                    TickSource::Earnings => earnings_ticks += 1,
                }
            }
        }
        assert_eq!(app.dashboard.earnings().ticks(), 2);
        assert_eq!(
            app.dashboard.metrics().last().unwrap().value,
            "450.0084 RIT"
        );
    }

    #[tokio::test]
    async fn chart_period_steps_are_clamped() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        config.chart.refresh_rate_ms = 1000;
        let (mut app, _rx) = make_app(config);

        app.dispatch(Action::FasterChart);
        assert_eq!(app.chart.period(), MIN_CHART_PERIOD);
        app.dispatch(Action::FasterChart);
        assert_eq!(app.chart.period(), MIN_CHART_PERIOD);

        let window = app.chart.points();
        app.dispatch(Action::SlowerChart);
        assert_eq!(app.chart.period(), Duration::from_millis(1000));
        assert_eq!(app.chart.points(), window);
    }

    #[tokio::test]
    async fn configured_period_is_clamped() {
        let mut config = Config::default();
        config.chart.refresh_rate_ms = 60_000;
        let (app, _rx) = make_app(config);
        assert_eq!(app.chart.period(), MAX_CHART_PERIOD);
    }

    #[tokio::test]
    async fn refresh_advances_both_controllers() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        let (mut app, _rx) = make_app(config);
        let before = app.chart.points();

        app.dispatch(Action::Refresh);
        assert_eq!(app.dashboard.earnings().ticks(), 1);
        assert_eq!(&app.chart.points()[..9], &before[1..]);
    }

    #[tokio::test]
    async fn chart_keys_ignored_on_landing() {
        let (app, _rx) = make_app(Config::default());
        assert_eq!(app.map_key(key(KeyCode::Char('+'))), Action::None);
        assert_eq!(app.map_key(key(KeyCode::Char('r'))), Action::None);
        assert_eq!(app.map_key(key(KeyCode::Char('w'))), Action::ToggleWallet);
    }

    #[tokio::test]
    async fn default_keybinds_when_connected() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        let (app, _rx) = make_app(config);

        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.map_key(key(KeyCode::Char('+'))), Action::FasterChart);
        assert_eq!(app.map_key(key(KeyCode::Char('-'))), Action::SlowerChart);
        assert_eq!(app.map_key(key(KeyCode::Char('r'))), Action::Refresh);
        assert_eq!(app.map_key(key(KeyCode::Char('t'))), Action::CycleTheme);

        // Ctrl+C always quits
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(ctrl_c), Action::Quit);
    }

    #[tokio::test]
    async fn custom_keybind_remap_works() {
        let mut config = Config::default();
        config.keybinds.quit = "x".to_string();
        let (app, _rx) = make_app(config);

        assert_eq!(app.map_key(key(KeyCode::Char('x'))), Action::Quit);
        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::None);
    }

    #[tokio::test]
    async fn help_mode_blocks_other_keys() {
        let (mut app, _rx) = make_app(Config::default());

        app.dispatch(Action::ToggleHelp);
        assert!(app.show_help());
        assert_eq!(app.map_key(key(KeyCode::Char('q'))), Action::None);
        assert_eq!(app.map_key(key(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(app.map_key(key(KeyCode::Esc)), Action::ToggleHelp);

        app.dispatch(Action::ToggleHelp);
        assert!(!app.show_help());
    }

    #[tokio::test]
    async fn quit_unmounts_dashboard() {
        let mut config = Config::default();
        config.wallet.auto_connect = true;
        let (mut app, _rx) = make_app(config);
        app.dispatch(Action::Quit);
        assert!(!app.running);
        assert!(!app.chart.is_active());
        assert!(!app.dashboard.is_active());
    }

    #[tokio::test]
    async fn housekeeping_keeps_fresh_status() {
        let (mut app, _rx) = make_app(Config::default());
        app.dispatch(Action::ToggleWallet);
        assert!(!app.housekeeping());
        assert!(app.status_message.is_some());

        app.status_message = Some(StatusMessage {
            text: "old".to_string(),
            kind: StatusKind::Ok,
            created: Instant::now() - STATUS_TTL,
        });
        assert!(app.housekeeping());
        assert!(app.status_message.is_none());
    }
}
