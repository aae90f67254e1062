use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::KeyCode;
use serde::Deserialize;

use crate::telemetry::dashboard::EarningsSettings;
use crate::telemetry::descriptors::{MetricDescriptor, default_static_metrics};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub chart: ChartConfig,
    pub earnings: EarningsConfig,
    pub wallet: WalletConfig,
    pub keybinds: KeybindsConfig,
    pub metrics: Vec<MetricDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: GeneralConfig::default(),
            chart: ChartConfig::default(),
            earnings: EarningsConfig::default(),
            wallet: WalletConfig::default(),
            keybinds: KeybindsConfig::default(),
            metrics: default_static_metrics(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme: String,
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            theme: "dark".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub window_len: usize,
    pub refresh_rate_ms: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            window_len: 10,
            refresh_rate_ms: 2000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EarningsConfig {
    pub initial: f64,
    pub increment: f64,
    pub refresh_rate_ms: u64,
    pub unit: String,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        EarningsConfig {
            initial: 450.0,
            increment: 0.0042,
            refresh_rate_ms: 2000,
            unit: "RIT".to_string(),
        }
    }
}

impl EarningsConfig {
    pub fn settings(&self) -> EarningsSettings {
        EarningsSettings {
            initial: self.initial,
            increment: self.increment,
            period: Duration::from_millis(self.refresh_rate_ms.max(1)),
            unit: self.unit.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub address: String,
    pub auto_connect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        WalletConfig {
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            auto_connect: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub connect: String,
    pub cycle_theme: String,
    pub faster: String,
    pub slower: String,
    pub refresh: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            connect: "w".to_string(),
            cycle_theme: "t".to_string(),
            faster: "+".to_string(),
            slower: "-".to_string(),
            refresh: "r".to_string(),
            help: "?".to_string(),
        }
    }
}

/// Parses a keybind string: a single character or a named key.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("aegis").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.chart.refresh_rate_ms, 2000);
        assert_eq!(config.chart.window_len, 10);
        assert!((config.earnings.initial - 450.0).abs() < f64::EPSILON);
        assert_eq!(config.earnings.unit, "RIT");
        assert_eq!(config.general.theme, "dark");
        assert!(!config.wallet.auto_connect);
        assert_eq!(config.keybinds.quit, "q");
        assert_eq!(config.metrics.len(), 3);
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[chart]
refresh_rate_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chart.refresh_rate_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.chart.window_len, 10);
        assert_eq!(config.earnings.refresh_rate_ms, 2000);
        assert_eq!(config.metrics[0].id, "nodes");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
theme = "light"

[chart]
window_len = 20
refresh_rate_ms = 1000

[earnings]
initial = 12.5
increment = 0.5
unit = "ETH"

[wallet]
address = "0xabc"
auto_connect = true

[keybinds]
quit = "x"

[[metrics]]
id = "gpu"
name = "GPU Hours"
value = "42"
status = "Busy"
tone = "amber"
icon = "activity"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, "light");
        assert_eq!(config.chart.window_len, 20);
        assert_eq!(config.chart.refresh_rate_ms, 1000);
        assert!((config.earnings.increment - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.earnings.unit, "ETH");
        assert_eq!(config.wallet.address, "0xabc");
        assert!(config.wallet.auto_connect);
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.connect, "w");
        assert_eq!(config.metrics.len(), 1);
        assert_eq!(config.metrics[0].name, "GPU Hours");
    }

    #[test]
    fn earnings_settings_follow_config() {
        let mut config = EarningsConfig::default();
        config.refresh_rate_ms = 0;
        let settings = config.settings();
        assert_eq!(settings.period, Duration::from_millis(1));
        assert_eq!(settings.unit, "RIT");
    }

    #[test]
    fn parse_key_names_and_chars() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("+"), Some(KeyCode::Char('+')));
        assert_eq!(parse_key("Escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.chart.refresh_rate_ms, 2000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("aegis_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.chart.refresh_rate_ms, 2000);
        let _ = std::fs::remove_file(&temp);
    }
}
