use std::path::PathBuf;
use std::time::Duration;

use aegis::app::App;
use aegis::config::{self, load_config, load_config_from_path};
use aegis::event::{Event, EventHandler};
use aegis::telemetry::random::{RandomSource, StdRandom};
use aegis::{headless, logging, ui};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyEventKind;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "aegis",
    about = "Terminal dashboard for simulated compute-node telemetry"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Live chart refresh rate in milliseconds
    #[arg(long)]
    chart_rate: Option<u64>,

    /// Seed for the telemetry simulation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the wallet connected
    #[arg(long, default_value_t = false)]
    connected: bool,

    /// Print the dashboard state as JSON instead of opening the terminal UI.
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Number of ticks applied in headless mode (0 captures the freshly mounted state).
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Write logs to this file (RUST_LOG overrides the configured level).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli)?;

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, &config.general.log_level)?;
    }

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_entropy()),
    };

    if cli.headless {
        let capture = headless::capture(config, rng, cli.ticks);
        println!("{}", serde_json::to_string_pretty(&capture)?);
        return Ok(());
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config, rng).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    config: config::Config,
    rng: Box<dyn RandomSource>,
) -> Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(500));
    let mut app = App::new(config, rng, events.sender().clone());
    info!("aegis started");

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            let should_draw = match event {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                        true
                    } else {
                        false
                    }
                }
                Event::Tick(tick) => app.on_tick(tick),
                Event::Housekeeping => app.housekeeping(),
                Event::Resize => true,
            };
            if should_draw {
                terminal.draw(|frame| ui::draw(frame, &app))?;
            }
        }
    }

    info!("aegis stopped");
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Result<config::Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.chart_rate {
        if rate == 0 {
            return Err(eyre!("--chart-rate must be greater than 0"));
        }
        config.chart.refresh_rate_ms = rate;
    }
    if cli.connected {
        config.wallet.auto_connect = true;
    }

    Ok(config)
}
