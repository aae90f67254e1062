use std::fs::{self, File};
use std::path::Path;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Builds the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Routes tracing output to `path`. The terminal is owned by the UI, so
/// logs never go to stdout.
pub fn init_file_logging(path: &Path, default_level: &str) -> Result<(), LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = File::create(path).map_err(open_err)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(env_filter(default_level))
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
