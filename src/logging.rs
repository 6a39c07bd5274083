//! File-backed tracing setup for the terminal front end.

use std::fs::File;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global subscriber writing to `config.log_path`.
///
/// Logs go to a file because stdout belongs to the game. Nothing is
/// installed without a log path. Fails if the file cannot be created or a
/// global subscriber is already set.
pub fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("installing tracing subscriber: {err}"))
}
