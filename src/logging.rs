//! Diagnostic logging to standard error.
//!
//! Logging is off unless `FLINT_LOG` or the config file's `logging.level`
//! asks for it, so by default nothing but command output reaches the
//! terminal.

use crate::conf::ConfigurationModel;
use crate::error::{ShellError, ShellResult};
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

pub const LOG_ENV: &str = "FLINT_LOG";

/// Install the global subscriber at the configured level.
pub fn init(config: &ConfigurationModel) -> ShellResult<()> {
    let level = resolve_level(env::var(LOG_ENV).ok().as_deref(), config)?;
    if level == LevelFilter::OFF {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| ShellError::Logging(err.to_string()))
}

/// Pick the level from the environment first, then the config file.
fn resolve_level(env_level: Option<&str>, config: &ConfigurationModel) -> ShellResult<LevelFilter> {
    let raw = env_level
        .filter(|level| !level.trim().is_empty())
        .or(config.logging.level.as_deref());

    match raw {
        None => Ok(LevelFilter::OFF),
        Some(raw) => raw
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ShellError::InvalidLogLevel(raw.to_string())),
    }
}
