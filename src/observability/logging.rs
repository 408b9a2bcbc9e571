//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber before configuration is resolved
//! - Switch to the resolved logging level once it is known
//!
//! # Design Decisions
//! - Events go to stderr; stdout belongs to the stdio transport
//! - `RUST_LOG`, when set, always wins over the configured level
//! - The filter sits behind a reload layer so it can change after startup

use thiserror::Error;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::LoggingLevel;

/// Errors from the logging subsystem.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change log level: {0}")]
    Reload(#[from] reload::Error),
}

/// Handle for changing the active level after initialization.
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    env_override: bool,
}

impl LogLevelHandle {
    /// Apply the resolved logging level, unless `RUST_LOG` is in control.
    pub fn apply(&self, level: LoggingLevel) -> Result<(), LoggingError> {
        if self.env_override {
            tracing::debug!(%level, "RUST_LOG set, keeping its filter");
            return Ok(());
        }
        self.handle.reload(filter_for(level))?;
        tracing::debug!(%level, "Log level applied");
        Ok(())
    }
}

/// Filter admitting events at or above `level`.
pub fn filter_for(level: LoggingLevel) -> EnvFilter {
    EnvFilter::default().add_directive(level.as_level_filter().into())
}

/// Filter from `env_var` when set and valid, else the default level.
/// The flag reports whether the variable is in control.
fn initial_filter(env_var: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_from_env(env_var) {
        Ok(filter) => (filter, true),
        Err(_) => (filter_for(LoggingLevel::default()), false),
    }
}

/// Install the global subscriber at the default level (`info`).
pub fn init_logging() -> Result<LogLevelHandle, LoggingError> {
    let (filter, env_override) = initial_filter(EnvFilter::DEFAULT_ENV);
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(LogLevelHandle {
        handle,
        env_override,
    })
}
