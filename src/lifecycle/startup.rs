//! Startup orchestration.
//!
//! # Responsibilities
//! - Produce a ready `SharedConfig` before any transport starts
//! - Offer the same for hosted launches with injected configuration
//!
//! # Design Decisions
//! - Fail fast: a configuration error stops startup, nothing is started
//! - The caller decides how to report the error and exit

use std::sync::Arc;

use crate::config::{resolver, ConfigEnv, ConfigResult, HostedConfig, SharedConfig};

/// Resolve configuration from `args` and `env` into a fresh shared state.
pub fn bootstrap<I, T>(args: I, env: &ConfigEnv) -> ConfigResult<Arc<SharedConfig>>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let state = Arc::new(SharedConfig::new());
    resolver::resolve(args, env, &state)?;
    Ok(state)
}

/// Resolve configuration from the real process arguments and environment.
pub fn bootstrap_from_process() -> ConfigResult<Arc<SharedConfig>> {
    let state = Arc::new(SharedConfig::new());
    resolver::resolve_from_process(&state)?;
    Ok(state)
}

/// Build shared state from configuration injected by a hosting platform.
///
/// The state is not marked ready; hosted launches skip flag/env resolution.
pub fn bootstrap_hosted(hosted: &HostedConfig) -> Arc<SharedConfig> {
    let state = Arc::new(SharedConfig::new());
    state.merge(hosted);
    tracing::info!("Using hosted configuration");
    state
}
