//! Configuration resolution from flags and environment.
//!
//! Precedence per field, highest first:
//! 1. command-line flag
//! 2. environment variable
//! 3. built-in default

use crate::config::cli::CliArgs;
use crate::config::env::{
    ConfigEnv, ENV_CREDENTIAL, ENV_HOST, ENV_LOG_LEVEL, ENV_PORT, ENV_TRANSPORT,
};
use crate::config::error::ConfigResult;
use crate::config::schema::{
    LoggingLevel, ResolvedConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TRANSPORT,
};
use crate::config::state::SharedConfig;
use crate::config::validation::{validate_options, RawOptions, Sourced, ValueSource};

/// Resolve, validate and publish configuration into `state`.
///
/// On success every field of `state` is replaced and it is marked ready. On
/// failure `state` is left exactly as it was.
pub fn resolve<I, T>(args: I, env: &ConfigEnv, state: &SharedConfig) -> ConfigResult<ResolvedConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let config = resolve_config(args, env)?;
    state.publish(config.clone());
    Ok(config)
}

/// Resolve and validate without touching any shared state.
pub fn resolve_config<I, T>(args: I, env: &ConfigEnv) -> ConfigResult<ResolvedConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let cli = CliArgs::parse_lenient(args)?;
    let raw = apply_precedence(cli, env);
    let config = validate_options(&raw)?;

    tracing::debug!(
        transport = %config.transport,
        transport_source = raw.transport.source.as_str(),
        port = config.port,
        port_source = raw.port.source.as_str(),
        host = %config.host,
        host_source = raw.host.source.as_str(),
        logging_level = %config.logging_level,
        logging_level_source = raw.logging_level.source.as_str(),
        credential_source = raw.credential.source.as_str(),
        "Configuration resolved"
    );

    Ok(config)
}

/// Resolve from the real process arguments and environment.
pub fn resolve_from_process(state: &SharedConfig) -> ConfigResult<ResolvedConfig> {
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    resolve(args, &ConfigEnv::from_process(), state)
}

/// Pick flag, then env, then default for every field.
pub fn apply_precedence(cli: CliArgs, env: &ConfigEnv) -> RawOptions {
    let default_port = DEFAULT_PORT.to_string();
    RawOptions {
        credential: pick(cli.credential, env, ENV_CREDENTIAL, ""),
        logging_level: pick(
            cli.logging_level,
            env,
            ENV_LOG_LEVEL,
            LoggingLevel::default().as_str(),
        ),
        transport: pick(cli.transport, env, ENV_TRANSPORT, DEFAULT_TRANSPORT.as_str()),
        port: pick(cli.port, env, ENV_PORT, &default_port),
        host: pick(cli.host, env, ENV_HOST, DEFAULT_HOST),
    }
}

fn pick(flag: Option<String>, env: &ConfigEnv, var: &str, default: &str) -> Sourced {
    if let Some(value) = flag {
        return Sourced::new(value, ValueSource::Flag);
    }
    match env.get(var) {
        Some(value) => Sourced::new(value, ValueSource::Env),
        None => Sourced::new(default, ValueSource::Default),
    }
}
