//! Configuration validation.
//!
//! # Responsibilities
//! - Turn raw option strings into a [`ResolvedConfig`]
//! - Check value ranges and enumeration membership
//!
//! # Design Decisions
//! - Fail fast: checks run in a fixed order and the first failure is returned
//! - Pure: no shared state is touched here, so a failed pass changes nothing
//! - Port and host are only checked for http transport

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::{LoggingLevel, ResolvedConfig, Transport, DEFAULT_PORT};

/// Which input a value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Flag,
    Env,
    Default,
}

impl ValueSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueSource::Flag => "flag",
            ValueSource::Env => "env",
            ValueSource::Default => "default",
        }
    }
}

/// A raw option value together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced {
    pub value: String,
    pub source: ValueSource,
}

impl Sourced {
    pub fn new(value: impl Into<String>, source: ValueSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// True when the value was supplied rather than defaulted.
    pub fn is_explicit(&self) -> bool {
        self.source != ValueSource::Default
    }
}

/// Options after precedence has been applied, before validation.
#[derive(Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub credential: Sourced,
    pub logging_level: Sourced,
    pub transport: Sourced,
    pub port: Sourced,
    pub host: Sourced,
}

impl std::fmt::Debug for RawOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawOptions")
            .field("credential", &self.credential.source)
            .field("logging_level", &self.logging_level)
            .field("transport", &self.transport)
            .field("port", &self.port)
            .field("host", &self.host)
            .finish()
    }
}

/// Parse a port string. `None` unless it is an integer in 1..=65535.
pub fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

/// Validate raw options in order: transport, logging level, credential,
/// then port and host for http.
pub fn validate_options(raw: &RawOptions) -> ConfigResult<ResolvedConfig> {
    let transport =
        Transport::parse(&raw.transport.value).ok_or_else(|| ConfigError::InvalidTransport {
            value: raw.transport.value.clone(),
        })?;

    let logging_level = raw
        .logging_level
        .value
        .parse::<LoggingLevel>()
        .map_err(|e| ConfigError::InvalidLoggingLevel { value: e.0 })?;

    if raw.credential.value.is_empty() {
        return Err(ConfigError::MissingCredential);
    }

    let port = match transport {
        Transport::Http => {
            let port = parse_port(&raw.port.value).ok_or_else(|| ConfigError::InvalidPort {
                value: raw.port.value.clone(),
            })?;
            if raw.host.value.is_empty() {
                return Err(ConfigError::MissingHost);
            }
            port
        }
        Transport::Stdio => {
            warn_ignored_for_stdio(raw);
            parse_port(&raw.port.value).unwrap_or(DEFAULT_PORT)
        }
    };

    Ok(ResolvedConfig {
        transport,
        port,
        host: raw.host.value.clone(),
        credential: raw.credential.value.clone(),
        logging_level,
    })
}

fn warn_ignored_for_stdio(raw: &RawOptions) {
    for (name, option) in [("port", &raw.port), ("host", &raw.host)] {
        if option.is_explicit() {
            tracing::warn!(
                setting = name,
                value = %option.value,
                source = option.source.as_str(),
                "Setting is ignored for stdio transport"
            );
        }
    }
}
