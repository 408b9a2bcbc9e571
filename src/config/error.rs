//! Configuration error definitions.

use thiserror::Error;

use crate::config::schema::LoggingLevel;

/// Where to obtain an API credential.
pub const CREDENTIAL_SIGNUP_URL: &str = "https://brave.com/search/api/";

/// Errors produced while resolving or injecting configuration.
///
/// Validation failures are reported one at a time, in the order the checks
/// run; the first failing check wins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Transport is neither `stdio` nor `http`.
    #[error("Invalid --transport value: '{value}'. Must be one of: stdio, http.")]
    InvalidTransport { value: String },

    /// Logging level is not one of the declared levels.
    #[error(
        "Invalid --logging-level value: '{value}'. Must be one of: {}",
        LoggingLevel::valid_values()
    )]
    InvalidLoggingLevel { value: String },

    /// No credential from flag or environment.
    #[error("--credential is required. You can get one at {}.", CREDENTIAL_SIGNUP_URL)]
    MissingCredential,

    /// Port is not an integer in 1..=65535 (http transport only).
    #[error("Invalid --port value: '{value}'. Must be a valid port number between 1 and 65535.")]
    InvalidPort { value: String },

    /// Host is empty (http transport only).
    #[error("--host is required for http transport")]
    MissingHost,

    /// A recognized flag was malformed, or help/version was requested.
    #[error(transparent)]
    Arguments(#[from] clap::Error),

    /// Hosted configuration object does not match the schema.
    #[error("Invalid hosted configuration: {0}")]
    HostedPayload(#[from] serde_json::Error),
}

/// Discriminant of [`ConfigError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    InvalidTransport,
    InvalidLoggingLevel,
    MissingCredential,
    InvalidPort,
    MissingHost,
    Arguments,
    HostedPayload,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::InvalidTransport { .. } => ConfigErrorKind::InvalidTransport,
            ConfigError::InvalidLoggingLevel { .. } => ConfigErrorKind::InvalidLoggingLevel,
            ConfigError::MissingCredential => ConfigErrorKind::MissingCredential,
            ConfigError::InvalidPort { .. } => ConfigErrorKind::InvalidPort,
            ConfigError::MissingHost => ConfigErrorKind::MissingHost,
            ConfigError::Arguments(_) => ConfigErrorKind::Arguments,
            ConfigError::HostedPayload(_) => ConfigErrorKind::HostedPayload,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
