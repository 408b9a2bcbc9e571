//! Configuration schema definitions.
//!
//! This module declares the hosted configuration contract (the fields a
//! hosting platform may inject) and the closed set of logging levels. The
//! level list here is the only place valid levels are defined; the resolver
//! and the shared state both check membership through [`LoggingLevel`].

use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Logging levels accepted by the server, lowest severity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Debug,
    #[default]
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl LoggingLevel {
    /// Every valid level, in severity order.
    pub const ALL: [LoggingLevel; 8] = [
        LoggingLevel::Debug,
        LoggingLevel::Info,
        LoggingLevel::Notice,
        LoggingLevel::Warning,
        LoggingLevel::Error,
        LoggingLevel::Critical,
        LoggingLevel::Alert,
        LoggingLevel::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LoggingLevel::Debug => "debug",
            LoggingLevel::Info => "info",
            LoggingLevel::Notice => "notice",
            LoggingLevel::Warning => "warning",
            LoggingLevel::Error => "error",
            LoggingLevel::Critical => "critical",
            LoggingLevel::Alert => "alert",
            LoggingLevel::Emergency => "emergency",
        }
    }

    /// Membership check against the declared level set.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<LoggingLevel>().is_ok()
    }

    /// Comma separated list of valid levels, used in diagnostics.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Closest `tracing` filter for this level.
    ///
    /// `tracing` has no notice/critical/alert/emergency, so those collapse
    /// into the nearest level below them.
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Info | LoggingLevel::Notice => LevelFilter::INFO,
            LoggingLevel::Warning => LevelFilter::WARN,
            LoggingLevel::Error
            | LoggingLevel::Critical
            | LoggingLevel::Alert
            | LoggingLevel::Emergency => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the declared logging levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLoggingLevel(pub String);

impl fmt::Display for UnknownLoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logging level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLoggingLevel {}

impl FromStr for LoggingLevel {
    type Err = UnknownLoggingLevel;

    // Exact match only: the hosting platform sends lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLoggingLevel(s.to_string()))
    }
}

/// Built-in transport default.
pub const DEFAULT_TRANSPORT: Transport = Transport::Http;
/// Built-in HTTP port default.
pub const DEFAULT_PORT: u16 = 8080;
/// Built-in HTTP host default.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// How the server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Stdio,
    #[default]
    Http,
}

impl Transport {
    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Http => "http",
        }
    }

    /// Exact, case-sensitive match on `stdio` / `http`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "stdio" => Some(Transport::Stdio),
            "http" => Some(Transport::Http),
            _ => None,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated configuration produced by one resolution pass.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub transport: Transport,

    /// Listen port. Only meaningful for http transport.
    pub port: u16,

    /// Listen host. Only meaningful for http transport.
    pub host: String,

    /// Upstream API credential. Never logged.
    pub credential: String,

    pub logging_level: LoggingLevel,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            transport: DEFAULT_TRANSPORT,
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            credential: String::new(),
            logging_level: LoggingLevel::default(),
        }
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let credential = if self.credential.is_empty() {
            ""
        } else {
            crate::config::REDACTED
        };
        f.debug_struct("ResolvedConfig")
            .field("transport", &self.transport)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("credential", &credential)
            .field("logging_level", &self.logging_level)
            .finish()
    }
}

/// Configuration injected by a hosting platform instead of argv/env.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostedConfig {
    /// Your API key
    #[serde(alias = "braveApiKey")]
    pub credential: String,

    /// Desired logging level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_level: Option<LoggingLevel>,
}

impl HostedConfig {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            logging_level: None,
        }
    }

    pub fn with_logging_level(mut self, level: LoggingLevel) -> Self {
        self.logging_level = Some(level);
        self
    }
}

impl fmt::Debug for HostedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedConfig")
            .field("credential", &crate::config::REDACTED)
            .field("logging_level", &self.logging_level)
            .finish()
    }
}

/// JSON Schema describing [`HostedConfig`], for hosting platforms that
/// present or validate configuration before launching the server.
pub fn hosted_config_schema() -> Schema {
    schemars::schema_for!(HostedConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_membership() {
        for level in LoggingLevel::ALL {
            assert!(LoggingLevel::is_valid(level.as_str()));
        }
        assert!(!LoggingLevel::is_valid("verbose"));
        assert!(!LoggingLevel::is_valid("INFO"));
        assert!(!LoggingLevel::is_valid(""));
    }

    #[test]
    fn test_valid_values_lists_every_level() {
        assert_eq!(
            LoggingLevel::valid_values(),
            "debug, info, notice, warning, error, critical, alert, emergency"
        );
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(LoggingLevel::default(), LoggingLevel::Info);
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LoggingLevel::Notice.as_level_filter(), LevelFilter::INFO);
        assert_eq!(LoggingLevel::Warning.as_level_filter(), LevelFilter::WARN);
        assert_eq!(LoggingLevel::Emergency.as_level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn test_transport_parse_is_exact() {
        assert_eq!(Transport::parse("stdio"), Some(Transport::Stdio));
        assert_eq!(Transport::parse("http"), Some(Transport::Http));
        assert_eq!(Transport::parse("HTTP"), None);
        assert_eq!(Transport::parse("ws"), None);
    }

    #[test]
    fn test_resolved_defaults() {
        let config = ResolvedConfig::default();
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.credential.is_empty());
        assert_eq!(config.logging_level, LoggingLevel::Info);
    }

    #[test]
    fn test_resolved_debug_redacts_credential() {
        let config = ResolvedConfig {
            credential: "sk-123".into(),
            ..ResolvedConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-123"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_hosted_config_accepts_legacy_key() {
        let hosted: HostedConfig =
            serde_json::from_str(r#"{"braveApiKey":"abc","loggingLevel":"debug"}"#).unwrap();
        assert_eq!(hosted.credential, "abc");
        assert_eq!(hosted.logging_level, Some(LoggingLevel::Debug));
    }

    #[test]
    fn test_hosted_config_rejects_unknown_level() {
        let res: Result<HostedConfig, _> =
            serde_json::from_str(r#"{"credential":"abc","loggingLevel":"loud"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_hosted_config_debug_redacts_credential() {
        let hosted = HostedConfig::new("super-secret");
        let rendered = format!("{:?}", hosted);
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_schema_describes_hosted_fields() {
        let schema = serde_json::to_value(hosted_config_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("credential").is_some());
        assert!(properties.get("loggingLevel").is_some());
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "credential"));
        assert!(!required.iter().any(|v| v == "loggingLevel"));
    }
}
