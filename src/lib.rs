//! Configuration resolution for the search MCP server.
//!
//! Flags, environment variables and hosted configuration are resolved into a
//! validated [`ResolvedConfig`] and published through a [`SharedConfig`]
//! that transports and the search client read from.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::{ConfigError, HostedConfig, ResolvedConfig, SharedConfig};
