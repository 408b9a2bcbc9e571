//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv ─→ cli.rs (recognized flags only)
//!              │
//! env ──→ env.rs (recognized vars only)
//!              │
//!              ▼
//!        resolver.rs (flag > env > default)
//!              │
//!              ▼
//!        validation.rs (ordered checks, first failure wins)
//!              │
//!              ▼
//!        state.rs: SharedConfig (ready = true)
//!              ▲
//! hosted platform ── HostedConfig ── merge (ready unchanged)
//! ```
//!
//! # Design Decisions
//! - Resolution happens once, before any transport starts
//! - Validation is pure; only a successful pass writes shared state
//! - Shared state is an owned object passed to subsystems, not a global

pub mod cli;
pub mod env;
pub mod error;
pub mod resolver;
pub mod schema;
pub mod state;
pub mod validation;

pub use env::ConfigEnv;
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use resolver::{resolve, resolve_config};
pub use schema::{hosted_config_schema, HostedConfig, LoggingLevel, ResolvedConfig, Transport};
pub use state::{ConfigSnapshot, SharedConfig};

/// Placeholder shown instead of secret values.
pub const REDACTED: &str = "[REDACTED]";
