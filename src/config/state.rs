//! Process-wide shared configuration.
//!
//! # Lifecycle
//! ```text
//! SharedConfig::new()           ready = false, built-in defaults
//!     → publish(resolved)       ready = true, every field replaced
//!     → merge(hosted)           fields overlaid, ready unchanged
//! ```
//!
//! There is no way back to the initial state. Each write swaps in a whole
//! new [`ConfigSnapshot`], so a reader sees either the old snapshot or the
//! new one, never a mix.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::error::ConfigResult;
use crate::config::schema::{HostedConfig, ResolvedConfig};

/// The current configuration plus whether a resolution pass has completed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigSnapshot {
    pub config: ResolvedConfig,
    pub ready: bool,
}

impl ConfigSnapshot {
    /// Copy of this snapshot with the hosted fields applied on top.
    fn overlay(&self, hosted: &HostedConfig) -> Self {
        let mut next = self.clone();
        next.config.credential = hosted.credential.clone();
        if let Some(level) = hosted.logging_level {
            next.config.logging_level = level;
        }
        next
    }
}

impl std::ops::Deref for ConfigSnapshot {
    type Target = ResolvedConfig;

    fn deref(&self) -> &ResolvedConfig {
        &self.config
    }
}

/// Shared configuration handle. Hand an `Arc<SharedConfig>` to every
/// subsystem that needs configuration.
#[derive(Debug)]
pub struct SharedConfig {
    current: ArcSwap<ConfigSnapshot>,
}

impl SharedConfig {
    /// Create with built-in defaults and `ready = false`.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(ConfigSnapshot::default()),
        }
    }

    /// Current snapshot. Check `ready` before trusting it.
    pub fn read(&self) -> Arc<ConfigSnapshot> {
        self.current.load_full()
    }

    pub fn is_ready(&self) -> bool {
        self.current.load().ready
    }

    /// Replace every field with a resolved configuration and mark ready.
    pub(crate) fn publish(&self, config: ResolvedConfig) -> Arc<ConfigSnapshot> {
        let snapshot = Arc::new(ConfigSnapshot {
            config,
            ready: true,
        });
        self.current.store(Arc::clone(&snapshot));
        snapshot
    }

    /// Overlay hosted configuration onto the current snapshot.
    ///
    /// `credential` always overwrites; `logging_level` only when present.
    /// `ready` is left as it was.
    pub fn merge(&self, hosted: &HostedConfig) -> Arc<ConfigSnapshot> {
        let previous = self
            .current
            .rcu(|current| Arc::new(current.overlay(hosted)));
        let merged = Arc::new(previous.overlay(hosted));

        tracing::debug!(
            logging_level = %merged.config.logging_level,
            ready = merged.ready,
            "Hosted configuration merged"
        );
        merged
    }

    /// Check a raw hosted payload against the schema, then merge it.
    ///
    /// Nothing is changed when the payload is rejected.
    pub fn merge_json(&self, payload: serde_json::Value) -> ConfigResult<Arc<ConfigSnapshot>> {
        let hosted: HostedConfig = serde_json::from_value(payload)?;
        Ok(self.merge(&hosted))
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new()
    }
}
