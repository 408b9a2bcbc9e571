//! Observability subsystem.
//!
//! All subsystems emit `tracing` events; `logging.rs` owns the subscriber
//! and the level it filters at.

pub mod logging;

pub use logging::{init_logging, LogLevelHandle, LoggingError};
