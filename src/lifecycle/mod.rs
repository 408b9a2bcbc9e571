//! Lifecycle management subsystem.
//!
//! ```text
//! Startup (startup.rs):
//!     .env → logging → resolve config (or accept hosted config) → transport
//! ```
//!
//! Configuration must be in place before a transport is started; nothing in
//! this crate starts one.

pub mod startup;

pub use startup::{bootstrap, bootstrap_hosted};
