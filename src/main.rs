//! Search MCP server entry point.
//!
//! Resolves configuration from flags, environment and `.env`, reports the
//! first problem as a single line on stderr, and exits non-zero on failure.
//! On success the effective configuration is logged (credential redacted)
//! and the shared state is ready to hand to a transport.

use std::process::ExitCode;

use brave_search_mcp::config::{env::load_dotenv, ConfigError, Transport};
use brave_search_mcp::lifecycle::startup;
use brave_search_mcp::observability;

fn main() -> ExitCode {
    // Before logging, so RUST_LOG from .env reaches the filter.
    let dotenv = load_dotenv();

    let logging = match observability::init_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: {e}");
            None
        }
    };

    dotenv.log();

    let state = match startup::bootstrap_from_process() {
        Ok(state) => state,
        Err(ConfigError::Arguments(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let snapshot = state.read();
    if let Some(handle) = &logging {
        if let Err(e) = handle.apply(snapshot.logging_level) {
            tracing::warn!(error = %e, "Keeping default log level");
        }
    }

    match snapshot.transport {
        Transport::Http => tracing::info!(
            transport = %snapshot.transport,
            host = %snapshot.host,
            port = snapshot.port,
            logging_level = %snapshot.logging_level,
            "Configuration ready"
        ),
        Transport::Stdio => tracing::info!(
            transport = %snapshot.transport,
            logging_level = %snapshot.logging_level,
            "Configuration ready"
        ),
    }

    ExitCode::SUCCESS
}
