//! Command-line flags.
//!
//! # Responsibilities
//! - Declare the recognized flags (clap derive)
//! - Drop anything unrecognized before clap parses, so hosting platforms can
//!   pass extra options without breaking startup
//!
//! # Design Decisions
//! - Every flag is optional here; defaults and env fallback are applied by
//!   the resolver so precedence lives in one place
//! - Values stay as raw strings; validation decides what is acceptable

use clap::Parser;

/// Raw flag values. `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "brave-search-mcp",
    version,
    about = "Search MCP server",
    args_override_self = true
)]
pub struct CliArgs {
    /// API key for the search service
    #[arg(long, visible_alias = "brave-api-key", value_name = "STRING", allow_hyphen_values = true)]
    pub credential: Option<String>,

    /// Logging level
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub logging_level: Option<String>,

    /// Transport type
    #[arg(long, value_name = "stdio|http", allow_hyphen_values = true)]
    pub transport: Option<String>,

    /// Desired port for HTTP transport
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub port: Option<String>,

    /// Desired host for HTTP transport
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub host: Option<String>,
}

/// Long flags that take a value.
const VALUE_FLAGS: [&str; 6] = [
    "--credential",
    "--brave-api-key",
    "--logging-level",
    "--transport",
    "--port",
    "--host",
];

/// Flags clap handles itself.
const BUILTIN_FLAGS: [&str; 4] = ["--help", "-h", "--version", "-V"];

impl CliArgs {
    /// Parse `args` (including the program name in position 0).
    ///
    /// Unknown flags and positionals are ignored. A recognized flag with a
    /// missing value, or `--help`/`--version`, is returned as a clap error.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let filtered = retain_known_flags(args.into_iter().map(Into::into));
        Self::try_parse_from(filtered)
    }
}

/// Keep the program name, recognized flags and their values.
///
/// `--flag value` always takes the next token as the value, even when it
/// looks like a flag, and is rewritten to `--flag=value` for clap. `--` ends
/// option scanning; everything after it is dropped. All other tokens are
/// dropped too.
pub fn retain_known_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut kept = Vec::new();

    if let Some(program) = args.next() {
        kept.push(program);
    }

    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if BUILTIN_FLAGS.contains(&arg.as_str()) {
            kept.push(arg);
            continue;
        }

        let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);
        if !VALUE_FLAGS.contains(&name) {
            continue;
        }

        if arg.contains('=') {
            kept.push(arg);
            continue;
        }
        match args.next() {
            Some(value) => kept.push(format!("{arg}={value}")),
            // Left bare so clap reports the missing value.
            None => kept.push(arg),
        }
    }

    kept
}
