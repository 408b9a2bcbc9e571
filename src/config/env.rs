//! Environment variable inputs.
//!
//! Only the five recognized variables are captured, so a [`ConfigEnv`] can be
//! built from the real process or from fixed pairs in tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Env var: API credential.
pub const ENV_CREDENTIAL: &str = "BRAVE_API_KEY";
/// Env var: logging level.
pub const ENV_LOG_LEVEL: &str = "BRAVE_MCP_LOG_LEVEL";
/// Env var: transport (`stdio` | `http`).
pub const ENV_TRANSPORT: &str = "BRAVE_MCP_TRANSPORT";
/// Env var: HTTP listen port.
pub const ENV_PORT: &str = "BRAVE_MCP_PORT";
/// Env var: HTTP listen host.
pub const ENV_HOST: &str = "BRAVE_MCP_HOST";

/// Set to any value to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

const RECOGNIZED: [&str; 5] = [ENV_CREDENTIAL, ENV_LOG_LEVEL, ENV_TRANSPORT, ENV_PORT, ENV_HOST];

/// Snapshot of the configuration-relevant environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    vars: BTreeMap<String, String>,
}

impl ConfigEnv {
    /// Empty environment; every field falls back to its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the recognized variables from the current process.
    ///
    /// Values that are not valid unicode are converted lossily.
    pub fn from_process() -> Self {
        let vars = RECOGNIZED
            .iter()
            .filter_map(|name| {
                std::env::var_os(name)
                    .map(|value| (name.to_string(), value.to_string_lossy().into_owned()))
            })
            .collect();
        Self { vars }
    }

    /// Build from explicit pairs. Unrecognized names are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| RECOGNIZED.contains(&k.as_str()))
            .collect();
        Self { vars }
    }

    /// Value of a variable. A variable set to the empty string is `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// What happened when looking for a `.env` file.
#[derive(Debug)]
pub enum DotenvOutcome {
    Disabled,
    NotFound,
    Loaded(PathBuf),
    Failed(dotenvy::Error),
}

impl DotenvOutcome {
    /// Report the outcome. Call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            DotenvOutcome::Disabled => tracing::debug!("DOTENV_DISABLED set, skipped .env"),
            DotenvOutcome::NotFound => {}
            DotenvOutcome::Loaded(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file")
            }
            DotenvOutcome::Failed(e) => tracing::warn!(error = %e, "Failed to load .env file"),
        }
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// Must run before logging is initialized so `RUST_LOG` from the file is
/// honored; nothing is logged here, report with [`DotenvOutcome::log`].
/// Variables already set in the process are not overwritten. Skipped
/// entirely when `DOTENV_DISABLED` is set.
pub fn load_dotenv() -> DotenvOutcome {
    if std::env::var_os(ENV_DOTENV_DISABLED).is_some() {
        return DotenvOutcome::Disabled;
    }
    outcome(dotenvy::dotenv())
}

/// Load a specific env file into the process environment.
pub fn load_dotenv_from(path: &Path) -> DotenvOutcome {
    outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn outcome(result: Result<PathBuf, dotenvy::Error>) -> DotenvOutcome {
    match result {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_drops_unrelated_vars() {
        let env = ConfigEnv::from_pairs([(ENV_PORT, "9000"), ("PATH", "/usr/bin")]);
        assert_eq!(env.len(), 1);
        assert_eq!(env.get(ENV_PORT), Some("9000"));
        assert_eq!(env.get("PATH"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let env = ConfigEnv::from_pairs([(ENV_HOST, "")]);
        assert_eq!(env.get(ENV_HOST), Some(""));
    }

    #[test]
    fn test_empty_env() {
        let env = ConfigEnv::empty();
        assert!(env.is_empty());
        assert_eq!(env.get(ENV_CREDENTIAL), None);
    }

    #[test]
    fn test_dotenv_file_reaches_process_env() {
        let var = "BRAVE_SEARCH_MCP_DOTENV_TEST_LEVEL";
        let path = std::env::temp_dir().join(format!("brave-search-mcp-{}.env", std::process::id()));
        std::fs::write(&path, format!("{var}=debug\n")).unwrap();

        let outcome = load_dotenv_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(outcome, DotenvOutcome::Loaded(ref p) if p == &path));
        assert_eq!(std::env::var(var).as_deref(), Ok("debug"));
    }

    #[test]
    fn test_missing_dotenv_file_is_not_found() {
        let path = std::env::temp_dir().join("brave-search-mcp-does-not-exist.env");
        assert!(matches!(load_dotenv_from(&path), DotenvOutcome::NotFound));
    }
}
