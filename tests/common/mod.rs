//! Shared helpers for configuration integration tests.

use brave_search_mcp::config::env::ENV_CREDENTIAL;
use brave_search_mcp::config::ConfigEnv;

/// argv with a program name prepended.
pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("brave-search-mcp")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

/// Environment containing only the given pairs.
#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> ConfigEnv {
    ConfigEnv::from_pairs(pairs.iter().copied())
}

/// Environment with a credential set and nothing else.
#[allow(dead_code)]
pub fn env_with_credential() -> ConfigEnv {
    env(&[(ENV_CREDENTIAL, "test-key")])
}
