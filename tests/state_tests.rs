//! Shared state tests: hosted merges and concurrent readers.

use std::sync::Arc;
use std::thread;

use brave_search_mcp::config::{
    resolve, ConfigEnv, HostedConfig, LoggingLevel, SharedConfig, Transport,
};
use brave_search_mcp::lifecycle::startup;

mod common;
use common::argv;

#[test]
fn test_merge_credential_only() {
    let state = SharedConfig::new();
    resolve(
        argv(&["--credential", "cli", "--transport", "stdio", "--logging-level", "alert"]),
        &ConfigEnv::empty(),
        &state,
    )
    .unwrap();

    let merged = state.merge(&HostedConfig::new("x"));
    let snap = state.read();
    assert_eq!(*snap, *merged);
    assert_eq!(snap.credential, "x");
    assert_eq!(snap.transport, Transport::Stdio);
    assert_eq!(snap.logging_level, LoggingLevel::Alert);
    assert!(snap.ready);
}

#[test]
fn test_merge_does_not_set_ready() {
    let state = SharedConfig::new();
    state.merge(&HostedConfig::new("x"));
    state.merge(&HostedConfig::new("y").with_logging_level(LoggingLevel::Debug));
    let snap = state.read();
    assert!(!snap.ready);
    assert_eq!(snap.credential, "y");
    assert_eq!(snap.logging_level, LoggingLevel::Debug);
}

#[test]
fn test_merge_json_hosted_payload() {
    let state = SharedConfig::new();
    let snap = state
        .merge_json(serde_json::json!({ "braveApiKey": "hosted", "loggingLevel": "critical" }))
        .unwrap();
    assert_eq!(snap.credential, "hosted");
    assert_eq!(snap.logging_level, LoggingLevel::Critical);
}

#[test]
fn test_readers_never_see_partial_merge() {
    let state = Arc::new(SharedConfig::new());
    let a = HostedConfig::new("a").with_logging_level(LoggingLevel::Debug);
    let b = HostedConfig::new("b").with_logging_level(LoggingLevel::Error);

    let writer = {
        let state = Arc::clone(&state);
        thread::spawn(move || {
            for i in 0..1000 {
                state.merge(if i % 2 == 0 { &a } else { &b });
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..1000 {
                    let snap = state.read();
                    match snap.credential.as_str() {
                        "" => assert_eq!(snap.logging_level, LoggingLevel::Info),
                        "a" => assert_eq!(snap.logging_level, LoggingLevel::Debug),
                        "b" => assert_eq!(snap.logging_level, LoggingLevel::Error),
                        other => panic!("unexpected credential {other}"),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_bootstrap_shares_one_state() {
    let state = startup::bootstrap(argv(&["--credential", "k"]), &ConfigEnv::empty()).unwrap();
    let transport_view = Arc::clone(&state);
    state.merge(&HostedConfig::new("rotated"));
    assert_eq!(transport_view.read().credential, "rotated");
}
