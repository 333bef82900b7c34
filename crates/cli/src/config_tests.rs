// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_when_sections_are_missing() {
    let file = write_config("");
    let config = Config::read(file.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.url, "http://localhost:8080");
    assert_eq!(config.api.timeout, Duration::from_secs(10));
    assert_eq!(config.log.level, "warn");
}

#[test]
fn reads_api_and_log_sections() {
    let file = write_config(
        r#"
[api]
url = "https://gate.example.com"
timeout = "1m 30s"

[log]
level = "debug"
"#,
    );
    let config = Config::read(file.path()).unwrap();
    assert_eq!(config.api.url, "https://gate.example.com");
    assert_eq!(config.api.timeout, Duration::from_secs(90));
    assert_eq!(config.log.level, "debug");
}

#[test]
fn partial_section_keeps_other_defaults() {
    let file = write_config("[api]\nurl = \"http://other:9000\"\n");
    let config = Config::read(file.path()).unwrap();
    assert_eq!(config.api.url, "http://other:9000");
    assert_eq!(config.api.timeout, Duration::from_secs(10));
}

#[test]
fn bad_duration_is_a_parse_error() {
    let file = write_config("[api]\ntimeout = \"soon\"\n");
    let err = Config::read(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let file = write_config("[api]\nendpoint = \"x\"\n");
    assert!(matches!(
        Config::read(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn explicit_missing_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn api_url_override() {
    let mut config = Config::default();
    config.apply_api_url(Some("http://override:1".to_string()));
    assert_eq!(config.api.url, "http://override:1");

    config.apply_api_url(Some("  ".to_string()));
    config.apply_api_url(None);
    assert_eq!(config.api.url, "http://override:1");
}
