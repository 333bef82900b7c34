// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn explicit_missing_config_fails() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);
    ws.gate()
        .args(&[
            "graph",
            "p1",
            "--file",
            snapshot.to_str().unwrap(),
            "--config",
            "absent.toml",
        ])
        .fails()
        .stderr_has("failed to read absent.toml");
}

#[test]
fn local_config_with_bad_duration_fails() {
    let ws = Workspace::empty();
    ws.file("gate.toml", "[api]\ntimeout = \"soon\"\n");
    let snapshot = ws.file("snap.json", TWO_PHASES);
    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .fails()
        .stderr_has("invalid config gate.toml");
}

#[test]
fn user_config_dir_is_read() {
    let ws = Workspace::empty();
    ws.file("xdg/gate/config.toml", "[api]\nurl = \"http://127.0.0.1:9\"\ntimeout = \"1s\"\n");
    ws.gate()
        .args(&["graph", "p1"])
        .fails()
        .stderr_has("Could not load phases for pipeline 'p1'");
}

#[test]
fn config_is_not_needed_for_file_sources() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);
    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .passes();
}
