// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn first_poll_summarizes_the_graph() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&[
            "watch",
            "p1",
            "--file",
            snapshot.to_str().unwrap(),
            "--interval",
            "10ms",
            "--count",
            "3",
        ])
        .passes()
        .stdout_eq("Watching p1: 2 phases, 1 edges\n");
}

#[test]
fn rejected_snapshot_is_reported_on_stderr() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", r#"{"phases": [{"name": "a"}, {"name": "a"}]}"#);

    let mut cmd = assert_cmd::Command::cargo_bin("gate").unwrap();
    let dir = snapshot.parent().unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("GATE_API_URL")
        .env_remove("RUST_LOG")
        .args([
            "watch",
            "p1",
            "--file",
            snapshot.to_str().unwrap(),
            "--interval",
            "10ms",
            "--count",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("snapshot rejected, keeping previous graph"));
}

#[test]
fn zero_interval_is_refused() {
    let ws = Workspace::empty();
    ws.gate()
        .args(&["watch", "p1", "--interval", "0s"])
        .fails()
        .stderr_has("interval must be greater than zero");
}
