// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Graph error specs

use crate::prelude::*;

#[test]
fn dangling_dependency_fails() {
    let ws = Workspace::empty();
    let snapshot = ws.file(
        "snap.json",
        r#"{"phases": [{"name": "deploy", "depends_on": "ghost"}]}"#,
    );

    let run = ws
        .gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .fails()
        .stderr_has("Snapshot for pipeline 'p1' rejected")
        .stderr_has("phase deploy depends on unknown phase ghost");
    assert!(run.stdout().is_empty());
}

#[test]
fn duplicate_phase_fails() {
    let ws = Workspace::empty();
    let snapshot = ws.file(
        "snap.json",
        r#"{"phases": [{"name": "build"}, {"name": "build"}]}"#,
    );

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .fails()
        .stderr_has("duplicate phase name: build");
}

#[test]
fn missing_file_fails() {
    let ws = Workspace::empty();

    ws.gate()
        .args(&["graph", "p1", "--file", "nowhere.json"])
        .fails()
        .stderr_has("Could not load phases for pipeline 'p1'")
        .stderr_has("--file");
}

#[test]
fn malformed_document_fails() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", "{ not json");

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .fails()
        .stderr_has("invalid snapshot document");
}

#[test]
fn unreachable_api_fails() {
    let ws = Workspace::empty();

    ws.gate()
        .env("GATE_API_URL", "http://127.0.0.1:9")
        .args(&["graph", "p1"])
        .fails()
        .stderr_has("Could not load phases for pipeline 'p1'")
        .stderr_has("GATE_API_URL");
}
