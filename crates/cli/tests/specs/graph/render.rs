// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Graph rendering specs

use crate::prelude::*;

#[test]
fn text_output_lists_nodes_and_edges() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .passes()
        .stdout_eq(
            "Pipeline: p1

build [oci] package 456789abcdef
  image: https://ghcr.io/acme/app:v1
deploy [git] git-branch -
  promote: idle

Edges:
  build -> deploy
",
        );
}

#[test]
fn json_output_is_structured() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    let run = ws
        .gate()
        .args(&[
            "graph",
            "p1",
            "--file",
            snapshot.to_str().unwrap(),
            "--format",
            "json",
        ])
        .passes();
    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();

    assert_eq!(json["pipeline"], "p1");
    assert_eq!(json["nodes"][0]["name"], "build");
    assert_eq!(json["nodes"][0]["icon"], "package");
    assert_eq!(json["nodes"][0]["image"]["href"], "https://ghcr.io/acme/app:v1");
    assert!(json["nodes"][0].get("promotion").is_none());
    assert_eq!(json["nodes"][1]["promotion"]["state"], "idle");
    assert_eq!(json["edges"][0]["from"], "build");
    assert_eq!(json["edges"][0]["to"], "deploy");
}

#[test]
fn labels_render_with_a_color() {
    let ws = Workspace::empty();
    let snapshot = ws.file(
        "snap.json",
        r#"{"name": "p1", "phases": [{"name": "build", "labels": {"env": "prod"}}]}"#,
    );

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .passes()
        .stdout_has("  labels: env=prod (");
}

#[test]
fn empty_snapshot_renders_no_phases() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", r#"{"name": "p1", "phases": []}"#);

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .passes()
        .stdout_eq("Pipeline: p1\nNo phases\n");
}

#[test]
fn forward_references_are_accepted() {
    let ws = Workspace::empty();
    let snapshot = ws.file(
        "snap.json",
        r#"{"phases": [{"name": "deploy", "depends_on": "build"}, {"name": "build"}]}"#,
    );

    ws.gate()
        .args(&["graph", "p1", "--file", snapshot.to_str().unwrap()])
        .passes()
        .stdout_has("  build -> deploy\n");
}
