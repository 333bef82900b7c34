// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Promotion specs, run against a file source without a control plane

use crate::prelude::*;

#[test]
fn confirmed_dry_run_promotes() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&[
            "promote",
            "p1",
            "deploy",
            "--file",
            snapshot.to_str().unwrap(),
            "--dry-run",
            "--yes",
        ])
        .passes()
        .stdout_has("Promoted p1/deploy (dry run, request ");
}

#[test]
fn root_phase_cannot_be_promoted() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&[
            "promote",
            "p1",
            "build",
            "--file",
            snapshot.to_str().unwrap(),
            "--dry-run",
            "--yes",
        ])
        .fails()
        .stderr_has("Cannot promote 'build' in pipeline 'p1'");
}

#[test]
fn unknown_phase_is_reported() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&[
            "promote",
            "p1",
            "qa",
            "--file",
            snapshot.to_str().unwrap(),
            "--dry-run",
            "--yes",
        ])
        .fails()
        .stderr_has("Phase 'qa' not found in pipeline 'p1'")
        .stderr_has("gate graph p1");
}

#[test]
fn prompt_without_terminal_suggests_yes() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .args(&[
            "promote",
            "p1",
            "deploy",
            "--file",
            snapshot.to_str().unwrap(),
            "--dry-run",
        ])
        .fails()
        .stderr_has("Could not prompt for confirmation")
        .stderr_has("--yes");
}

#[test]
fn failed_call_exits_non_zero() {
    let ws = Workspace::empty();
    let snapshot = ws.file("snap.json", TWO_PHASES);

    ws.gate()
        .env("GATE_API_URL", "http://127.0.0.1:9")
        .args(&[
            "promote",
            "p1",
            "deploy",
            "--file",
            snapshot.to_str().unwrap(),
            "--yes",
        ])
        .fails()
        .stderr_has("Promotion of 'deploy' in pipeline 'p1' failed")
        .stderr_has("gate promote p1 deploy");
}
