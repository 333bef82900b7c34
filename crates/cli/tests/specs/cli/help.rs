// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let ws = Workspace::empty();
    ws.gate()
        .args(&["--help"])
        .passes()
        .stdout_has("graph")
        .stdout_has("promote")
        .stdout_has("watch")
        .stdout_has("completions");
}

#[test]
fn promote_help_mentions_flags() {
    let ws = Workspace::empty();
    ws.gate()
        .args(&["promote", "--help"])
        .passes()
        .stdout_has("--yes")
        .stdout_has("--dry-run")
        .stdout_has("--file");
}

#[test]
fn missing_subcommand_fails() {
    let ws = Workspace::empty();
    ws.gate().args(&[]).fails().stderr_has("Usage");
}

#[test]
fn bash_completions_name_the_binary() {
    let ws = Workspace::empty();
    ws.gate()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("_gate");
}
