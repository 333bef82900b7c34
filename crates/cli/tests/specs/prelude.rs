// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two phases: an OCI build and a git deploy gated on it
pub const TWO_PHASES: &str = r#"{
  "name": "p1",
  "phases": [
    {
      "name": "build",
      "source": {
        "name": "oci",
        "annotations": {"dev.getglu.oci.image.url": "ghcr.io/acme/app:v1"}
      },
      "digest": "sha256:0123456789abcdef0123456789abcdef"
    },
    {"name": "deploy", "source": {"name": "git"}, "depends_on": "build"}
  ]
}"#;

/// Isolated working directory with no user config in reach
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file relative to the workspace and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn gate(&self) -> Gate {
        let mut cmd = Command::cargo_bin("gate").unwrap();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env_remove("GATE_API_URL")
            .env_remove("RUST_LOG");
        Gate { cmd }
    }
}

pub struct Gate {
    cmd: Command,
}

impl Gate {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Run {
        let assert = self.cmd.assert().success();
        Run {
            output: assert.get_output().clone(),
        }
    }

    pub fn fails(mut self) -> Run {
        let assert = self.cmd.assert().failure();
        Run {
            output: assert.get_output().clone(),
        }
    }
}

pub struct Run {
    output: std::process::Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {:?}:\n{}", needle, stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {:?}:\n{}", needle, stderr);
        self
    }
}
