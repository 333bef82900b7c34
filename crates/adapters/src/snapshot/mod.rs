// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase snapshot sources

mod file;
mod http;

pub use file::FileSnapshotAdapter;
pub use http::HttpSnapshotAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSnapshotAdapter;

use async_trait::async_trait;
use gate_core::Phase;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A full pipeline snapshot as served by the control plane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

/// Errors from snapshot sources
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("control plane returned {code}: {body}")]
    Status { code: u16, body: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("snapshot task aborted: {0}")]
    Join(String),
}

/// Source of phase snapshots.
///
/// Every call returns a complete replacement for the pipeline's phase
/// set, never a delta.
#[async_trait]
pub trait SnapshotAdapter: Clone + Send + Sync + 'static {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError>;
}
