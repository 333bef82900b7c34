// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed snapshot source for offline rendering

use super::{PipelineSnapshot, SnapshotAdapter, SnapshotError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a snapshot document from a local JSON file.
///
/// The file is re-read on every fetch so that edits show up as new
/// snapshots. The document's own `name` is ignored in favour of the
/// requested pipeline id when it is empty.
#[derive(Clone, Debug)]
pub struct FileSnapshotAdapter {
    path: PathBuf,
}

impl FileSnapshotAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotAdapter for FileSnapshotAdapter {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut snapshot: PipelineSnapshot = serde_json::from_str(&content)?;
        if snapshot.name.is_empty() {
            snapshot.name = pipeline.to_string();
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
