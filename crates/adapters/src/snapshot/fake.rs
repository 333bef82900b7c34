// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake snapshot source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PipelineSnapshot, SnapshotAdapter, SnapshotError};
use async_trait::async_trait;
use gate_core::Phase;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Serves queued snapshots in order, then repeats the last one
#[derive(Clone, Default)]
pub struct FakeSnapshotAdapter {
    queue: Arc<Mutex<VecDeque<Vec<Phase>>>>,
    last: Arc<Mutex<Vec<Phase>>>,
    fetches: Arc<Mutex<usize>>,
}

impl FakeSnapshotAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next phase set to serve
    pub fn push(&self, phases: Vec<Phase>) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(phases);
    }

    /// Number of fetches served so far
    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SnapshotAdapter for FakeSnapshotAdapter {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError> {
        *self.fetches.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            *last = next;
        }

        Ok(PipelineSnapshot {
            name: pipeline.to_string(),
            phases: last.clone(),
        })
    }
}
