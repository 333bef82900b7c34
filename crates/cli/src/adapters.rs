// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter factory for CLI commands

use crate::config::Config;
use async_trait::async_trait;
use gate_adapters::{
    ApiEndpoint, FileSnapshotAdapter, HttpPromotionAdapter, HttpSnapshotAdapter,
    NoOpPromotionAdapter, PipelineSnapshot, PromotionAdapter, PromotionError, SnapshotAdapter,
    SnapshotError, TracedPromotionAdapter, TracedSnapshotAdapter,
};
use gate_core::RequestId;
use std::path::Path;

/// Where a command reads phases from
#[derive(Clone)]
pub enum PhaseSource {
    File(FileSnapshotAdapter),
    Api(HttpSnapshotAdapter),
}

#[async_trait]
impl SnapshotAdapter for PhaseSource {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError> {
        match self {
            PhaseSource::File(source) => source.fetch(pipeline).await,
            PhaseSource::Api(source) => source.fetch(pipeline).await,
        }
    }
}

/// Where a confirmed promotion is sent
#[derive(Clone)]
pub enum PromotionTarget {
    Api(HttpPromotionAdapter),
    DryRun(NoOpPromotionAdapter),
}

#[async_trait]
impl PromotionAdapter for PromotionTarget {
    async fn promote(
        &self,
        pipeline: &str,
        phase: &str,
        request_id: &RequestId,
    ) -> Result<(), PromotionError> {
        match self {
            PromotionTarget::Api(target) => target.promote(pipeline, phase, request_id).await,
            PromotionTarget::DryRun(target) => target.promote(pipeline, phase, request_id).await,
        }
    }
}

fn endpoint(config: &Config) -> ApiEndpoint {
    ApiEndpoint::new(&config.api.url, config.api.timeout)
}

/// Phase source for a command: a local file when given, else the API
pub fn phase_source(file: Option<&Path>, config: &Config) -> TracedSnapshotAdapter<PhaseSource> {
    let source = match file {
        Some(path) => PhaseSource::File(FileSnapshotAdapter::new(path)),
        None => PhaseSource::Api(HttpSnapshotAdapter::new(endpoint(config))),
    };
    TracedSnapshotAdapter::new(source)
}

pub fn promotion_target(dry_run: bool, config: &Config) -> TracedPromotionAdapter<PromotionTarget> {
    let target = if dry_run {
        PromotionTarget::DryRun(NoOpPromotionAdapter::new())
    } else {
        PromotionTarget::Api(HttpPromotionAdapter::new(endpoint(config)))
    };
    TracedPromotionAdapter::new(target)
}
