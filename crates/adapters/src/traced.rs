// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::promote::{PromotionAdapter, PromotionError};
use crate::snapshot::{PipelineSnapshot, SnapshotAdapter, SnapshotError};
use async_trait::async_trait;
use gate_core::RequestId;
use tracing::Instrument;

/// Wrapper that adds tracing to any PromotionAdapter
#[derive(Clone)]
pub struct TracedPromotionAdapter<P> {
    inner: P,
}

impl<P> TracedPromotionAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PromotionAdapter> PromotionAdapter for TracedPromotionAdapter<P> {
    async fn promote(
        &self,
        pipeline: &str,
        phase: &str,
        request_id: &RequestId,
    ) -> Result<(), PromotionError> {
        let span = tracing::info_span!("promotion.promote", pipeline, phase, %request_id);

        async {
            // Precondition: both path segments must be present
            if pipeline.is_empty() || phase.is_empty() {
                tracing::error!("pipeline and phase are required");
                return Err(PromotionError::InvalidTarget(
                    "pipeline and phase are required".to_string(),
                ));
            }

            tracing::info!("sending");
            let start = std::time::Instant::now();
            let result = self.inner.promote(pipeline, phase, request_id).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "promoted"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "promotion failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any SnapshotAdapter
#[derive(Clone)]
pub struct TracedSnapshotAdapter<S> {
    inner: S,
}

impl<S> TracedSnapshotAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SnapshotAdapter> SnapshotAdapter for TracedSnapshotAdapter<S> {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError> {
        let span = tracing::info_span!("snapshot.fetch", pipeline);

        async {
            let start = std::time::Instant::now();
            let result = self.inner.fetch(pipeline).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(snapshot) => tracing::debug!(
                    phases = snapshot.phases.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "fetched"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "fetch failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
