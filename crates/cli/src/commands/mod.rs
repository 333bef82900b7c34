// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod graph;
pub mod promote;
pub mod watch;

use crate::error::GateError;
use gate_adapters::SnapshotAdapter;
use gate_core::Phase;

/// Fetch the current phase set for a pipeline
pub(crate) async fn fetch_phases(
    source: &impl SnapshotAdapter,
    pipeline: &str,
) -> Result<Vec<Phase>, GateError> {
    source
        .fetch(pipeline)
        .await
        .map(|snapshot| snapshot.phases)
        .map_err(|e| GateError::snapshot_unavailable(pipeline, e))
}
