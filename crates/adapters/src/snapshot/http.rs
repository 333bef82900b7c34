// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP snapshot source

use super::{PipelineSnapshot, SnapshotAdapter, SnapshotError};
use crate::http::ApiEndpoint;
use async_trait::async_trait;

/// Reads pipeline snapshots from the control plane's REST API
#[derive(Clone, Debug)]
pub struct HttpSnapshotAdapter {
    endpoint: ApiEndpoint,
}

impl HttpSnapshotAdapter {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl SnapshotAdapter for HttpSnapshotAdapter {
    async fn fetch(&self, pipeline: &str) -> Result<PipelineSnapshot, SnapshotError> {
        let url = self.endpoint.pipeline_url(pipeline);
        let agent = self.endpoint.agent();

        let body = tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(&url)
                .header("Accept", "application/json")
                .call()
                .map_err(|e| SnapshotError::Transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| SnapshotError::Transport(e.to_string()))?;

            if !status.is_success() {
                return Err(SnapshotError::Status {
                    code: status.as_u16(),
                    body: body.trim().to_string(),
                });
            }
            Ok(body)
        })
        .await
        .map_err(|e| SnapshotError::Join(e.to_string()))??;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
