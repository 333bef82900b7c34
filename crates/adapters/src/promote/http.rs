// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP promotion adapter

use super::{PromotionAdapter, PromotionError};
use crate::http::ApiEndpoint;
use async_trait::async_trait;
use gate_core::RequestId;

/// Header carrying the request id so retries can be de-duplicated
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Promotion adapter backed by the control plane's REST API
#[derive(Clone, Debug)]
pub struct HttpPromotionAdapter {
    endpoint: ApiEndpoint,
}

impl HttpPromotionAdapter {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl PromotionAdapter for HttpPromotionAdapter {
    async fn promote(
        &self,
        pipeline: &str,
        phase: &str,
        request_id: &RequestId,
    ) -> Result<(), PromotionError> {
        let url = self.endpoint.promote_url(pipeline, phase);
        let agent = self.endpoint.agent();
        let key = request_id.to_string();

        // ureq is blocking; keep it off the event loop
        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .post(&url)
                .header(IDEMPOTENCY_HEADER, &key)
                .send_empty()
                .map_err(|e| PromotionError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let body = response.body_mut().read_to_string().unwrap_or_default();
            Err(PromotionError::Status {
                code: status.as_u16(),
                body: body.trim().to_string(),
            })
        })
        .await
        .map_err(|e| PromotionError::Join(e.to_string()))?
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
