// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared HTTP plumbing for control plane adapters

use std::time::Duration;

/// Base URL and request budget for the control plane API
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    base_url: String,
    timeout: Duration,
}

impl ApiEndpoint {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/api/v1/pipelines/{pipeline}`
    pub fn pipeline_url(&self, pipeline: &str) -> String {
        format!(
            "{}/api/v1/pipelines/{}",
            self.base_url,
            urlencoding::encode(pipeline)
        )
    }

    /// `{base}/api/v1/pipelines/{pipeline}/phases/{phase}/promote`
    pub fn promote_url(&self, pipeline: &str, phase: &str) -> String {
        format!(
            "{}/phases/{}/promote",
            self.pipeline_url(pipeline),
            urlencoding::encode(phase)
        )
    }

    /// Agent that reports non-2xx statuses as responses rather than errors
    pub(crate) fn agent(&self) -> ureq::Agent {
        ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .http_status_as_error(false)
            .build()
            .into()
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
