// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Promotion API adapters

mod http;
mod noop;

pub use http::HttpPromotionAdapter;
pub use noop::NoOpPromotionAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePromotionAdapter, PromotionCall};

use async_trait::async_trait;
use gate_core::RequestId;
use thiserror::Error;

/// Errors from the Promotion API
#[derive(Debug, Error)]
pub enum PromotionError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("control plane returned {code}: {body}")]
    Status { code: u16, body: String },
    #[error("request task aborted: {0}")]
    Join(String),
    #[error("invalid promotion target: {0}")]
    InvalidTarget(String),
}

/// Adapter for the control plane's promote operation.
///
/// Implementations must make one call per invocation; duplicate delivery
/// is de-duplicated server side by `request_id`.
#[async_trait]
pub trait PromotionAdapter: Clone + Send + Sync + 'static {
    async fn promote(
        &self,
        pipeline: &str,
        phase: &str,
        request_id: &RequestId,
    ) -> Result<(), PromotionError>;
}
