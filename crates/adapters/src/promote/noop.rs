// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op promotion adapter for dry runs

use super::{PromotionAdapter, PromotionError};
use async_trait::async_trait;
use gate_core::RequestId;

/// Promotion adapter that accepts every request without sending it.
///
/// Used by `gate promote --dry-run`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPromotionAdapter;

impl NoOpPromotionAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromotionAdapter for NoOpPromotionAdapter {
    async fn promote(
        &self,
        _pipeline: &str,
        _phase: &str,
        _request_id: &RequestId,
    ) -> Result<(), PromotionError> {
        Ok(())
    }
}
