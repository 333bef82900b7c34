// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake promotion adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PromotionAdapter, PromotionError};
use async_trait::async_trait;
use gate_core::RequestId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Recorded promote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionCall {
    pub pipeline: String,
    pub phase: String,
    pub request_id: RequestId,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<PromotionCall>,
    /// Status code to fail with, per phase
    failures: HashMap<String, u16>,
    held: bool,
}

/// Fake promotion adapter with call recording and failure injection
#[derive(Clone, Default)]
pub struct FakePromotionAdapter {
    state: Arc<Mutex<FakeState>>,
    release: Arc<Notify>,
}

impl FakePromotionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PromotionCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Make promotions of `phase` fail with the given status
    pub fn fail_phase(&self, phase: &str, code: u16) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failures
            .insert(phase.to_string(), code);
    }

    /// Park calls until `release` is invoked, to observe in-flight state
    pub fn hold(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).held = true;
    }

    /// Let every parked call finish
    pub fn release(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).held = false;
        self.release.notify_waiters();
    }

    fn is_held(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).held
    }
}

#[async_trait]
impl PromotionAdapter for FakePromotionAdapter {
    async fn promote(
        &self,
        pipeline: &str,
        phase: &str,
        request_id: &RequestId,
    ) -> Result<(), PromotionError> {
        let failure = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(PromotionCall {
                pipeline: pipeline.to_string(),
                phase: phase.to_string(),
                request_id: request_id.clone(),
            });
            state.failures.get(phase).copied()
        };

        while self.is_held() {
            let released = self.release.notified();
            if !self.is_held() {
                break;
            }
            released.await;
        }

        match failure {
            Some(code) => Err(PromotionError::Status {
                code,
                body: format!("injected failure for {}", phase),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
