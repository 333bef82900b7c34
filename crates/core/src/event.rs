// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types emitted by the phase graph and its promotion controllers

use crate::id::RequestId;
use serde::{Deserialize, Serialize};

/// Observable events, surfaced to the view layer and to logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Operator opened the confirmation for a phase
    PromotionRequested { pipeline: String, phase: String },

    /// Operator dismissed the confirmation; nothing was sent
    PromotionCancelled { pipeline: String, phase: String },

    /// Promotion request handed to the control plane
    PromotionStarted {
        pipeline: String,
        phase: String,
        request_id: RequestId,
    },

    PromotionSucceeded {
        pipeline: String,
        phase: String,
        request_id: RequestId,
    },

    PromotionFailed {
        pipeline: String,
        phase: String,
        request_id: RequestId,
        error: String,
    },

    /// An input was refused without changing controller state
    PromotionRejected {
        pipeline: String,
        phase: String,
        reason: String,
    },

    /// A new snapshot replaced the graph
    SnapshotApplied {
        pipeline: String,
        nodes: usize,
        edges: usize,
    },
}

impl Event {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::PromotionRequested { .. } => "promotion:requested",
            Event::PromotionCancelled { .. } => "promotion:cancelled",
            Event::PromotionStarted { .. } => "promotion:started",
            Event::PromotionSucceeded { .. } => "promotion:succeeded",
            Event::PromotionFailed { .. } => "promotion:failed",
            Event::PromotionRejected { .. } => "promotion:rejected",
            Event::SnapshotApplied { .. } => "snapshot:applied",
        }
    }

    pub fn pipeline(&self) -> &str {
        match self {
            Event::PromotionRequested { pipeline, .. }
            | Event::PromotionCancelled { pipeline, .. }
            | Event::PromotionStarted { pipeline, .. }
            | Event::PromotionSucceeded { pipeline, .. }
            | Event::PromotionFailed { pipeline, .. }
            | Event::PromotionRejected { pipeline, .. }
            | Event::SnapshotApplied { pipeline, .. } => pipeline,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
