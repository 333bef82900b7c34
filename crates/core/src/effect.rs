// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by the promotion state machine

use crate::event::Event;
use crate::id::RequestId;
use crate::traced::TracedEffect;
use serde::{Deserialize, Serialize};

/// Side effects that state machines ask the executor to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Publish an event to the view layer
    Emit { event: Event },

    /// Issue one promotion request to the control plane
    Promote {
        pipeline: String,
        phase: String,
        request_id: RequestId,
    },
}

impl Effect {
    pub fn emit(event: Event) -> Self {
        Effect::Emit { event }
    }

    pub fn is_promote(&self) -> bool {
        matches!(self, Effect::Promote { .. })
    }
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Emit { .. } => "emit",
            Effect::Promote { .. } => "promote",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit { event } => vec![
                ("event", event.name().to_string()),
                ("pipeline", event.pipeline().to_string()),
            ],
            Effect::Promote {
                pipeline,
                phase,
                request_id,
            } => vec![
                ("pipeline", pipeline.clone()),
                ("phase", phase.clone()),
                ("request_id", request_id.to_string()),
            ],
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
