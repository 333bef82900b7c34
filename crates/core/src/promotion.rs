// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Promotion state machine
//!
//! One controller per phase owns the confirm/cancel/execute protocol:
//!
//! ```text
//! Idle --request--> ConfirmPending --cancel--> Idle
//!                                  --confirm--> Promoting --completed--> Idle
//! ```
//!
//! Transitions are pure: they return the next controller plus the effects
//! the executor must run. Exactly one `Effect::Promote` is produced per
//! accepted confirm.

use crate::effect::Effect;
use crate::event::Event;
use crate::id::{IdGen, RequestId};
use crate::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a controller is in the promotion protocol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PromotionState {
    #[default]
    Idle,
    ConfirmPending,
    Promoting { request_id: RequestId },
}

impl PromotionState {
    pub fn name(&self) -> &'static str {
        match self {
            PromotionState::Idle => "idle",
            PromotionState::ConfirmPending => "confirm_pending",
            PromotionState::Promoting { .. } => "promoting",
        }
    }
}

impl std::fmt::Display for PromotionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inputs to the promotion state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionEvent {
    /// Operator asked to promote; open the confirmation
    RequestConfirmation,
    /// Operator dismissed the confirmation
    Cancel,
    /// Operator confirmed; send the request
    Confirm,
    /// The control plane answered (or the call failed)
    Completed {
        request_id: RequestId,
        result: Result<(), String>,
    },
}

/// Last failed promotion, kept for display until the next request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionFailure {
    pub request_id: RequestId,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Promotion protocol for a single phase of a single pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionController {
    pipeline: String,
    phase: String,
    promotable: bool,
    state: PromotionState,
    last_error: Option<PromotionFailure>,
}

impl PromotionController {
    pub fn new(pipeline: impl Into<String>, phase: &Phase) -> Self {
        Self {
            pipeline: pipeline.into(),
            phase: phase.name.clone(),
            promotable: phase.is_promotable(),
            state: PromotionState::Idle,
            last_error: None,
        }
    }

    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn state(&self) -> &PromotionState {
        &self.state
    }

    pub fn last_error(&self) -> Option<&PromotionFailure> {
        self.last_error.as_ref()
    }

    /// Whether the promotion affordance is offered at all
    pub fn is_promotable(&self) -> bool {
        self.promotable
    }

    pub fn is_idle(&self) -> bool {
        self.state == PromotionState::Idle
    }

    pub fn is_promoting(&self) -> bool {
        matches!(self.state, PromotionState::Promoting { .. })
    }

    /// Refresh the gate after a new snapshot.
    ///
    /// A phase that lost its dependency closes any open confirmation. An
    /// in-flight request is left alone; it cannot be recalled.
    pub fn set_promotable(&mut self, promotable: bool) {
        self.promotable = promotable;
        if !promotable && self.state == PromotionState::ConfirmPending {
            self.state = PromotionState::Idle;
        }
    }

    /// Pure transition function - returns new state and effects
    pub fn transition(
        &self,
        event: PromotionEvent,
        ids: &impl IdGen,
    ) -> (PromotionController, Vec<Effect>) {
        match (&self.state, event) {
            (PromotionState::Idle, PromotionEvent::RequestConfirmation) => {
                if !self.promotable {
                    return self.reject("phase has no upstream dependency");
                }
                let mut next = self.clone();
                next.state = PromotionState::ConfirmPending;
                next.last_error = None;
                let effects = vec![Effect::emit(Event::PromotionRequested {
                    pipeline: self.pipeline.clone(),
                    phase: self.phase.clone(),
                })];
                (next, effects)
            }

            // Re-entrant request while the confirmation is already open
            (PromotionState::ConfirmPending, PromotionEvent::RequestConfirmation) => {
                (self.clone(), vec![])
            }

            (PromotionState::ConfirmPending, PromotionEvent::Cancel) => {
                let mut next = self.clone();
                next.state = PromotionState::Idle;
                let effects = vec![Effect::emit(Event::PromotionCancelled {
                    pipeline: self.pipeline.clone(),
                    phase: self.phase.clone(),
                })];
                (next, effects)
            }

            (PromotionState::ConfirmPending, PromotionEvent::Confirm) => {
                let request_id = ids.next();
                let mut next = self.clone();
                next.state = PromotionState::Promoting {
                    request_id: request_id.clone(),
                };
                let effects = vec![
                    Effect::emit(Event::PromotionStarted {
                        pipeline: self.pipeline.clone(),
                        phase: self.phase.clone(),
                        request_id: request_id.clone(),
                    }),
                    Effect::Promote {
                        pipeline: self.pipeline.clone(),
                        phase: self.phase.clone(),
                        request_id,
                    },
                ];
                (next, effects)
            }

            (
                PromotionState::Promoting { request_id: current },
                PromotionEvent::Completed { request_id, result },
            ) if *current == request_id => {
                let mut next = self.clone();
                next.state = PromotionState::Idle;
                let event = match result {
                    Ok(()) => Event::PromotionSucceeded {
                        pipeline: self.pipeline.clone(),
                        phase: self.phase.clone(),
                        request_id,
                    },
                    Err(message) => {
                        next.last_error = Some(PromotionFailure {
                            request_id: request_id.clone(),
                            message: message.clone(),
                            at: Utc::now(),
                        });
                        Event::PromotionFailed {
                            pipeline: self.pipeline.clone(),
                            phase: self.phase.clone(),
                            request_id,
                            error: message,
                        }
                    }
                };
                (next, vec![Effect::emit(event)])
            }

            // Stale completion from an earlier request
            (_, PromotionEvent::Completed { .. }) => (self.clone(), vec![]),

            (PromotionState::Promoting { .. }, _) => self.reject("promotion already in flight"),

            (PromotionState::Idle, PromotionEvent::Cancel | PromotionEvent::Confirm) => {
                self.reject("no confirmation pending")
            }
        }
    }

    fn reject(&self, reason: &str) -> (PromotionController, Vec<Effect>) {
        let effects = vec![Effect::emit(Event::PromotionRejected {
            pipeline: self.pipeline.clone(),
            phase: self.phase.clone(),
            reason: reason.to_string(),
        })];
        (self.clone(), effects)
    }
}

#[cfg(test)]
#[path = "promotion_tests.rs"]
mod tests;
