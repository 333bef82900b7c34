// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use gate_adapters::PromotionAdapter;
use gate_core::{Effect, Event, RequestId, TracedEffect};
use tokio::sync::mpsc;
use tracing::Instrument;

/// Outcome of an outbound promotion, fed back to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub pipeline: String,
    pub phase: String,
    pub request_id: RequestId,
    pub result: Result<(), String>,
}

/// Executes effects using the configured promotion adapter
pub struct Executor<P> {
    promotions: P,
    completions: mpsc::UnboundedSender<Completion>,
}

impl<P: PromotionAdapter> Executor<P> {
    pub fn new(promotions: P, completions: mpsc::UnboundedSender<Completion>) -> Self {
        Self {
            promotions,
            completions,
        }
    }

    /// Execute a single effect.
    ///
    /// Emitted events are handed back for the view layer. Promotions are
    /// spawned and never awaited here; their outcome arrives later as a
    /// `Completion` on the channel.
    pub fn execute(&self, effect: Effect) -> Option<Event> {
        let span = tracing::info_span!("effect", effect = effect.name());
        let _guard = span.enter();
        tracing::debug!(fields = ?effect.fields(), "executing");

        match effect {
            Effect::Emit { event } => Some(event),

            Effect::Promote {
                pipeline,
                phase,
                request_id,
            } => {
                let promotions = self.promotions.clone();
                let completions = self.completions.clone();
                let task_span = tracing::info_span!("promotion", %pipeline, %phase);

                tokio::spawn(
                    async move {
                        let result = promotions
                            .promote(&pipeline, &phase, &request_id)
                            .await
                            .map_err(|e| e.to_string());
                        let completion = Completion {
                            pipeline,
                            phase,
                            request_id,
                            result,
                        };
                        if completions.send(completion).is_err() {
                            tracing::warn!("runtime gone before promotion completed");
                        }
                    }
                    .instrument(task_span),
                );
                None
            }
        }
    }

    /// Execute effects in order, collecting emitted events
    pub fn execute_all(&self, effects: Vec<Effect>) -> Vec<Event> {
        effects
            .into_iter()
            .filter_map(|effect| self.execute(effect))
            .collect()
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
