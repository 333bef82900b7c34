// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for one pipeline's phase graph
//!
//! All state changes happen on the caller's task, one input at a time.
//! The only concurrent work is the spawned promotion call, whose outcome
//! comes back through `next_completion`.

use crate::error::RuntimeError;
use crate::executor::{Completion, Executor};
use crate::PipelineBoard;
use gate_adapters::PromotionAdapter;
use gate_core::{Event, IdGen, Phase, PromotionEvent};
use tokio::sync::mpsc;

/// Runtime that coordinates the board and the executor
pub struct Runtime<P, I> {
    board: PipelineBoard,
    executor: Executor<P>,
    ids: I,
    completions: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl<P, I> Runtime<P, I>
where
    P: PromotionAdapter,
    I: IdGen,
{
    pub fn new(pipeline: impl Into<String>, promotions: P, ids: I) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            board: PipelineBoard::new(pipeline),
            executor: Executor::new(promotions, tx),
            ids,
            completions: rx,
            in_flight: 0,
        }
    }

    pub fn board(&self) -> &PipelineBoard {
        &self.board
    }

    /// Promotion calls sent and not yet answered
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply a full phase snapshot.
    ///
    /// An inconsistent snapshot is returned as an error and leaves the
    /// previous graph in place.
    pub fn apply_snapshot(&mut self, phases: &[Phase]) -> Result<Vec<Event>, RuntimeError> {
        let pipeline = self.board.pipeline().to_string();
        match self.board.apply_snapshot(phases) {
            Ok(()) => Ok(vec![Event::SnapshotApplied {
                pipeline,
                nodes: self.board.graph().nodes().len(),
                edges: self.board.graph().edges().len(),
            }]),
            Err(e) => {
                tracing::warn!(%pipeline, error = %e, "snapshot rejected");
                Err(e.into())
            }
        }
    }

    pub fn request_confirmation(&mut self, phase: &str) -> Result<Vec<Event>, RuntimeError> {
        self.dispatch(phase, PromotionEvent::RequestConfirmation)
    }

    pub fn cancel(&mut self, phase: &str) -> Result<Vec<Event>, RuntimeError> {
        self.dispatch(phase, PromotionEvent::Cancel)
    }

    pub fn confirm(&mut self, phase: &str) -> Result<Vec<Event>, RuntimeError> {
        self.dispatch(phase, PromotionEvent::Confirm)
    }

    /// Wait for the next promotion outcome and apply it.
    ///
    /// Returns `None` when no promotion is in flight.
    pub async fn next_completion(&mut self) -> Option<Vec<Event>> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.completions.recv().await?;
        Some(self.complete(completion))
    }

    /// Apply every outcome that has already arrived, without waiting
    pub fn drain_completions(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(completion) = self.completions.try_recv() {
            events.extend(self.complete(completion));
        }
        events
    }

    fn dispatch(&mut self, phase: &str, event: PromotionEvent) -> Result<Vec<Event>, RuntimeError> {
        let effects = self.board.handle(phase, event, &self.ids)?;
        self.in_flight += effects.iter().filter(|e| e.is_promote()).count();
        Ok(self.executor.execute_all(effects))
    }

    fn complete(&mut self, completion: Completion) -> Vec<Event> {
        self.in_flight = self.in_flight.saturating_sub(1);
        let Completion {
            pipeline,
            phase,
            request_id,
            result,
        } = completion;

        let event = PromotionEvent::Completed { request_id, result };
        match self.board.handle(&phase, event, &self.ids) {
            Ok(effects) => self.executor.execute_all(effects),
            Err(e) => {
                // Phase vanished from the snapshot while the call was in flight
                tracing::debug!(%pipeline, error = %e, "dropping completion");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
