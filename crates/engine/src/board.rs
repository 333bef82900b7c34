// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The graph view for one pipeline
//!
//! Holds the current graph and exactly one promotion controller per phase
//! name. Snapshots replace the graph wholesale; controllers survive a
//! snapshot only while their phase name does, except that a controller
//! with a promotion in flight is parked until its completion arrives. A
//! phase that reappears in the meantime gets the parked controller back,
//! so it cannot start a second promotion.

use crate::error::BoardError;
use gate_core::{
    Effect, GraphError, IdGen, Phase, PhaseGraph, PhaseNodeView, PromotionController,
    PromotionEvent,
};
use std::collections::HashMap;

pub struct PipelineBoard {
    pipeline: String,
    graph: PhaseGraph,
    controllers: HashMap<String, PromotionController>,
    /// Controllers of removed phases still waiting on a promotion
    parked: HashMap<String, PromotionController>,
}

impl PipelineBoard {
    pub fn new(pipeline: impl Into<String>) -> Self {
        Self {
            pipeline: pipeline.into(),
            graph: PhaseGraph::default(),
            controllers: HashMap::new(),
            parked: HashMap::new(),
        }
    }

    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    pub fn graph(&self) -> &PhaseGraph {
        &self.graph
    }

    pub fn controller(&self, phase: &str) -> Option<&PromotionController> {
        self.controllers.get(phase)
    }

    /// Replace the graph with a new snapshot.
    ///
    /// On error nothing changes: the previous graph and every controller
    /// stay as they were.
    pub fn apply_snapshot(&mut self, phases: &[Phase]) -> Result<(), GraphError> {
        let graph = PhaseGraph::build(phases)?;

        let removed: Vec<String> = self
            .controllers
            .keys()
            .filter(|name| !graph.contains(name))
            .cloned()
            .collect();
        for name in removed {
            if let Some(controller) = self.controllers.remove(&name) {
                if controller.is_promoting() {
                    self.parked.insert(name, controller);
                }
            }
        }

        for node in graph.nodes() {
            if let Some(controller) = self.parked.remove(&node.id) {
                self.controllers.insert(node.id.clone(), controller);
            }
            match self.controllers.get_mut(&node.id) {
                Some(controller) => controller.set_promotable(node.data.is_promotable()),
                None => {
                    self.controllers.insert(
                        node.id.clone(),
                        PromotionController::new(self.pipeline.clone(), &node.data),
                    );
                }
            }
        }

        tracing::debug!(
            pipeline = %self.pipeline,
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "snapshot applied"
        );
        self.graph = graph;
        Ok(())
    }

    /// Feed one input to one phase's controller
    pub fn handle(
        &mut self,
        phase: &str,
        event: PromotionEvent,
        ids: &impl IdGen,
    ) -> Result<Vec<Effect>, BoardError> {
        if matches!(event, PromotionEvent::Completed { .. }) {
            if let Some(controller) = self.parked.remove(phase) {
                return Ok(self.settle_parked(phase, controller, event, ids));
            }
        }

        let controller = self
            .controllers
            .get_mut(phase)
            .ok_or_else(|| BoardError::UnknownPhase {
                pipeline: self.pipeline.clone(),
                phase: phase.to_string(),
            })?;

        let from = controller.state().name();
        let (next, effects) = controller.transition(event, ids);
        tracing::debug!(
            pipeline = %self.pipeline,
            phase,
            from,
            to = next.state().name(),
            "promotion transition"
        );
        *controller = next;
        Ok(effects)
    }

    /// Apply a completion to a removed phase's controller.
    ///
    /// Its effects are discarded since the phase has no node to report on.
    /// A completion for a different request leaves it parked.
    fn settle_parked(
        &mut self,
        phase: &str,
        controller: PromotionController,
        event: PromotionEvent,
        ids: &impl IdGen,
    ) -> Vec<Effect> {
        let (next, _) = controller.transition(event, ids);
        if next.is_promoting() {
            self.parked.insert(phase.to_string(), next);
        } else {
            tracing::debug!(pipeline = %self.pipeline, phase, "settled removed phase");
        }
        Vec::new()
    }

    /// Whether a phase still has a promotion in flight, shown or not
    pub fn is_promoting(&self, phase: &str) -> bool {
        self.controllers
            .get(phase)
            .or_else(|| self.parked.get(phase))
            .is_some_and(PromotionController::is_promoting)
    }

    /// One view per node, in snapshot order
    pub fn views(&self) -> Vec<PhaseNodeView> {
        self.graph
            .nodes()
            .iter()
            .filter_map(|node| {
                let controller = self.controllers.get(&node.id)?;
                Some(PhaseNodeView::new(&self.pipeline, &node.data, controller))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
