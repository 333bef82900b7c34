// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase graph construction
//!
//! Turns a flat phase snapshot into nodes and "depends on" edges. The
//! graph is rebuilt from scratch for every snapshot; an inconsistent
//! snapshot is refused as a whole rather than partially rendered.

use crate::phase::Phase;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Snapshot integrity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("duplicate phase name: {name}")]
    DuplicatePhaseName { name: String },
    #[error("phase {phase} depends on unknown phase {depends_on}")]
    DanglingDependency { phase: String, depends_on: String },
}

/// A graph node, keyed by phase name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub data: Phase,
}

/// A dependency edge from the upstream phase to its dependent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn id(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }
}

/// Nodes and edges derived from one snapshot, in snapshot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl PhaseGraph {
    /// Build the graph for a snapshot.
    ///
    /// Emits one node per phase and one edge per non-empty `depends_on`.
    /// Fails on the first duplicate name, then on the first dependency that
    /// names a phase outside the snapshot.
    pub fn build(phases: &[Phase]) -> Result<Self, GraphError> {
        let mut names = HashSet::with_capacity(phases.len());
        for phase in phases {
            if !names.insert(phase.name.as_str()) {
                return Err(GraphError::DuplicatePhaseName {
                    name: phase.name.clone(),
                });
            }
        }

        let mut edges = Vec::new();
        for phase in phases {
            let Some(upstream) = phase.upstream() else {
                continue;
            };
            if !names.contains(upstream) {
                return Err(GraphError::DanglingDependency {
                    phase: phase.name.clone(),
                    depends_on: upstream.to_string(),
                });
            }
            edges.push(Edge {
                from: upstream.to_string(),
                to: phase.name.clone(),
            });
        }

        let nodes = phases
            .iter()
            .map(|phase| Node {
                id: phase.name.clone(),
                data: phase.clone(),
            })
            .collect();

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Phases gated directly behind `id`
    pub fn downstream<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .map(|e| e.to.as_str())
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
