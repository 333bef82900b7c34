// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gate graph` - render a pipeline's phase graph

use crate::error::GateError;
use crate::output::{self, OutputFormat};
use clap::Args;
use gate_adapters::SnapshotAdapter;
use gate_core::{Edge, PhaseNodeView};
use gate_engine::PipelineBoard;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct GraphArgs {
    /// Pipeline to render
    pub pipeline: String,

    /// Read phases from a JSON snapshot file instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Rendered graph for one pipeline
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub pipeline: String,
    pub nodes: Vec<PhaseNodeView>,
    pub edges: Vec<Edge>,
}

impl GraphReport {
    pub fn from_board(board: &PipelineBoard) -> Self {
        Self {
            pipeline: board.pipeline().to_string(),
            nodes: board.views(),
            edges: board.graph().edges().to_vec(),
        }
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline: {}", self.pipeline)?;
        if self.nodes.is_empty() {
            return writeln!(f, "No phases");
        }

        writeln!(f)?;
        for node in &self.nodes {
            let digest = if node.digest_suffix.is_empty() {
                "-"
            } else {
                &node.digest_suffix
            };
            writeln!(
                f,
                "{} [{}] {} {}",
                node.name,
                node.source_kind,
                node.icon.as_str(),
                digest
            )?;
            if let Some(image) = &node.image {
                writeln!(f, "  image: {}", image.href)?;
            }
            if !node.labels.is_empty() {
                let labels: Vec<String> = node
                    .labels
                    .iter()
                    .map(|l| format!("{}={} ({})", l.key, l.value, l.color))
                    .collect();
                writeln!(f, "  labels: {}", labels.join(", "))?;
            }
            if let Some(promotion) = &node.promotion {
                writeln!(f, "  promote: {}", promotion.state)?;
                if let Some(failure) = &promotion.last_error {
                    writeln!(f, "  last error: {}", failure.message)?;
                }
            }
        }

        if !self.edges.is_empty() {
            writeln!(f)?;
            writeln!(f, "Edges:")?;
            for edge in &self.edges {
                writeln!(f, "  {} -> {}", edge.from, edge.to)?;
            }
        }
        Ok(())
    }
}

pub async fn handle(args: GraphArgs, source: impl SnapshotAdapter) -> anyhow::Result<()> {
    let phases = super::fetch_phases(&source, &args.pipeline).await?;

    let mut board = PipelineBoard::new(&args.pipeline);
    board
        .apply_snapshot(&phases)
        .map_err(|e| GateError::snapshot_rejected(&args.pipeline, e))?;

    output::print(&GraphReport::from_board(&board), args.format)
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
