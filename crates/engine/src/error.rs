// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use gate_core::GraphError;
use thiserror::Error;

/// Errors routing an input to a phase controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("phase {phase} not found in pipeline {pipeline}")]
    UnknownPhase { pipeline: String, phase: String },
}

/// Errors that can occur in the runtime
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("snapshot rejected: {0}")]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Board(#[from] BoardError),
}
