// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gate-core: Core library for the gate phase graph
//!
//! This crate provides:
//! - The phase data model and its source-kind dispatch
//! - Graph construction from a flat phase snapshot
//! - Deterministic label coloring
//! - The pure promotion state machine and its effects
//! - The per-node view contract consumed by rendering hosts

pub mod color;
pub mod id;
pub mod traced;

// Model and state machines (order matters for dependencies)
pub mod phase;
pub mod event;
pub mod effect;
pub mod graph;
pub mod promotion;
pub mod view;

// Re-exports
pub use color::{resolve_label_color, ColorToken};
pub use effect::Effect;
pub use event::Event;
pub use graph::{Edge, GraphError, Node, PhaseGraph};
pub use id::{IdGen, RequestId, SequentialIdGen, UuidIdGen};
pub use phase::{Icon, Phase, Source, SourceKind, ANNOTATION_OCI_IMAGE_URL};
pub use promotion::{PromotionController, PromotionEvent, PromotionFailure, PromotionState};
pub use traced::TracedEffect;
pub use view::{ImageRef, LabelTag, PhaseNodeView, PromotionView};
