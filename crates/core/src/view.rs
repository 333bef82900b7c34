// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-node display contract
//!
//! Everything a rendering host needs to draw one phase node, flattened
//! into plain fields. Layout and styling stay with the host.

use crate::color::{resolve_label_color, ColorToken};
use crate::phase::{Icon, Phase};
use crate::promotion::{PromotionController, PromotionFailure, PromotionState};
use serde::Serialize;

const IMAGE_LINK_SCHEME: &str = "https://";

/// Clickable image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub display: String,
    pub href: String,
}

impl ImageRef {
    /// Prefix the annotation value with the secure scheme. No parsing, so
    /// malformed values pass through as-is.
    pub fn from_annotation(value: &str) -> Self {
        Self {
            display: value.to_string(),
            href: format!("{}{}", IMAGE_LINK_SCHEME, value),
        }
    }
}

/// A colored label badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelTag {
    pub key: String,
    pub value: String,
    pub color: ColorToken,
}

/// Promotion affordance for a gated phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionView {
    #[serde(flatten)]
    pub state: PromotionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<PromotionFailure>,
}

/// Display fields for one graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseNodeView {
    pub pipeline: String,
    pub name: String,
    pub source_kind: String,
    pub icon: Icon,
    pub digest_suffix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub labels: Vec<LabelTag>,
    /// Absent for phases without an upstream dependency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionView>,
}

impl PhaseNodeView {
    pub fn new(pipeline: &str, phase: &Phase, controller: &PromotionController) -> Self {
        let kind = phase.source_kind();

        let labels = phase
            .labels
            .iter()
            .map(|(key, value)| LabelTag {
                key: key.clone(),
                value: value.clone(),
                color: resolve_label_color(key, value),
            })
            .collect();

        let promotion = phase.is_promotable().then(|| PromotionView {
            state: controller.state().clone(),
            last_error: controller.last_error().cloned(),
        });

        Self {
            pipeline: pipeline.to_string(),
            name: phase.name.clone(),
            source_kind: kind.as_str().to_string(),
            icon: kind.icon(),
            digest_suffix: phase.digest_suffix().to_string(),
            image: phase.image_url().map(ImageRef::from_annotation),
            labels,
            promotion,
        }
    }

    pub fn is_promotable(&self) -> bool {
        self.promotion.is_some()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
