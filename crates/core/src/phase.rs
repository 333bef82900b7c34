// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase records
//!
//! A phase is one stage of a delivery pipeline. Phases arrive as a flat
//! snapshot from the control plane and are immutable for the lifetime of
//! that snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source annotation holding the registry location of an OCI image
pub const ANNOTATION_OCI_IMAGE_URL: &str = "dev.getglu.oci.image.url";

/// Where a phase's artifact comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

/// One stage of a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub digest: String,
    /// Name of the upstream phase, empty when there is none
    #[serde(default)]
    pub depends_on: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source.name = source.into();
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.source.annotations.insert(key.into(), value.into());
        self
    }

    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = digest.into();
        self
    }

    pub fn depends_on(mut self, upstream: impl Into<String>) -> Self {
        self.depends_on = upstream.into();
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// The upstream phase name, if any
    pub fn upstream(&self) -> Option<&str> {
        if self.depends_on.is_empty() {
            None
        } else {
            Some(&self.depends_on)
        }
    }

    /// Whether this phase sits behind a dependency gate and can be promoted
    pub fn is_promotable(&self) -> bool {
        self.upstream().is_some()
    }

    pub fn source_kind(&self) -> SourceKind {
        SourceKind::parse(&self.source.name)
    }

    /// Trailing segment of the digest shown to operators
    pub fn digest_suffix(&self) -> &str {
        const SUFFIX_CHARS: usize = 12;

        let count = self.digest.chars().count();
        if count <= SUFFIX_CHARS {
            return &self.digest;
        }
        match self.digest.char_indices().nth(count - SUFFIX_CHARS) {
            Some((idx, _)) => &self.digest[idx..],
            None => &self.digest,
        }
    }

    /// Image location annotation, if present
    pub fn image_url(&self) -> Option<&str> {
        self.source
            .annotations
            .get(ANNOTATION_OCI_IMAGE_URL)
            .map(String::as_str)
    }
}

/// Kind of source a phase pulls from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Oci,
    Git,
    Other(String),
}

impl SourceKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "oci" => SourceKind::Oci,
            "git" => SourceKind::Git,
            other => SourceKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceKind::Oci => "oci",
            SourceKind::Git => "git",
            SourceKind::Other(name) => name,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            SourceKind::Oci => Icon::Package,
            SourceKind::Git | SourceKind::Other(_) => Icon::GitBranch,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon token handed to the rendering host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Package,
    GitBranch,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Package => "package",
            Icon::GitBranch => "git-branch",
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
