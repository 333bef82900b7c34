// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors with context and recovery suggestions.

use std::fmt;

/// Error with context and recovery suggestions for terminal display.
#[derive(Debug)]
pub struct GateError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures commands report.
impl GateError {
    pub fn invalid_config<E: std::error::Error + Send + Sync + 'static>(source: E) -> Self {
        GateError::new(source.to_string())
            .with_suggestion("Pass a different file with --config <path>")
            .with_source(source)
    }

    /// The snapshot source could not be read or reached.
    pub fn snapshot_unavailable<E: std::error::Error + Send + Sync + 'static>(
        pipeline: &str,
        source: E,
    ) -> Self {
        GateError::new(format!("Could not load phases for pipeline '{pipeline}'"))
            .with_context(source.to_string())
            .with_suggestion(format!(
                "Check the API address, or set {}",
                crate::config::API_URL_ENV
            ))
            .with_suggestion("Read phases from a local file with --file <path>")
            .with_source(source)
    }

    /// The snapshot was read but its phases do not form a graph.
    pub fn snapshot_rejected<E: std::error::Error + Send + Sync + 'static>(
        pipeline: &str,
        source: E,
    ) -> Self {
        GateError::new(format!("Snapshot for pipeline '{}' rejected", pipeline))
            .with_context(source.to_string())
            .with_suggestion("Fix the phase definitions and retry")
            .with_source(source)
    }

    pub fn phase_not_found(pipeline: &str, phase: &str) -> Self {
        GateError::new(format!("Phase '{phase}' not found in pipeline '{pipeline}'"))
            .with_suggestion(format!("List phases with: gate graph {}", pipeline))
    }

    /// Promotion was refused before any call was made.
    pub fn promotion_rejected(pipeline: &str, phase: &str, reason: &str) -> Self {
        GateError::new(format!("Cannot promote '{phase}' in pipeline '{pipeline}'"))
            .with_context(reason.to_string())
    }

    pub fn promotion_failed(pipeline: &str, phase: &str, error: &str) -> Self {
        GateError::new(format!("Promotion of '{phase}' in pipeline '{pipeline}' failed"))
            .with_context(error.to_string())
            .with_suggestion(format!("Retry with: gate promote {pipeline} {phase}"))
    }

    pub fn confirmation_unavailable(reason: impl fmt::Display) -> Self {
        GateError::new("Could not prompt for confirmation")
            .with_context(reason.to_string())
            .with_suggestion("Skip the prompt with --yes")
    }
}
