// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging hooks for effects

/// Effects that describe themselves for log spans
pub trait TracedEffect {
    /// Short span name (e.g. "promote", "emit")
    fn name(&self) -> &'static str;

    /// Key-value pairs attached to the span
    fn fields(&self) -> Vec<(&'static str, String)>;
}
