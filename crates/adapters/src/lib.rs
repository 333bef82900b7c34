// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the control plane: promotion calls and phase snapshots

pub mod http;
pub mod promote;
pub mod snapshot;
pub mod traced;

pub use http::ApiEndpoint;
pub use promote::{HttpPromotionAdapter, NoOpPromotionAdapter, PromotionAdapter, PromotionError};
pub use snapshot::{
    FileSnapshotAdapter, HttpSnapshotAdapter, PipelineSnapshot, SnapshotAdapter, SnapshotError,
};
pub use traced::{TracedPromotionAdapter, TracedSnapshotAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use promote::{FakePromotionAdapter, PromotionCall};
#[cfg(any(test, feature = "test-support"))]
pub use snapshot::FakeSnapshotAdapter;
