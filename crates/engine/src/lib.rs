// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gate execution engine: owns the phase board and runs promotion effects

mod board;
mod error;
mod executor;
mod runtime;

pub use board::PipelineBoard;
pub use error::{BoardError, RuntimeError};
pub use executor::{Completion, Executor};
pub use runtime::Runtime;
