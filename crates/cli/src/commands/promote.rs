// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gate promote` - walk one phase through the promotion protocol

use crate::error::GateError;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use gate_adapters::{PromotionAdapter, SnapshotAdapter};
use gate_core::{Event, IdGen, RequestId};
use gate_engine::{Runtime, RuntimeError};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Args)]
pub struct PromoteArgs {
    pub pipeline: String,

    /// Phase to promote past its dependency gate
    pub phase: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Read phases from a JSON snapshot file instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Walk the protocol without calling the control plane
    #[arg(long)]
    pub dry_run: bool,
}

/// How a promotion attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Promoted { request_id: RequestId },
    Cancelled,
}

/// Run the controller protocol for one phase.
///
/// `confirm` is asked once, after the confirmation is opened; a `false`
/// answer cancels without sending anything.
pub async fn run<S, P, I>(
    pipeline: &str,
    phase: &str,
    source: &S,
    target: P,
    ids: I,
    confirm: impl FnOnce() -> Result<bool, GateError>,
) -> Result<Outcome, GateError>
where
    S: SnapshotAdapter,
    P: PromotionAdapter,
    I: IdGen,
{
    let phases = super::fetch_phases(source, pipeline).await?;

    let mut runtime = Runtime::new(pipeline, target, ids);
    runtime
        .apply_snapshot(&phases)
        .map_err(|e| GateError::snapshot_rejected(pipeline, e))?;

    let events = runtime
        .request_confirmation(phase)
        .map_err(|e| protocol_error(pipeline, phase, e))?;
    reject_if_refused(pipeline, phase, &events)?;

    if !confirm()? {
        runtime
            .cancel(phase)
            .map_err(|e| protocol_error(pipeline, phase, e))?;
        return Ok(Outcome::Cancelled);
    }

    let events = runtime
        .confirm(phase)
        .map_err(|e| protocol_error(pipeline, phase, e))?;
    reject_if_refused(pipeline, phase, &events)?;

    while let Some(events) = runtime.next_completion().await {
        for event in events {
            match event {
                Event::PromotionSucceeded { request_id, .. } => {
                    return Ok(Outcome::Promoted { request_id });
                }
                Event::PromotionFailed { error, .. } => {
                    return Err(GateError::promotion_failed(pipeline, phase, &error));
                }
                other => tracing::debug!(event = other.name(), "ignoring event"),
            }
        }
    }

    Err(GateError::promotion_failed(
        pipeline,
        phase,
        "no response from the promotion call",
    ))
}

fn reject_if_refused(pipeline: &str, phase: &str, events: &[Event]) -> Result<(), GateError> {
    for event in events {
        if let Event::PromotionRejected { reason, .. } = event {
            return Err(GateError::promotion_rejected(pipeline, phase, reason));
        }
    }
    Ok(())
}

fn protocol_error(pipeline: &str, phase: &str, err: RuntimeError) -> GateError {
    match err {
        RuntimeError::Board(_) => GateError::phase_not_found(pipeline, phase),
        other => GateError::new(other.to_string()).with_source(other),
    }
}

fn prompt(pipeline: &str, phase: &str) -> Result<bool, GateError> {
    if !std::io::stdin().is_terminal() {
        return Err(GateError::confirmation_unavailable("stdin is not a terminal"));
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Promote '{phase}' in pipeline '{pipeline}'?"))
        .default(false)
        .interact()
        .map_err(GateError::confirmation_unavailable)
}

pub async fn handle<S, P, I>(args: PromoteArgs, source: S, target: P, ids: I) -> anyhow::Result<()>
where
    S: SnapshotAdapter,
    P: PromotionAdapter,
    I: IdGen,
{
    let PromoteArgs {
        pipeline,
        phase,
        yes,
        dry_run,
        ..
    } = args;

    let outcome = run(&pipeline, &phase, &source, target, ids, || {
        if yes {
            Ok(true)
        } else {
            prompt(&pipeline, &phase)
        }
    })
    .await?;

    match outcome {
        Outcome::Promoted { request_id } if dry_run => {
            println!("Promoted {pipeline}/{phase} (dry run, request {request_id})");
        }
        Outcome::Promoted { request_id } => {
            println!("Promoted {pipeline}/{phase} (request {request_id})");
        }
        Outcome::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "promote_tests.rs"]
mod tests;
