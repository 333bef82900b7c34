// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gate watch` - poll a pipeline and report digest changes

use clap::Args;
use gate_adapters::SnapshotAdapter;
use gate_core::PhaseGraph;
use gate_engine::PipelineBoard;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Args)]
pub struct WatchArgs {
    pub pipeline: String,

    /// Read phases from a JSON snapshot file instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Time between polls (e.g. 5s, 1m)
    #[arg(long, default_value = "5s", value_parser = parse_interval)]
    pub interval: Duration,

    /// Stop after this many polls
    #[arg(long)]
    pub count: Option<u64>,
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let interval = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if interval.is_zero() {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(interval)
}

/// A difference between two consecutive graphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { phase: String, digest: String },
    Removed { phase: String },
    Digest { phase: String, from: String, to: String },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Added { phase, digest } => write!(f, "+ {} {}", phase, or_dash(digest)),
            Change::Removed { phase } => write!(f, "- {}", phase),
            Change::Digest { phase, from, to } => {
                write!(f, "~ {} {} -> {}", phase, or_dash(from), or_dash(to))
            }
        }
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Changes from `before` to `after`, in snapshot order, removals last
pub fn diff(before: &PhaseGraph, after: &PhaseGraph) -> Vec<Change> {
    let mut changes = Vec::new();

    for node in after.nodes() {
        match before.node(&node.id) {
            Some(prev) if prev.data.digest != node.data.digest => {
                let (from, to) = (prev.data.digest_suffix(), node.data.digest_suffix());
                // Suffixes alone would hide the change
                let (from, to) = if from == to {
                    (prev.data.digest.as_str(), node.data.digest.as_str())
                } else {
                    (from, to)
                };
                changes.push(Change::Digest {
                    phase: node.id.clone(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            Some(_) => {}
            None => changes.push(Change::Added {
                phase: node.id.clone(),
                digest: node.data.digest_suffix().to_string(),
            }),
        }
    }

    for node in before.nodes() {
        if !after.contains(&node.id) {
            changes.push(Change::Removed {
                phase: node.id.clone(),
            });
        }
    }

    changes
}

/// Result of one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// First accepted snapshot
    Initial { nodes: usize, edges: usize },
    Changed(Vec<Change>),
    /// Snapshot failed validation; the previous graph is kept
    Rejected(String),
    /// Snapshot could not be fetched
    Unavailable(String),
}

/// Board fed by repeated fetches from one source
pub struct Watcher<S> {
    source: S,
    board: PipelineBoard,
    seeded: bool,
}

impl<S: SnapshotAdapter> Watcher<S> {
    pub fn new(pipeline: impl Into<String>, source: S) -> Self {
        Self {
            source,
            board: PipelineBoard::new(pipeline),
            seeded: false,
        }
    }

    pub async fn poll(&mut self) -> Poll {
        let snapshot = match self.source.fetch(self.board.pipeline()).await {
            Ok(snapshot) => snapshot,
            Err(e) => return Poll::Unavailable(e.to_string()),
        };

        let before = self.board.graph().clone();
        if let Err(e) = self.board.apply_snapshot(&snapshot.phases) {
            tracing::warn!(pipeline = self.board.pipeline(), error = %e, "snapshot rejected");
            return Poll::Rejected(e.to_string());
        }

        if !self.seeded {
            self.seeded = true;
            let graph = self.board.graph();
            return Poll::Initial {
                nodes: graph.nodes().len(),
                edges: graph.edges().len(),
            };
        }
        Poll::Changed(diff(&before, self.board.graph()))
    }
}

fn report(pipeline: &str, poll: Poll) {
    match poll {
        Poll::Initial { nodes, edges } => {
            println!("Watching {pipeline}: {nodes} phases, {edges} edges");
        }
        Poll::Changed(changes) => {
            for change in changes {
                println!("{}", change);
            }
        }
        Poll::Rejected(error) => {
            eprintln!("snapshot rejected, keeping previous graph: {error}");
        }
        Poll::Unavailable(error) => eprintln!("fetch failed: {}", error),
    }
}

pub async fn handle(args: WatchArgs, source: impl SnapshotAdapter) -> anyhow::Result<()> {
    let mut watcher = Watcher::new(&args.pipeline, source);

    let mut ticker = tokio::time::interval(args.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut polls = 0u64;
    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = ticker.tick() => {
                let poll = watcher.poll().await;
                report(&args.pipeline, poll);
                polls += 1;
                if args.count.is_some_and(|count| polls >= count) {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
