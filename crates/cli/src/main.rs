// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gate - inspect pipeline phase graphs and promote gated phases

mod adapters;
mod commands;
mod completions;
mod config;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{graph, promote, watch};
use completions::CompletionsArgs;
use config::Config;
use error::GateError;
use gate_core::UuidIdGen;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gate",
    version,
    about = "gate - pipeline phase graphs and gated promotion"
)]
struct Cli {
    /// Config file (default: ./gate.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a pipeline's phases and dependency edges
    Graph(graph::GraphArgs),
    /// Promote a phase past its dependency gate
    Promote(promote::PromoteArgs),
    /// Poll a pipeline and print digest changes
    Watch(watch::WatchArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GateError>() {
                Some(gate) => eprint!("{}", gate),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Graph(args) => {
            let config = init(config_path)?;
            let source = adapters::phase_source(args.file.as_deref(), &config);
            graph::handle(args, source).await
        }
        Commands::Promote(args) => {
            let config = init(config_path)?;
            let source = adapters::phase_source(args.file.as_deref(), &config);
            let target = adapters::promotion_target(args.dry_run, &config);
            promote::handle(args, source, target, UuidIdGen).await
        }
        Commands::Watch(args) => {
            let config = init(config_path)?;
            let source = adapters::phase_source(args.file.as_deref(), &config);
            watch::handle(args, source).await
        }
        // Needs neither config nor logging
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

fn init(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::load(config_path).map_err(GateError::invalid_config)?;
    setup_logging(&config.log.level);
    Ok(config)
}

/// Log to stderr, filtered by `RUST_LOG` or the configured level
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
