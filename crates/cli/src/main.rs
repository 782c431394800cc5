// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod snapshot;

use clap::Parser;
use error::CliError;
use serde::Serialize;
use shiftwise::{CycleReport, RecommenderConfig, apply_transitions, process_cycle};
use shiftwise_domain::Game;
use snapshot::{CycleSnapshot, RunInputs};
use std::path::{Path, PathBuf};
use tracing::info;

/// Shiftwise - recommends two candidates for every open shift in a scheduling cycle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot (cycle, games, roster, and per-employee records)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Path to a JSON recommender configuration. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also emit the games with the recommendations applied
    #[arg(long)]
    apply: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Output document written to stdout.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    report: &'a CycleReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<&'a [Game]>,
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(path: Option<&Path>) -> Result<RecommenderConfig, CliError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading recommender configuration");
            Ok(RecommenderConfig::from_json(&read(path)?)?)
        }
        None => Ok(RecommenderConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config: RecommenderConfig = load_config(args.config.as_deref())?;

    info!(path = %args.snapshot.display(), "Loading snapshot");
    let inputs: RunInputs = CycleSnapshot::from_json(&read(&args.snapshot)?)?.into_inputs()?;
    let mut games: Vec<Game> = inputs.games;

    let report: CycleReport = process_cycle(&inputs.cycle, &games, &inputs.data, &config)?;

    let applied: Option<&[Game]> = if args.apply {
        let count: usize = apply_transitions(&mut games, &report.transitions)?;
        info!(shifts = count, "Applied recommendations");
        Some(games.as_slice())
    } else {
        None
    };

    let output: RunOutput<'_> = RunOutput {
        report: &report,
        games: applied,
    };
    let json: String = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
