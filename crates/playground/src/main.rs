//! Semantic type playground — runs concrete scenarios against the catalog.
//!
//! `semantic-type-playground [--format human|json] [--log-level LEVEL] [SCENARIO]`
//!
//! Every step is logged through `tracing` (to stderr) and reported on stdout.
//! The exit code is 0 when every step behaved as documented, 1 otherwise.

mod commands;
mod format;
mod scenarios;

use std::process;

use anyhow::{anyhow, Context, Result};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{all_passed, format_observations, OutputMode};
use scenarios::Scenario;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_one::<String>("log-level").map(String::as_str))?;

    let format_flag = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("human");
    let mode = OutputMode::from_flag(format_flag)
        .ok_or_else(|| anyhow!("unsupported output format: {}", format_flag))?;

    let scenario_name = matches
        .get_one::<String>("scenario")
        .map(String::as_str)
        .unwrap_or("all");
    let selected = Scenario::select(scenario_name)
        .ok_or_else(|| anyhow!("unknown scenario: {}", scenario_name))?;

    info!(scenarios = selected.len(), "Running playground");
    let observations = scenarios::run_all(&selected);

    println!("{}", format_observations(&observations, mode)?);

    if all_passed(&observations) {
        info!(steps = observations.len(), "All steps behaved as expected");
        Ok(0)
    } else {
        error!("At least one step diverged from its documented outcome");
        Ok(1)
    }
}

/// Install the fmt subscriber: `--log-level`, else `RUST_LOG`, else `info`.
fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("failed to install log subscriber")
}
