//! Observation → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one line per step, e.g. `[ok] seconds / Seconds(5) + 7: 12`
//! - **JSON** (`--format json`): `serde_json::to_string_pretty` of a report

use anyhow::{Context, Result};
use serde::Serialize;

use crate::scenarios::Observation;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    /// Parse the `--format` value.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "human" => Some(OutputMode::Human),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    passed: bool,
    observations: &'a [Observation],
}

/// Whether every observation matched its expectation.
pub fn all_passed(observations: &[Observation]) -> bool {
    observations.iter().all(Observation::as_expected)
}

/// Format a run.
pub fn format_observations(observations: &[Observation], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => format_json(observations),
        OutputMode::Human => Ok(format_human(observations)),
    }
}

fn format_json(observations: &[Observation]) -> Result<String> {
    let report = Report {
        passed: all_passed(observations),
        observations,
    };
    serde_json::to_string_pretty(&report).context("failed to encode report as JSON")
}

fn format_human(observations: &[Observation]) -> String {
    let mut lines: Vec<String> = observations
        .iter()
        .map(|o| {
            if o.as_expected() {
                format!("[ok] {} / {}: {}", o.scenario, o.step, o.outcome)
            } else {
                format!(
                    "[FAIL] {} / {}: {} (expected {})",
                    o.scenario, o.step, o.outcome, o.expected
                )
            }
        })
        .collect();
    let failed = observations.iter().filter(|o| !o.as_expected()).count();
    lines.push(format!(
        "{} step(s), {} failed",
        observations.len(),
        failed
    ));
    lines.join("\n")
}
