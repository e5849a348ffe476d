//! Clap command definition.

use clap::{Arg, Command};

use crate::scenarios::Scenario;

/// Build the playground command.
pub fn build_cli() -> Command {
    Command::new("semantic-type-playground")
        .about("Run the semantic type scenarios and report every outcome")
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json"])
                .default_value("human"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter, e.g. debug or playground=trace (default: RUST_LOG, else info)"),
        )
        .arg(
            Arg::new("scenario")
                .value_name("SCENARIO")
                .help("Scenario to run")
                .value_parser(Scenario::NAMES)
                .default_value("all"),
        )
}
