//! # Demo Command Implementation
//!
//! This module implements the `demo` subcommand, which runs lifecycle
//! scenarios and prints the trace they emit.
//!
//! ## Functionality
//!
//! - **Scenario selection**: `--scenario` may be repeated; without it every
//!   scenario runs in canonical order.
//! - **Formats**: `text` prints one indented line per event with section
//!   titles; `json` prints one JSON object per record.
//!
//! ## Example
//!
//! ```bash
//! compound-objects demo --scenario compound
//! compound-objects demo --format json | jq .
//! ```

use anyhow::Result;
use clap::Args;
use std::io;

use compound_objects::harness::{self, Scenario};
use compound_objects::output::{self, Format, OutputConfig};

/// Run lifecycle scenarios and print their trace
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Scenario to run (compound, leaf, self-assignment, virtual-destruction).
    ///
    /// May be given more than once. Defaults to all scenarios.
    #[arg(short, long, value_name = "NAME")]
    pub scenario: Vec<Scenario>,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: Format,
}

/// Execute the `demo` command.
pub fn execute(args: DemoArgs, output: &OutputConfig) -> Result<()> {
    let scenarios = if args.scenario.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        args.scenario
    };
    log::info!(
        "running scenarios: {}",
        scenarios
            .iter()
            .map(|scenario| scenario.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let transcript = harness::run(&scenarios);
    log::debug!("captured {} records", transcript.records().len());

    let mut stdout = io::stdout().lock();
    output::write_transcript(&mut stdout, &transcript, args.format, output)?;
    Ok(())
}
