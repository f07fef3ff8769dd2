//! # Scenarios Command Implementation
//!
//! Lists every scenario the `demo` command can run, with a one-line
//! description. Read-only; nothing is traced.

use anyhow::Result;

use compound_objects::harness::Scenario;
use compound_objects::output::{emoji, OutputConfig};

/// Execute the `scenarios` command.
pub fn execute(output: &OutputConfig) -> Result<()> {
    println!("{} Scenarios", emoji(output, "📋", "[LIST]"));
    for scenario in Scenario::ALL {
        println!("  {:<20} {}", scenario.name(), scenario.description());
    }
    Ok(())
}
