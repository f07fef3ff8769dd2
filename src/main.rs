//! # Compound Objects CLI
//!
//! This is the binary entry point for the `compound-objects` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The traced types and scenarios live in the `lib.rs` library crate; the
//! binary only selects scenarios and prints their transcript.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
