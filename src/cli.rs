//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use compound_objects::output::OutputConfig;

use crate::commands;

/// Compound Objects - Trace construction, copy, move, assignment and destruction order
#[derive(Parser, Debug)]
#[command(name = "compound-objects")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run lifecycle scenarios and print their trace
    Demo(commands::demo::DemoArgs),

    /// List the available scenarios
    Scenarios,

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Demo(args) => commands::demo::execute(args, &output),
            Commands::Scenarios => commands::scenarios::execute(&output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize `env_logger` at `level`, letting `RUST_LOG` override it.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
