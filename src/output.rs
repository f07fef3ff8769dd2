//! # Output Configuration
//!
//! This module renders a [`Transcript`] for the terminal and controls output
//! appearance based on terminal capabilities and user preferences.
//!
//! ## Formats
//!
//! - **Text**: every event on its own indented line, every title followed by
//!   an underline. After the last record a single finalization step writes
//!   the trailing blank lines.
//! - **JSON**: one JSON object per record per line.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::trace::{Record, Transcript};

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// # Behavior
    /// - `--color=always`: Force colors on (overrides NO_COLOR)
    /// - `--color=never`: Force colors off
    /// - `--color=auto`: Detect based on environment
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the appropriate string based on color configuration.
///
/// When colors are enabled, returns the emoji. When disabled, returns
/// the plain text alternative.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// How a transcript is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Write `transcript` to `out` in the requested format.
pub fn write_transcript<W: Write>(
    out: &mut W,
    transcript: &Transcript,
    format: Format,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        Format::Text => {
            for record in transcript.records() {
                write_text_record(out, record, config)?;
            }
            finalize(out)?;
        }
        Format::Json => {
            for record in transcript.records() {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text_record<W: Write>(out: &mut W, record: &Record, config: &OutputConfig) -> Result<()> {
    match record {
        Record::Title { text, underline } => {
            let rule = underline.to_string().repeat(text.chars().count() + 2);
            if config.use_color {
                let styled = console::style(text).bold().force_styling(true);
                write!(out, "\n  {}\n {}", styled, rule)?;
            } else {
                write!(out, "\n  {}\n {}", text, rule)?;
            }
        }
        Record::Event(event) => write!(out, "\n  {}", event)?,
    }
    Ok(())
}

/// Trailing output written once, after the last record.
fn finalize<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "\n\n")?;
    Ok(())
}
