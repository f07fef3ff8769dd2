//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use std::process::Output;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{event_lines, stdout_of};
}

/// Stdout of a finished command as a `String`.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// The event lines of a text-format transcript.
///
/// Events are printed as `"\n  <event>"` and titles as a two-space indented
/// text line followed by a one-space indented underline. Titles are dropped
/// by pairing each line with the one after it.
pub fn event_lines(stdout: &str) -> Vec<String> {
    let lines: Vec<&str> = stdout.lines().collect();
    let mut events = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let line = lines[index];
        let underlined = lines
            .get(index + 1)
            .is_some_and(|next| next.starts_with(' ') && !next.starts_with("  "));
        if underlined {
            index += 2;
            continue;
        }
        if let Some(event) = line.strip_prefix("  ") {
            events.push(event.to_string());
        }
        index += 1;
    }
    events
}
