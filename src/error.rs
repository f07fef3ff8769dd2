//! # Error Handling
//!
//! The traced value types never fail: every special operation is total. The
//! errors in this module belong to the surface around them, which selects
//! scenarios by name, picks an output format and writes the transcript.
//!
//! - **`Error`**: built with `thiserror`, one variant per failure of that
//!   surface.
//! - **`Result<T>`**: alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for compound-objects operations
#[derive(Error, Debug)]
pub enum Error {
    /// A scenario name did not match any known scenario.
    ///
    /// The hint lists the accepted names.
    #[error("Unknown scenario: {name}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    UnknownScenario {
        name: String,
        /// Optional hint listing the valid scenario names
        hint: Option<String>,
    },

    /// An output format name was not `text` or `json`.
    #[error("Unknown output format: {name} (expected `text` or `json`)")]
    UnknownFormat { name: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
