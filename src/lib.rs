//! # Compound Objects Library
//!
//! This library traces the special operations of composed and inherited
//! value types: default, copy and move construction, copy and move
//! assignment, and destruction. Each operation emits one trace event, and
//! the ordered event stream shows how member, base and derived operations
//! nest.
//!
//! ## Quick Example
//!
//! ```
//! use compound_objects::derived::DerivedComposite;
//! use compound_objects::lifecycle::Lifecycle;
//! use compound_objects::trace;
//!
//! let mut source = DerivedComposite::default();
//! let (_moved, transcript) = trace::record(|| DerivedComposite::move_construct(&mut source));
//!
//! // The member moves first, then the base portion, then the derived value
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["C move construction", "B move construction", "D move construction"]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Trace (`trace`)**: events, titles, and thread-local recordings that
//!   capture them into a `Transcript`.
//! - **Lifecycle (`lifecycle`)**: the trait mapping the six special
//!   operations onto Rust.
//! - **Value types (`leaf`, `base`, `utility`, `derived`)**: the traced
//!   family. `base` also defines the `Composite` trait for dispatch through a
//!   base handle.
//! - **Frames (`frame`)**: scopes of slots, where a value can be assigned
//!   from itself.
//! - **Harness (`harness`)**: the runnable scenarios.
//! - **Output (`output`)**: text and JSON rendering of transcripts.

pub mod base;
pub mod derived;
pub mod error;
pub mod frame;
pub mod harness;
pub mod leaf;
pub mod lifecycle;
pub mod output;
pub mod trace;
pub mod utility;

#[cfg(test)]
mod lifecycle_proptest;
