//! # Special Operations
//!
//! Rust expresses most of the six special operations with standard traits:
//!
//! | Operation            | Rust form                         |
//! |----------------------|-----------------------------------|
//! | default construction | [`Default::default`]              |
//! | copy construction    | [`Clone::clone`]                  |
//! | copy assignment      | [`Lifecycle::copy_assign`], also reached through [`Clone::clone_from`] |
//! | move construction    | [`Lifecycle::move_construct`]     |
//! | move assignment      | [`Lifecycle::move_assign`]        |
//! | destruction          | [`Drop::drop`]                    |
//!
//! A plain Rust move is a bitwise relocation and runs no code, so the traced
//! moves are explicit methods that take the payload out of a borrowed source
//! and leave it valid and empty.
//!
//! Composite types implement each operation by first running the same
//! operation on their member or base, then emitting their own event.

use crate::trace::{self, SpecialOp};

/// The two kinds of assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Copy,
    Move,
}

impl From<Assignment> for SpecialOp {
    fn from(kind: Assignment) -> Self {
        match kind {
            Assignment::Copy => SpecialOp::CopyAssignment,
            Assignment::Move => SpecialOp::MoveAssignment,
        }
    }
}

/// A value type whose special operations are traced.
pub trait Lifecycle: Default + Clone {
    /// One-letter label naming the type in trace output.
    const LABEL: &'static str;

    /// Construct a new value by taking the payload out of `source`.
    ///
    /// `source` is left valid and empty.
    fn move_construct(source: &mut Self) -> Self;

    /// Overwrite `self` with an independent copy of `source`.
    fn copy_assign(&mut self, source: &Self);

    /// Overwrite `self` by taking the payload out of `source`.
    ///
    /// `source` is left valid and empty.
    fn move_assign(&mut self, source: &mut Self);

    /// Assignment whose source is the receiver itself.
    ///
    /// Emits the receiver's own assignment event and changes nothing; members
    /// and bases are not touched. Reached through [`crate::frame::Frame`],
    /// the only place a value can be assigned from itself.
    fn self_assign(&mut self, kind: Assignment) {
        trace::special(Self::LABEL, kind.into());
    }
}
