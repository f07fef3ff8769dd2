//! # Leaf Value
//!
//! The innermost traced type. It owns a heap-allocated text payload, which
//! makes the difference between copying and moving observable: a copy
//! duplicates the payload and a move takes it, leaving the source holding the
//! empty string.

use std::mem;

use crate::lifecycle::Lifecycle;
use crate::trace::{self, SpecialOp};

/// Value with an owned text payload. Traced under the label `C`.
#[derive(Debug, PartialEq, Eq)]
pub struct LeafValue {
    name: String,
}

impl LeafValue {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// True when the payload is empty, as after default construction or a move-out.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for LeafValue {
    fn default() -> Self {
        let leaf = Self {
            name: String::new(),
        };
        trace::special(Self::LABEL, SpecialOp::DefaultConstruction);
        leaf
    }
}

impl Clone for LeafValue {
    fn clone(&self) -> Self {
        let leaf = Self {
            name: self.name.clone(),
        };
        trace::special(Self::LABEL, SpecialOp::CopyConstruction);
        leaf
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}

impl Lifecycle for LeafValue {
    const LABEL: &'static str = "C";

    fn move_construct(source: &mut Self) -> Self {
        let leaf = Self {
            name: mem::take(&mut source.name),
        };
        trace::special(Self::LABEL, SpecialOp::MoveConstruction);
        leaf
    }

    fn copy_assign(&mut self, source: &Self) {
        self.name.clone_from(&source.name);
        trace::special(Self::LABEL, SpecialOp::CopyAssignment);
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.name = mem::take(&mut source.name);
        trace::special(Self::LABEL, SpecialOp::MoveAssignment);
    }
}

impl Drop for LeafValue {
    fn drop(&mut self) {
        trace::special(Self::LABEL, SpecialOp::Destruction);
    }
}
