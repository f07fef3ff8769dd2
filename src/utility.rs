//! # Utility Value
//!
//! A stateless type that is only ever borrowed by
//! [`crate::derived::DerivedComposite::use_utility`]. Its special operations
//! change nothing, so they are observable only through their trace events.

use crate::lifecycle::Lifecycle;
use crate::trace::{self, SpecialOp};

/// Stateless traced value. Traced under the label `U`.
#[derive(Debug, PartialEq, Eq)]
pub struct UtilityValue(());

impl Default for UtilityValue {
    fn default() -> Self {
        trace::special(Self::LABEL, SpecialOp::DefaultConstruction);
        Self(())
    }
}

impl Clone for UtilityValue {
    fn clone(&self) -> Self {
        trace::special(Self::LABEL, SpecialOp::CopyConstruction);
        Self(())
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}

impl Lifecycle for UtilityValue {
    const LABEL: &'static str = "U";

    fn move_construct(_source: &mut Self) -> Self {
        trace::special(Self::LABEL, SpecialOp::MoveConstruction);
        Self(())
    }

    fn copy_assign(&mut self, _source: &Self) {
        trace::special(Self::LABEL, SpecialOp::CopyAssignment);
    }

    fn move_assign(&mut self, _source: &mut Self) {
        trace::special(Self::LABEL, SpecialOp::MoveAssignment);
    }
}

impl Drop for UtilityValue {
    fn drop(&mut self) {
        trace::special(Self::LABEL, SpecialOp::Destruction);
    }
}
