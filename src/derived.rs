//! # Derived Composite
//!
//! [`DerivedComposite`] extends [`BaseComposite`] without adding storage. The
//! base portion is held as its only field, so every operation reaches the
//! base first and the derived event follows. Destruction reverses this:
//! `D destruction` is emitted before the base portion, and its leaf, are torn
//! down.

use crate::base::{BaseComposite, Composite, Dispatch};
use crate::leaf::LeafValue;
use crate::lifecycle::Lifecycle;
use crate::trace::{self, SpecialOp};
use crate::utility::UtilityValue;

/// Composite extending [`BaseComposite`]. Traced under the label `D`.
#[derive(Debug, PartialEq, Eq)]
pub struct DerivedComposite {
    base: BaseComposite,
}

impl DerivedComposite {
    /// Use `utility` for the duration of this call only.
    pub fn use_utility(&self, _utility: &UtilityValue) {
        trace::call(Self::LABEL, "D using U");
    }

    /// The leaf owned through the base portion.
    pub fn leaf(&self) -> &LeafValue {
        self.base.leaf()
    }

    pub fn leaf_mut(&mut self) -> &mut LeafValue {
        self.base.leaf_mut()
    }
}

impl Default for DerivedComposite {
    fn default() -> Self {
        let base = BaseComposite::default();
        trace::special(Self::LABEL, SpecialOp::DefaultConstruction);
        Self { base }
    }
}

impl Clone for DerivedComposite {
    fn clone(&self) -> Self {
        let base = self.base.clone();
        trace::special(Self::LABEL, SpecialOp::CopyConstruction);
        Self { base }
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}

impl Lifecycle for DerivedComposite {
    const LABEL: &'static str = "D";

    fn move_construct(source: &mut Self) -> Self {
        let base = BaseComposite::move_construct(&mut source.base);
        trace::special(Self::LABEL, SpecialOp::MoveConstruction);
        Self { base }
    }

    fn copy_assign(&mut self, source: &Self) {
        self.base.copy_assign(&source.base);
        trace::special(Self::LABEL, SpecialOp::CopyAssignment);
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.base.move_assign(&mut source.base);
        trace::special(Self::LABEL, SpecialOp::MoveAssignment);
    }
}

impl Composite for DerivedComposite {
    fn base(&self) -> &BaseComposite {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComposite {
        &mut self.base
    }

    fn behavior_g(&self) -> Dispatch {
        trace::call(Self::LABEL, "Calling D::g()");
        Dispatch::Derived
    }
}

impl Drop for DerivedComposite {
    fn drop(&mut self) {
        trace::special(Self::LABEL, SpecialOp::Destruction);
    }
}
