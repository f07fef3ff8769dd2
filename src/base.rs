//! # Base Composite
//!
//! [`BaseComposite`] owns one [`LeafValue`] by value and is the root of the
//! polymorphic family described by [`Composite`].
//!
//! ## Ordering
//!
//! Each special operation runs the member's matching operation to completion
//! before emitting the composite's own event. Destruction is the mirror
//! image: `Drop::drop` emits `B destruction` and only afterwards does Rust
//! drop the `leaf` field, emitting `C destruction`.
//!
//! ## Polymorphism
//!
//! [`Composite::behavior_g`] has a default body that reports the base
//! implementation. [`crate::derived::DerivedComposite`] overrides it. An owned
//! `Box<dyn Composite>` is the polymorphic owning handle; dropping one runs
//! the destruction chain of the concrete type behind it, whatever the static
//! type at the drop site.

use crate::leaf::LeafValue;
use crate::lifecycle::Lifecycle;
use crate::trace::{self, SpecialOp};

/// Which implementation of an overridable behavior ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Base,
    Derived,
}

/// Behavior shared by every member of the composite family.
pub trait Composite {
    /// The base portion of this value.
    fn base(&self) -> &BaseComposite;

    fn base_mut(&mut self) -> &mut BaseComposite;

    /// The overridable behavior.
    fn behavior_g(&self) -> Dispatch {
        trace::call(BaseComposite::LABEL, "Calling B::g()");
        Dispatch::Base
    }
}

/// Composite that owns one [`LeafValue`]. Traced under the label `B`.
#[derive(Debug, PartialEq, Eq)]
pub struct BaseComposite {
    leaf: LeafValue,
}

impl BaseComposite {
    pub fn leaf(&self) -> &LeafValue {
        &self.leaf
    }

    pub fn leaf_mut(&mut self) -> &mut LeafValue {
        &mut self.leaf
    }
}

impl Default for BaseComposite {
    fn default() -> Self {
        let leaf = LeafValue::default();
        trace::special(Self::LABEL, SpecialOp::DefaultConstruction);
        Self { leaf }
    }
}

impl Clone for BaseComposite {
    fn clone(&self) -> Self {
        let leaf = self.leaf.clone();
        trace::special(Self::LABEL, SpecialOp::CopyConstruction);
        Self { leaf }
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}

impl Lifecycle for BaseComposite {
    const LABEL: &'static str = "B";

    fn move_construct(source: &mut Self) -> Self {
        let leaf = LeafValue::move_construct(&mut source.leaf);
        trace::special(Self::LABEL, SpecialOp::MoveConstruction);
        Self { leaf }
    }

    fn copy_assign(&mut self, source: &Self) {
        self.leaf.copy_assign(&source.leaf);
        trace::special(Self::LABEL, SpecialOp::CopyAssignment);
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.leaf.move_assign(&mut source.leaf);
        trace::special(Self::LABEL, SpecialOp::MoveAssignment);
    }
}

impl Composite for BaseComposite {
    fn base(&self) -> &BaseComposite {
        self
    }

    fn base_mut(&mut self) -> &mut BaseComposite {
        self
    }
}

impl Drop for BaseComposite {
    fn drop(&mut self) {
        trace::special(Self::LABEL, SpecialOp::Destruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::record;

    #[test]
    fn test_member_constructed_first_and_destroyed_last() {
        let ((), transcript) = record(|| {
            let _base = BaseComposite::default();
        });
        assert_eq!(
            transcript.lines(),
            vec![
                "C default construction",
                "B default construction",
                "B destruction",
                "C destruction",
            ]
        );
    }

    #[test]
    fn test_copy_chain() {
        let mut original = BaseComposite::default();
        original.leaf_mut().set_name("alpha");
        let (mut copy, transcript) = record(|| original.clone());
        assert_eq!(
            transcript.lines(),
            vec!["C copy construction", "B copy construction"]
        );

        copy.leaf_mut().set_name("beta");
        assert_eq!(original.leaf().name(), "alpha");
    }

    #[test]
    fn test_move_chain() {
        let mut source = BaseComposite::default();
        source.leaf_mut().set_name("alpha");
        let (moved, transcript) = record(|| BaseComposite::move_construct(&mut source));
        assert_eq!(
            transcript.lines(),
            vec!["C move construction", "B move construction"]
        );
        assert_eq!(moved.leaf().name(), "alpha");
        assert!(source.leaf().is_empty());
    }

    #[test]
    fn test_assignment_chains() {
        let mut source = BaseComposite::default();
        source.leaf_mut().set_name("alpha");
        let mut target = BaseComposite::default();

        let ((), copied) = record(|| target.clone_from(&source));
        assert_eq!(copied.lines(), vec!["C copy assignment", "B copy assignment"]);
        assert_eq!(target.leaf().name(), "alpha");

        let mut other = BaseComposite::default();
        let ((), moved) = record(|| other.move_assign(&mut source));
        assert_eq!(moved.lines(), vec!["C move assignment", "B move assignment"]);
        assert_eq!(other.leaf().name(), "alpha");
        assert!(source.leaf().is_empty());
    }

    #[test]
    fn test_self_assignment_touches_nothing() {
        let mut base = BaseComposite::default();
        base.leaf_mut().set_name("alpha");
        let ((), transcript) = record(|| {
            base.self_assign(crate::lifecycle::Assignment::Copy);
            base.self_assign(crate::lifecycle::Assignment::Move);
        });
        assert_eq!(
            transcript.lines(),
            vec!["B copy assignment", "B move assignment"]
        );
        assert_eq!(base.leaf().name(), "alpha");
    }

    #[test]
    fn test_base_behavior_dispatch() {
        let base = BaseComposite::default();
        let handle: &dyn Composite = &base;
        let (dispatch, transcript) = record(|| handle.behavior_g());
        assert_eq!(dispatch, Dispatch::Base);
        assert_eq!(transcript.lines(), vec!["Calling B::g()"]);
    }
}
