//! Property-based tests for copy and move semantics.
//!
//! These tests use proptest to generate random payloads and verify that
//! copies stay independent and moves leave their source empty.

#[cfg(test)]
mod proptest_tests {
    use crate::base::BaseComposite;
    use crate::derived::DerivedComposite;
    use crate::frame::Frame;
    use crate::leaf::LeafValue;
    use crate::lifecycle::Lifecycle;
    use crate::trace::{record, SpecialOp};
    use proptest::prelude::*;

    fn leaf(name: &str) -> LeafValue {
        let mut leaf = LeafValue::default();
        leaf.set_name(name);
        leaf
    }

    fn derived(name: &str) -> DerivedComposite {
        let mut derived = DerivedComposite::default();
        derived.leaf_mut().set_name(name);
        derived
    }

    // ============================================================================
    // Copy independence
    // ============================================================================

    proptest! {
        /// Property: mutating a copy never changes its source
        #[test]
        fn copy_construction_is_independent(original in ".*", edit in ".*") {
            let source = leaf(&original);
            let mut copy = source.clone();
            prop_assert_eq!(copy.name(), original.as_str());
            copy.set_name(edit);
            prop_assert_eq!(source.name(), original.as_str());
        }

        /// Property: copy assignment duplicates and never aliases
        #[test]
        fn copy_assignment_is_independent(original in ".*", previous in ".*", edit in ".*") {
            let mut source = derived(&original);
            let mut target = derived(&previous);
            target.copy_assign(&source);
            prop_assert_eq!(target.leaf().name(), original.as_str());

            source.leaf_mut().set_name(edit.clone());
            prop_assert_eq!(target.leaf().name(), original.as_str());
            target.leaf_mut().set_name("other");
            prop_assert_eq!(source.leaf().name(), edit.as_str());
        }
    }

    // ============================================================================
    // Move transfer
    // ============================================================================

    proptest! {
        /// Property: move construction transfers the payload and empties the source
        #[test]
        fn move_construction_empties_source(original in ".*") {
            let mut source = derived(&original);
            let moved = DerivedComposite::move_construct(&mut source);
            prop_assert_eq!(moved.leaf().name(), original.as_str());
            prop_assert!(source.leaf().is_empty());
        }

        /// Property: move assignment transfers the payload and empties the source
        #[test]
        fn move_assignment_empties_source(original in ".*", previous in ".*") {
            let mut source = leaf(&original);
            let mut target = leaf(&previous);
            target.move_assign(&mut source);
            prop_assert_eq!(target.name(), original.as_str());
            prop_assert!(source.is_empty());
        }

        /// Property: self-assignment by slot never changes the payload
        #[test]
        fn self_assignment_preserves_payload(original in ".*", by_move in any::<bool>()) {
            let mut frame = Frame::new();
            let slot = frame.declare(derived(&original));
            if by_move {
                frame.move_assign(slot, slot);
            } else {
                frame.copy_assign(slot, slot);
            }
            prop_assert_eq!(frame.get(slot).leaf().name(), original.as_str());
        }
    }

    // ============================================================================
    // Trace balance
    // ============================================================================

    proptest! {
        /// Property: any mix of copies and moves destroys exactly what it constructs
        #[test]
        fn constructions_balance_destructions(steps in prop::collection::vec(any::<bool>(), 0..8)) {
            let ((), transcript) = record(|| {
                let mut values = vec![BaseComposite::default()];
                for copy in steps {
                    let last = values.len() - 1;
                    let next = if copy {
                        values[last].clone()
                    } else {
                        BaseComposite::move_construct(&mut values[last])
                    };
                    values.push(next);
                }
            });
            let constructed = transcript.count(|e| e.op().is_some_and(SpecialOp::is_construction));
            let destroyed = transcript.count(|e| e.op() == Some(SpecialOp::Destruction));
            prop_assert_eq!(constructed, destroyed);
        }
    }
}
