//! # Frames
//!
//! A [`Frame`] is a scope of named variables. Each variable lives in a
//! [`Slot`], and assignments name their destination and source by slot, so a
//! value can be assigned from itself. Safe Rust cannot express that through
//! references alone.
//!
//! Assigning a slot to itself is detected by comparing slots and routed to
//! [`Lifecycle::self_assign`]. That emits only the receiver's own assignment
//! event and never reaches members or bases.
//!
//! Dropping a frame destroys its variables in reverse declaration order, the
//! same way a block destroys its locals.

use crate::lifecycle::{Assignment, Lifecycle};

/// Handle to one variable in a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    /// Declaration index within the owning frame.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An ordered scope of traced values.
///
/// Using a [`Slot`] that this frame did not hand out panics, like an
/// out-of-range slice index.
#[derive(Debug)]
pub struct Frame<T> {
    slots: Vec<T>,
}

impl<T: Lifecycle> Frame<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Declare a new variable holding `value`.
    pub fn declare(&mut self, value: T) -> Slot {
        self.slots.push(value);
        Slot(self.slots.len() - 1)
    }

    /// Declare a new variable copy-constructed from `source`.
    pub fn copy_construct(&mut self, source: Slot) -> Slot {
        let value = self.slots[source.0].clone();
        self.declare(value)
    }

    /// Declare a new variable move-constructed out of `source`.
    pub fn move_construct(&mut self, source: Slot) -> Slot {
        let value = T::move_construct(&mut self.slots[source.0]);
        self.declare(value)
    }

    pub fn get(&self, slot: Slot) -> &T {
        &self.slots[slot.0]
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.slots[slot.0]
    }

    /// Copy-assign `source` into `destination`.
    pub fn copy_assign(&mut self, destination: Slot, source: Slot) {
        if destination == source {
            self.slots[destination.0].self_assign(Assignment::Copy);
            return;
        }
        let (destination, source) = self.pair_mut(destination, source);
        destination.copy_assign(source);
    }

    /// Move-assign `source` into `destination`, leaving `source` empty.
    pub fn move_assign(&mut self, destination: Slot, source: Slot) {
        if destination == source {
            self.slots[destination.0].self_assign(Assignment::Move);
            return;
        }
        let (destination, source) = self.pair_mut(destination, source);
        destination.move_assign(source);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Disjoint mutable borrows of two distinct slots.
    fn pair_mut(&mut self, first: Slot, second: Slot) -> (&mut T, &mut T) {
        debug_assert_ne!(first, second);
        if first.0 < second.0 {
            let (head, tail) = self.slots.split_at_mut(second.0);
            (&mut head[first.0], &mut tail[0])
        } else {
            let (head, tail) = self.slots.split_at_mut(first.0);
            (&mut tail[0], &mut head[second.0])
        }
    }
}

impl<T: Lifecycle> Default for Frame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Frame<T> {
    fn drop(&mut self) {
        // Vec drops front to back; locals go in reverse.
        while let Some(value) = self.slots.pop() {
            drop(value);
        }
    }
}
