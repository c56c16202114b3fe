//! Fixed-length slot storage backing a [`PriorityQueue`][super::PriorityQueue].

use std::fmt;

/// A fixed number of randomly addressable slots, each either empty or holding one `T`. The
/// number of slots is decided when the store is built and never changes.
pub trait IndexableStore<T> {
    /// How many slots there are.
    fn length(&self) -> usize;

    /// The contents of the slot at `position`, or `None` if it's empty or out of range.
    fn get(&self, position: usize) -> Option<&T>;

    /// Mutable access to the contents of the slot at `position`.
    fn get_mut(&mut self, position: usize) -> Option<&mut T>;

    /// Overwrites the slot at `position` and returns what was there before. Passing `None`
    /// empties the slot.
    ///
    /// # Panics
    ///
    /// When `position` is not less than [`length`][Self::length].
    fn set(&mut self, position: usize, slot: Option<T>) -> Option<T>;
}

/// The default [`IndexableStore`]: a boxed slice of optional slots.
pub struct FixedStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedStore<T> {
    /// Builds a store with `length` empty slots.
    pub fn new(length: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(length).collect(),
        }
    }
}

impl<T> IndexableStore<T> for FixedStore<T> {
    fn length(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(position)?.as_ref()
    }

    fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.slots.get_mut(position)?.as_mut()
    }

    fn set(&mut self, position: usize, slot: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.slots[position], slot)
    }
}

impl<T: Clone> Clone for FixedStore<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}
