//! Node storage for [`OrderedMap`][super::OrderedMap].
//!
//! Nodes refer to each other through [`Handle`]s into a flat table instead of pointers. A parent
//! still "owns" its children in the sense that it's the only node holding their handles as
//! children, but the back-reference to the parent is just another handle so there is no
//! ownership cycle to manage.

use std::ops::{Index, IndexMut};

use crate::util::Side;

/// A stable reference to a node slot in an [`Arena`]. A handle stays valid until the node is
/// released, after which its slot may be handed out again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Handle(usize);

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) parent: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A growable table of nodes. Released slots go on a free list and are reused by later
/// allocations, so the table only grows past the peak number of live nodes.
///
/// Cloning copies slot for slot, so every handle refers to the same node in the copy.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<Handle>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns the handle it can be reached by.
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                debug_assert!(self.slots[handle.0].is_none());
                self.slots[handle.0] = Some(node);
                handle
            }
            None => {
                self.slots.push(Some(node));
                Handle(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node behind `handle` and hands it back. The caller must already have unlinked
    /// it from every other node.
    pub(crate) fn release(&mut self, handle: Handle) -> Node<K, V> {
        let node = self.slots[handle.0]
            .take()
            .expect("Released handle must be live");
        self.free.push(handle);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<K, V> Index<Handle> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.slots[handle.0]
            .as_ref()
            .expect("Handle into the arena must be live")
    }
}

impl<K, V> IndexMut<Handle> for Arena<K, V> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.slots[handle.0]
            .as_mut()
            .expect("Handle into the arena must be live")
    }
}
