use std::iter::FusedIterator;

use super::arena::{Arena, Handle};

/// The order in which [`OrderedMap::traverse`][super::OrderedMap::traverse] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Yields keys in sorted order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

/// Work left to do for a traversal: either a subtree still to be unfolded or a node whose entry
/// is next up.
#[derive(Copy, Clone, Debug)]
enum Visit {
    Expand(Handle),
    Yield(Handle),
}

/// A lazy walk over the entries of an [`OrderedMap`][super::OrderedMap] in a given [`Order`].
///
/// Instead of recursing, the traversal keeps an explicit stack of pending [`Visit`]s so that
/// degenerate (list shaped) trees can't overflow the call stack.
pub struct Traversal<'a, K, V> {
    arena: &'a Arena<K, V>,
    order: Order,
    stack: Vec<Visit>,
    remaining: usize,
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(super) fn new(
        arena: &'a Arena<K, V>,
        root: Option<Handle>,
        len: usize,
        order: Order,
    ) -> Self {
        Self {
            arena,
            order,
            stack: root.map(Visit::Expand).into_iter().collect(),
            remaining: len,
        }
    }

    /// Pushes the visits for the subtree at `handle`. The stack pops in reverse, so everything is
    /// pushed last-visited first.
    fn expand(&mut self, handle: Handle) {
        let node = &self.arena[handle];
        let left = node.left.map(Visit::Expand);
        let right = node.right.map(Visit::Expand);
        let this = Some(Visit::Yield(handle));

        let pending = match self.order {
            Order::PreOrder => [right, left, this],
            Order::InOrder => [right, this, left],
            Order::PostOrder => [this, right, left],
        };
        self.stack.extend(pending.into_iter().flatten());
    }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Expand(handle) => self.expand(handle),
                Visit::Yield(handle) => {
                    self.remaining -= 1;
                    let arena = self.arena;
                    let node = &arena[handle];
                    return Some((&node.key, &node.value));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Traversal<'_, K, V> {}

impl<K, V> FusedIterator for Traversal<'_, K, V> {}

impl<K, V> Clone for Traversal<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
