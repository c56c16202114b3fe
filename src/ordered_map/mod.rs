//! An unbalanced Binary Search Tree used as an ordered map. Nodes live in an arena and point at
//! each other (children and parent) by handle, so removal is a matter of reassigning handles.
//!
//! Keys may repeat. A key equal to an existing node's key is sent left on insertion, while lookups
//! stop at the first equal key they meet on the way down. So only the highest occurrence of a key
//! is reachable; the others are "shadows" that still count toward [`len`][OrderedMap::len].
//!
//! # Examples
//!
//! ```
//! use keyed_collections::{Error, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.get(&1), Err(Error::NotFound));
//! assert_eq!(map.remove(&1), Err(Error::Empty));
//!
//! map.insert(1, 2);
//! assert_eq!(map.get(&1), Ok(&2));
//!
//! // A second entry for the same key is stored but can't be looked up.
//! map.insert(1, 3);
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&1), Ok(&2));
//!
//! // Removing the reachable entry uncovers the shadow.
//! assert_eq!(map.remove(&1), Ok(2));
//! assert_eq!(map.get(&1), Ok(&3));
//! ```

mod arena;
mod traverse;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::util::Side;
use arena::{Arena, Handle, Node};

pub use traverse::{Order, Traversal};

/// A Binary Search Tree mapping keys to values. It never rebalances: its shape, and therefore the
/// cost of every operation, depends on the order keys were inserted in.
pub struct OrderedMap<K, V> {
    arena: Arena<K, V>,
    root: Option<Handle>,
    len: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Generates a new, empty `OrderedMap`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of entries in the map, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Inserts the given value into the map at the given key. This never fails and never replaces
    /// anything: a key equal to one already present is stored as a new, shadowed entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(5, "five");
    /// map.insert(3, "three");
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&3), Ok(&"three"));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        self.len += 1;

        let Some(mut current) = self.root else {
            self.root = Some(self.arena.alloc(Node::new(key, value, None)));
            return;
        };

        loop {
            let node = &self.arena[current];
            let side = if key <= node.key {
                Side::Left
            } else {
                Side::Right
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let new_node = self.arena.alloc(Node::new(key, value, Some(current)));
                    *self.arena[current].child_mut(side) = Some(new_node);
                    return;
                }
            }
        }
    }

    /// Finds the value associated with the given key.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no reachable node has the key, including when the map is empty.
    ///
    /// The value is borrowed from the map, not copied; clone it to keep it past the next mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.get(&1), Ok(&2));
    /// assert_eq!(map.get(&42), Err(Error::NotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.find(key)
            .map(|handle| &self.arena[handle].value)
            .ok_or(Error::NotFound)
    }

    /// Whether [`get`][Self::get] would succeed for `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Removes the reachable node with the given key and returns its value.
    ///
    /// A node with a left subtree is replaced by that subtree's largest node (its in-order
    /// predecessor). Otherwise a node with a right subtree is replaced by that subtree's smallest
    /// node (its in-order successor), taking the first-inserted one if the smallest key repeats.
    /// A leaf is simply unlinked.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty map, [`Error::NotFound`] if no reachable node has the key.
    /// The map is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.remove(&1), Ok(2));
    /// assert_eq!(map.get(&1), Err(Error::NotFound));
    /// assert_eq!(map.remove(&1), Err(Error::Empty));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        if self.root.is_none() {
            return Err(Error::Empty);
        }
        let target = self.find(key).ok_or(Error::NotFound)?;

        let (left, right, parent) = {
            let node = &self.arena[target];
            (node.left, node.right, node.parent)
        };
        let replacement = match (left, right) {
            (Some(left), _) => Some(self.promote(target, left, Side::Left)),
            (None, Some(right)) => Some(self.promote(target, right, Side::Right)),
            (None, None) => None,
        };
        self.replace_child(parent, target, replacement);

        self.len -= 1;
        Ok(self.arena.release(target).value)
    }

    /// A borrow of the value stored with the smallest key.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty map.
    pub fn min(&self) -> Result<&V> {
        let root = self.root.ok_or(Error::Empty)?;
        Ok(&self.arena[self.extreme(root, Side::Left)].value)
    }

    /// A borrow of the value stored with the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty map.
    pub fn max(&self) -> Result<&V> {
        let root = self.root.ok_or(Error::Empty)?;
        Ok(&self.arena[self.extreme(root, Side::Right)].value)
    }

    /// Walks the map in the given order. The walk is lazy, doesn't modify the map, and can be
    /// started again (or run alongside other walks) as often as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::{Order, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys = |order| map.traverse(order).map(|(k, _)| *k).collect::<Vec<_>>();
    /// assert_eq!(keys(Order::PreOrder), [5, 3, 1, 4, 8]);
    /// assert_eq!(keys(Order::InOrder), [1, 3, 4, 5, 8]);
    /// assert_eq!(keys(Order::PostOrder), [1, 4, 3, 8, 5]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<'_, K, V> {
        Traversal::new(&self.arena, self.root, self.len, order)
    }

    /// Walks the map in key order. Same as `traverse(Order::InOrder)`.
    pub fn iter(&self) -> Traversal<'_, K, V> {
        self.traverse(Order::InOrder)
    }

    /// The descent shared by lookups and removal: strictly smaller keys go left, strictly larger
    /// ones go right and the first equal key wins.
    fn find(&self, key: &K) -> Option<Handle>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &self.arena[handle];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Follows `side` children from `from` until there are none. `Side::Left` finds the minimum
    /// of the subtree, `Side::Right` the maximum.
    fn extreme(&self, from: Handle, side: Side) -> Handle {
        let mut current = from;
        while let Some(next) = self.arena[current].child(side) {
            current = next;
        }
        current
    }

    /// The node of `subtree` closest to its parent in key order, found by following `toward`
    /// children. When the keys at the bottom of that path repeat, the topmost copy is the one
    /// returned since it's the copy lookups reach.
    fn closest(&self, subtree: Handle, toward: Side) -> Handle
    where
        K: Ord,
    {
        let mut closest = self.extreme(subtree, toward);
        while closest != subtree {
            let parent = self.arena[closest]
                .parent
                .expect("Node below the subtree root has a parent");
            if self.arena[parent].key != self.arena[closest].key {
                break;
            }
            closest = parent;
        }
        closest
    }

    /// Moves the node adjacent to `target` in key order into `target`'s place and returns it.
    /// `subtree` is `target`'s child on `side`; the promoted node is the one in that subtree
    /// closest to `target`. On return the promoted node has `target`'s parent and both of
    /// `target`'s children (other than itself), but the parent's link still points at `target`.
    ///
    /// The promoted node keeps its own `inner` child, if it has one. For a predecessor there is
    /// none. For a successor it's a chain of shadows equal to the promoted key, and `target` had
    /// no left child to take its place.
    ///
    /// # Diagram
    ///
    /// Promoting the predecessor `p` (here `side` is `Side::Left`):
    ///
    /// ```text
    ///        target                 p
    ///        /    \                / \
    ///       l      r     ->       l   r
    ///        \                     \
    ///         p                     x
    ///        /
    ///       x
    /// ```
    fn promote(&mut self, target: Handle, subtree: Handle, side: Side) -> Handle
    where
        K: Ord,
    {
        let inner = side.opposite();
        let promoted = self.closest(subtree, inner);

        if promoted != subtree {
            let old_parent = self.arena[promoted]
                .parent
                .expect("Node below the subtree root has a parent");
            let orphan = self.arena[promoted].child(side);
            log::trace!("promoting a node out of the middle of its subtree");

            // Only `promoted`'s `side` child leaves with it; that child takes over its old slot.
            *self.arena[old_parent].child_mut(inner) = orphan;
            if let Some(orphan) = orphan {
                self.arena[orphan].parent = Some(old_parent);
            }

            *self.arena[promoted].child_mut(side) = Some(subtree);
            self.arena[subtree].parent = Some(promoted);
        }

        if let Some(other) = self.arena[target].child(inner) {
            debug_assert_eq!(self.arena[promoted].child(inner), None);
            *self.arena[promoted].child_mut(inner) = Some(other);
            self.arena[other].parent = Some(promoted);
        }
        self.arena[promoted].parent = self.arena[target].parent;

        promoted
    }

    /// Points whichever link of `parent` referred to `old` at `new` instead. A `parent` of `None`
    /// means `old` is the root.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        let Some(parent) = parent else {
            self.root = new;
            return;
        };

        let node = &mut self.arena[parent];
        if node.left == Some(old) {
            node.left = new;
        } else {
            debug_assert_eq!(node.right, Some(old));
            node.right = new;
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Traversal<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
