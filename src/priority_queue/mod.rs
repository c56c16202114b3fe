//! A bounded max-priority queue: a binary heap packed into a fixed number of slots.
//!
//! The entry at position `p` has its children at `2p + 1` and `2p + 2`, so the tree shape is
//! implied by the positions and no links are stored. Occupied positions are always the prefix
//! `0..len()`, and no entry has a key greater than its parent's.
//!
//! # Examples
//!
//! ```
//! use keyed_collections::{Error, PriorityQueue};
//!
//! let mut queue = PriorityQueue::with_capacity(3);
//! queue.insert(10, "x").unwrap();
//! queue.insert(20, "y").unwrap();
//! queue.insert(15, "z").unwrap();
//!
//! // The capacity is fixed.
//! assert_eq!(queue.insert(5, "w"), Err(Error::Full { capacity: 3 }));
//!
//! assert_eq!(queue.extract_max(), Ok("y"));
//! assert_eq!(queue.extract_max(), Ok("z"));
//! assert_eq!(queue.extract_max(), Ok("x"));
//! assert_eq!(queue.extract_max(), Err(Error::Empty));
//! ```

mod store;

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::util;

pub use store::{FixedStore, IndexableStore};

const OCCUPIED: &str = "Positions below len are occupied";

/// One key/value pair as it sits in an [`IndexableStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// What the entry is prioritized by.
    pub key: K,
    /// What the entry carries.
    pub value: V,
}

/// A max-heap of key/value pairs with a capacity fixed at construction. Inserting into a full
/// queue fails rather than growing it.
pub struct PriorityQueue<K, V, S = FixedStore<Entry<K, V>>> {
    store: S,
    len: usize,
    _entries: PhantomData<Entry<K, V>>,
}

impl<K, V> PriorityQueue<K, V> {
    /// Builds an empty queue that can hold up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_store(FixedStore::new(capacity))
    }
}

impl<K, V, S> PriorityQueue<K, V, S>
where
    S: IndexableStore<Entry<K, V>>,
{
    /// Builds an empty queue on top of `store`. Anything already in the store is dropped, and the
    /// store's length becomes the queue's capacity.
    pub fn from_store(mut store: S) -> Self {
        for position in 0..store.length() {
            store.set(position, None);
        }
        Self {
            store,
            len: 0,
            _entries: PhantomData,
        }
    }

    /// The most entries this queue will ever hold.
    pub fn capacity(&self) -> usize {
        self.store.length()
    }

    /// The number of entries currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next [`insert`][Self::insert] would fail.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds an entry and sifts it up to where it belongs.
    ///
    /// # Errors
    ///
    /// [`Error::Full`] if the queue is at capacity, in which case nothing changes.
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord,
    {
        if self.is_full() {
            log::debug!(
                "rejecting insert into full priority queue (capacity {})",
                self.capacity()
            );
            return Err(Error::Full {
                capacity: self.capacity(),
            });
        }

        let position = self.len;
        self.store.set(position, Some(Entry { key, value }));
        self.len += 1;
        self.sift_up(position);
        Ok(())
    }

    /// Removes the entry with the largest key and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn extract_max(&mut self) -> Result<V>
    where
        K: Ord,
    {
        self.poll().ok_or(Error::Empty)
    }

    /// Like [`extract_max`][Self::extract_max] but returns `None` on an empty queue.
    pub fn poll(&mut self) -> Option<V>
    where
        K: Ord,
    {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        let last = self.take(self.len);
        if self.len == 0 {
            return Some(last.value);
        }

        let root = self.take(0);
        self.store.set(0, Some(last));
        self.sift_down(0);
        Some(root.value)
    }

    /// The entry with the largest key, if any.
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.get(0)
    }

    /// The entry at `position`, if that position is occupied. Positions are what
    /// [`change_key`][Self::change_key] takes.
    pub fn get(&self, position: usize) -> Option<(&K, &V)> {
        if position >= self.len {
            return None;
        }
        self.store
            .get(position)
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Replaces the key of the entry at `position`, then sifts the entry up if the key grew or
    /// down otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if `position` isn't occupied, in which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::with_capacity(2);
    /// queue.insert(2, "a").unwrap();
    /// queue.insert(1, "b").unwrap();
    ///
    /// // "b" is at position 1, below "a".
    /// queue.change_key(1, 3).unwrap();
    /// assert_eq!(queue.peek(), Some((&3, &"b")));
    /// ```
    pub fn change_key(&mut self, position: usize, key: K) -> Result<()>
    where
        K: Ord,
    {
        if position >= self.len {
            return Err(Error::InvalidIndex {
                position,
                len: self.len,
            });
        }

        let entry = self.store.get_mut(position).expect(OCCUPIED);
        let old = std::mem::replace(&mut entry.key, key);
        if *self.key(position) > old {
            self.sift_up(position);
        } else {
            self.sift_down(position);
        }
        Ok(())
    }

    /// Walks the occupied positions in order, i.e. the heap level by level.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        (0..self.len).filter_map(move |position| self.get(position))
    }

    fn key(&self, position: usize) -> &K {
        &self.store.get(position).expect(OCCUPIED).key
    }

    fn take(&mut self, position: usize) -> Entry<K, V> {
        self.store.set(position, None).expect(OCCUPIED)
    }

    /// Moves the entry at `position` toward the root while its parent's key is strictly smaller.
    /// Parents are shifted down into the hole rather than swapped.
    fn sift_up(&mut self, mut position: usize)
    where
        K: Ord,
    {
        let moving = self.take(position);
        while position > 0 {
            let parent = util::parent(position);
            if *self.key(parent) >= moving.key {
                break;
            }
            let parent_entry = self.take(parent);
            self.store.set(position, Some(parent_entry));
            position = parent;
        }
        self.store.set(position, Some(moving));
    }

    /// Moves the entry at `position` toward the leaves while its larger child (the left one on a
    /// tie) has a strictly greater key.
    fn sift_down(&mut self, mut position: usize)
    where
        K: Ord,
    {
        let moving = self.take(position);
        loop {
            let left = util::left_child(position);
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let larger = if right < self.len && self.key(right) > self.key(left) {
                right
            } else {
                left
            };

            if *self.key(larger) <= moving.key {
                break;
            }
            let child = self.take(larger);
            self.store.set(position, Some(child));
            position = larger;
        }
        self.store.set(position, Some(moving));
    }
}

impl<K, V, S: Clone> Clone for PriorityQueue<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            len: self.len,
            _entries: PhantomData,
        }
    }
}

impl<K, V, S> fmt::Debug for PriorityQueue<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    S: IndexableStore<Entry<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("capacity", &self.capacity())
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
