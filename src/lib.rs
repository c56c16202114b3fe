//! This crate exposes two keyed containers built on classic textbook algorithms.
//!
//! ## Ordered Map
//!
//! [`OrderedMap`] is an unbalanced Binary Search Tree (BST). Every node stores a key and a value
//! and may have a left and a right child. The invariant that makes it searchable is:
//!
//! 1. For every node, all the keys in its left subtree are less than or equal to its own key.
//! 2. For every node, all the keys in its right subtree are strictly greater than its own key.
//!
//! Nothing keeps the tree balanced, so the cost of `insert`, `get` and `remove` is `O(height)`
//! and the height depends entirely on insertion order. Inserting sorted keys degrades the tree
//! into a list.
//!
//! ## Priority Queue
//!
//! [`PriorityQueue`] is a binary max-heap packed into a fixed-capacity array. The entry at
//! position `p` has children at `2p + 1` and `2p + 2`, and no child has a key greater than its
//! parent. Insertion sifts the new entry up, extraction moves the last entry to the root and sifts
//! it down. The capacity is chosen at construction and never grows.
//!
//! # Examples
//!
//! ```
//! use keyed_collections::{Error, OrderedMap, PriorityQueue};
//!
//! let mut map = OrderedMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! assert_eq!(map.get(&1), Ok(&"one"));
//! assert_eq!(map.min(), Ok(&"one"));
//!
//! let mut queue = PriorityQueue::with_capacity(1);
//! queue.insert(7, "seven").unwrap();
//! assert_eq!(queue.insert(9, "nine"), Err(Error::Full { capacity: 1 }));
//! assert_eq!(queue.extract_max(), Ok("seven"));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered_map;
pub mod priority_queue;
mod util;


pub use error::{Error, Result};
pub use ordered_map::{Order, OrderedMap, Traversal};
pub use priority_queue::{Entry, FixedStore, IndexableStore, PriorityQueue};
