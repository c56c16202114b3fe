//! The errors reported by the containers in this crate.

use thiserror::Error;

/// Everything that can go wrong calling into an [`OrderedMap`][crate::OrderedMap] or a
/// [`PriorityQueue`][crate::PriorityQueue]. None of these are transient: each one means the call
/// was made against a state that can't satisfy it, and the container was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No reachable node holds the requested key.
    #[error("key not found")]
    NotFound,
    /// The operation needs at least one element.
    #[error("collection is empty")]
    Empty,
    /// The priority queue already holds `capacity` entries.
    #[error("priority queue is full (capacity {capacity})")]
    Full {
        /// The fixed capacity the queue was built with.
        capacity: usize,
    },
    /// `position` is not an occupied heap position.
    #[error("position {position} is outside the occupied range 0..{len}")]
    InvalidIndex {
        /// The position that was asked for.
        position: usize,
        /// How many positions were occupied at the time.
        len: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
