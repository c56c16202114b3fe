/// Which child slot of a binary node we're talking about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Position of the parent of the heap entry at `position`. Must not be called for the root.
pub(crate) fn parent(position: usize) -> usize {
    debug_assert!(position > 0, "the root has no parent");
    (position - 1) / 2
}

/// Position of the left child of the heap entry at `position`. The right child is the next one.
pub(crate) fn left_child(position: usize) -> usize {
    2 * position + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_positions_round_trip() {
        for position in 0..64 {
            let left = left_child(position);
            assert_eq!(parent(left), position);
            assert_eq!(parent(left + 1), position);
        }
    }

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
