/*!
# Node Representation

We choose `Node = u32` as road networks of the DIMACS corpus stay well below `2^32` vertices.
Vertices are **1-based**: a graph with `n` nodes uses the ids `1..=n`, the id `0` is reserved
and never carries arcs.
*/

use std::{num::NonZero, ops::RangeInclusive};

/// Nodes can be any unsigned integer from `1` to `Node::MAX`
pub type Node = u32;

/// The reserved node id. Adjacency slot `0` exists but is never populated.
pub const RESERVED_NODE: Node = 0;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Returns the range of valid node ids of a graph with `n` nodes
pub const fn node_range(n: NumNodes) -> RangeInclusive<Node> {
    1..=n
}

/// As `Option<u64>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<u64>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as the `None`-niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalU64Impl<const N: u64>(NonZero<u64>);

/// `u64::MAX` is never a valid path cost (see [`crate::algo::UNREACHABLE`])
pub type OptionalU64 = OptionalU64Impl<{ u64::MAX }>;

impl<const N: u64> OptionalU64Impl<N> {
    /// Returns `Some(OptionalU64Impl)` if `n != N` and `None` otherwise
    pub const fn new(n: u64) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalU64Impl(inner)),
            None => None,
        }
    }

    /// Gets the underlying u64-Value
    pub const fn get(&self) -> u64 {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_u64_uses_niche() {
        assert_eq!(size_of::<Option<OptionalU64>>(), size_of::<u64>());

        assert_eq!(OptionalU64::new(0).map(|x| x.get()), Some(0));
        assert_eq!(OptionalU64::new(17).map(|x| x.get()), Some(17));
        assert!(OptionalU64::new(u64::MAX).is_none());
    }

    #[test]
    fn node_range_is_one_based() {
        assert!(node_range(0).is_empty());
        assert_eq!(node_range(3).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
