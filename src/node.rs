/*!
# Node Representation

Vertices are plain `u32` indices in `0..n`. Matchings store one partner per vertex, so the
representation of "no partner" matters: [`INVALID_NODE`] is used as the sentinel inside
the algorithms and [`OptionalNode`] is used where the partner is persisted.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid (the "unmatched" / "no parent" sentinel)
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// `Option<Node>` needs 8 bytes per entry. Wrapping the value into a `NonZero` by xor-ing
/// with a constant lets `Option<OptionalNodeImpl<N>>` use the niche and stay at 4 bytes,
/// which is what we want for a per-vertex partner vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a real vertex and thus safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Converts a sentinel-encoded node into an `Option<Node>`
#[inline]
pub const fn node_or_none(n: Node) -> Option<Node> {
    if n == INVALID_NODE { None } else { Some(n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_niche() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_roundtrip() {
        assert_eq!(OptionalNode::new(0).map(|x| x.get()), Some(0));
        assert_eq!(OptionalNode::new(17).map(|x| x.get()), Some(17));
        assert!(OptionalNode::new(INVALID_NODE).is_none());

        assert_eq!(node_or_none(3), Some(3));
        assert_eq!(node_or_none(INVALID_NODE), None);
    }
}
