/*!
# Graph Representations

Only undirected adjacency-array representations are provided. Every neighborhood keeps its
neighbors in **insertion order**: the blossom search visits neighbors in exactly this order,
so building the same graph from the same edge sequence always yields the same matching.

- [`AdjArrayUndir`] stores each neighborhood in a `Vec<Node>`,
- [`SparseAdjArrayUndir`] stores each neighborhood in a `SmallVec` and avoids heap
  allocations for low-degree nodes.
*/

use crate::{ops::*, prelude::*};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood in insertion order
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Appends a neighbor without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood keeping the order of the others.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}
