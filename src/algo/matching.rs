/*!
# Matching Algorithms

This module provides algorithms for computing **matchings** in undirected graphs.

- **Maximal matchings** via a greedy heuristic (fast, not necessarily optimal).
- **Maximum matchings** in general graphs via Edmonds's blossom algorithm
  (see [`BlossomMatcher`]).

A *matching* is a set of edges without shared endpoints.
- A **maximal matching** cannot be extended by adding another edge, but may not be optimal in size.
- A **maximum matching** is the largest possible matching.

```
use ublossom::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]); // 0 - 1 - 2 - 3

assert_eq!(graph.maximal_undirected_matching(), vec![(0, 1), (2, 3)]);
assert_eq!(graph.maximum_matching(), vec![(0, 1), (2, 3)]);
assert!(graph.is_matching(&[(1, 2)]));
```
*/

use std::io::Result;

use super::*;

/// A trait providing matching algorithms on undirected graphs.
pub trait Matching: GraphType<Dir = Undirected> {
    /// Computes a **maximal matching** in an undirected graph.
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u < v`.
    /// The resulting vector is sorted lexicographically.
    fn maximal_undirected_matching(&self) -> Vec<(Node, Node)> {
        self.maximal_undirected_matching_excluding(std::iter::empty())
    }

    /// Computes a **maximal matching** on an induced subgraph of an undirected graph.
    ///
    /// - The subgraph excludes all vertices provided by the iterator `excl`.
    /// - Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u < v`.
    /// - The output is sorted lexicographically.
    fn maximal_undirected_matching_excluding<I>(&self, excl: I) -> Vec<(Node, Node)>
    where
        I: IntoIterator<Item = Node>;

    /// Computes a **maximum matching** using Edmonds's blossom algorithm.
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u < v`.
    /// The output is sorted lexicographically.
    fn maximum_matching(&self) -> Vec<(Node, Node)>;

    /// Returns the cardinality of a maximum matching
    fn maximum_matching_size(&self) -> NumNodes;
}

impl<G> Matching for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    /// Greedy maximal matching implementation:
    /// - Iterates through vertices in index order
    /// - Picks the first available unmatched neighbor
    /// - Marks both endpoints as matched
    fn maximal_undirected_matching_excluding<I>(&self, excl: I) -> Vec<(Node, Node)>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut matching = Vec::new();
        let mut matched = NodeBitSet::new_with_bits_set(self.number_of_nodes(), excl);

        for u in self.vertices() {
            if matched.get_bit(u) {
                continue;
            }

            // self-loops never enter a matching
            if let Some(v) = self.neighbors_of(u).find(|&v| v != u && !matched.get_bit(v)) {
                matched.set_bit(u);
                matched.set_bit(v);
                matching.push((u, v));
            }
        }

        matching
    }

    fn maximum_matching(&self) -> Vec<(Node, Node)> {
        let mut matcher = BlossomMatcher::new(self).greedy_init(true);
        matcher.run();
        matcher.matching()
    }

    fn maximum_matching_size(&self) -> NumNodes {
        BlossomMatcher::new(self).greedy_init(true).run()
    }
}

/// A trait for verifying that a set of pairs is a matching of the graph
pub trait MatchingVerify {
    /// Returns *true* if every pair is an edge of the graph and no vertex appears twice.
    /// Pairs with endpoints outside of the graph are rejected.
    fn is_matching(&self, pairs: &[(Node, Node)]) -> bool;
}

impl<G> MatchingVerify for G
where
    G: AdjacencyTest,
{
    fn is_matching(&self, pairs: &[(Node, Node)]) -> bool {
        let n = self.number_of_nodes();
        let mut covered = NodeBitSet::new(n);

        for &(u, v) in pairs {
            if u >= n || v >= n || u == v || !self.has_edge(u, v) {
                return false;
            }
            if covered.get_bit(u) || covered.get_bit(v) {
                return false;
            }
            covered.set_bit(u);
            covered.set_bit(v);
        }

        true
    }
}

/// Computes the cardinality of a maximum matching of the graph with nodes `0..n` and the
/// given edges.
///
/// This is the validating entry point: edges are checked before the graph is built and
/// duplicates are merged.
///
/// # Errors
/// Returns an `InvalidInput`-error if an edge has an endpoint `>= n` or is a self-loop.
///
/// # Examples
/// ```
/// use ublossom::algo::compute_max_matching;
///
/// assert_eq!(compute_max_matching(3, [(0, 1), (1, 2), (2, 0)]).unwrap(), 1);
/// assert!(compute_max_matching(3, [(0, 3)]).is_err());
/// ```
pub fn compute_max_matching<I, E>(n: NumNodes, edges: I) -> Result<NumNodes>
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    let graph = AdjArrayUndir::try_from_edges(n, edges)?;
    Ok(BlossomMatcher::new(&graph).run())
}
