/*!
`ublossom` computes **maximum cardinality matchings** in general graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected : Every edge `{u, v}` can be used in both directions

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)`
denote the same undirected edge.

See the [`repr`] module for the available graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

Both keep neighbors in insertion order, which makes the matching computed for a given edge list
fully deterministic.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using the *Builder* pattern before running them on a provided graph.
The most common functionality is also implemented via traits on the graph itself, making it
usable without configuring the algorithm beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes Edmonds's blossom algorithm ([`algo::BlossomMatcher`]) as well as the `Matching` trait implemented on graphs,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes readers for edge lists and writers for matchings.

```
use ublossom::{prelude::*, algo::*};

// a 5-cycle has a maximum matching of size 2
let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
assert_eq!(graph.maximum_matching_size(), 2);
```

In most use-cases, `use ublossom::{prelude::*, algo::*};` suffices for your needs.
The binary `max-matching` reads an edge list and prints the size of a maximum matching.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `ublossom::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
