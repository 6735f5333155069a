/*!
# Graph Generators

Random and deterministic graph generators, mainly used to produce instances for testing the
matching algorithms.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into constructors of whole graph instances, and
[`GeneratorSubstructures`] adds paths, cycles and cliques to existing graphs.

```
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use ublossom::{prelude::*, gens::*};

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = AdjArrayUndir::gnp(rng, 20, 0.2);
assert_eq!(graph.number_of_nodes(), 20);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph with `p = avg_deg / (n - 1)`.
    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).avg_deg(avg_deg).stream(rng))
    }
}
