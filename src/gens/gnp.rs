use super::*;
use crate::utils::Probability;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge `{u, v}` with `u != v` with
/// probability `p` independent from each other.
///
/// Edges are produced normalized and in lexicographic order. Instead of throwing a coin for
/// each of the `n * (n - 1) / 2` candidates, the generator jumps over geometrically distributed
/// gaps, so the running time is linear in the number of generated edges plus `n`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n < 2 => 0.0,
            GnpType::AvgDeg(d) => {
                let p = d / (self.n - 1) as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.probability();
        let n = self.n;

        // candidates not yet passed by the cursor `(u, v)`
        let mut remaining = n * n.saturating_sub(1) / 2;
        let mut u = 0u64;
        let mut v = 1u64;

        // `ln(1 - p)` is only needed for `0 < p < 1`; the other cases never sample a gap
        let log_q = (1.0 - p).ln();

        std::iter::from_fn(move || {
            if p <= 0.0 || remaining == 0 {
                return None;
            }

            let mut skip = 0u64;
            if p < 1.0 {
                // gap ~ Geom(p) on {0, 1, ...}
                let x: f64 = rng.random();
                let gap = ((1.0 - x).ln() / log_q).floor();
                if !gap.is_finite() || gap >= remaining as f64 {
                    remaining = 0;
                    return None;
                }
                skip = gap as u64;
            }
            remaining -= skip + 1;

            // row `u` still holds the candidates (u, v), ..., (u, n - 1)
            while v + skip >= n {
                skip -= n - v;
                u += 1;
                v = u + 1;
            }
            v += skip;

            let edge = Edge(u as Node, v as Node);

            v += 1;
            if v >= n {
                u += 1;
                v = u + 1;
            }

            Some(edge)
        })
    }
}
