//! Shared helpers for unit tests

use crate::{algo::*, prelude::*};

/// Every undirected representation should pass the same checks for `GraphNew`,
/// `AdjacencyList` and `GraphEdgeEditing`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        mod $env {
            use crate::prelude::*;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates at most `m_ub` random, normalized, loop-free edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                crate::testing::test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }

                        // feed every edge twice in both orientations to exercise merging
                        let graph = <$graph>::from_edges(
                            n,
                            edges.iter().flat_map(|e| [*e, e.reverse()]),
                        );

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        for Edge(u, v) in edges {
                            let existed = adj_matrix[u as usize].get_bit(v);
                            assert_eq!(graph.try_add_edge(u, v), existed);
                            assert!(graph.try_add_edge(v, u));

                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if u != v && adj_matrix[u as usize].clear_bit(v) {
                                assert!(adj_matrix[v as usize].clear_bit(u));
                                assert!(graph.try_remove_edge(v, u));
                                m -= 1;
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        let remaining = graph.edges(true).collect_vec();
                        for Edge(u, v) in remaining {
                            graph.remove_edge(u, v);
                        }
                        assert!(graph.is_singleton());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Computes the size of a maximum matching by exhaustive search over the lowest free node.
/// Only feasible for small graphs.
pub(crate) fn brute_force_maximum_matching<G: AdjacencyList>(graph: &G) -> NumNodes {
    let n = graph.number_of_nodes();
    assert!(n <= 16, "Brute force is limited to 16 nodes");

    // memo[mask] = size of a maximum matching on the nodes not contained in mask
    let mut memo: Vec<Option<NumNodes>> = vec![None; 1 << n];

    fn solve<G: AdjacencyList>(graph: &G, mask: usize, memo: &mut [Option<NumNodes>]) -> NumNodes {
        let n = graph.number_of_nodes();
        if let Some(size) = memo[mask] {
            return size;
        }

        let Some(u) = (0..n).find(|&u| mask & (1 << u) == 0) else {
            return 0;
        };

        let covered = mask | (1 << u);
        let mut best = solve(graph, covered, memo);
        for v in graph.neighbors_of(u) {
            if v != u && covered & (1 << v) == 0 {
                best = best.max(1 + solve(graph, covered | (1 << v), memo));
            }
        }

        memo[mask] = Some(best);
        best
    }

    solve(graph, 0, &mut memo)
}

/// Asserts that the matcher holds a consistent matching of `graph`, and that it is maximum
/// whenever the graph is small enough to check by brute force.
pub(crate) fn assert_valid_maximum<G>(graph: &G, matcher: &BlossomMatcher<G>)
where
    G: AdjacencyList + AdjacencyTest + GraphType<Dir = Undirected>,
{
    let n = graph.number_of_nodes();
    let mates = matcher.mates().collect::<Vec<_>>();
    assert_eq!(mates.len(), n as usize);

    let mut matched = 0;
    for (u, mate) in mates.iter().enumerate() {
        if let Some(v) = *mate {
            assert_ne!(u as Node, v);
            assert_eq!(mates[v as usize], Some(u as Node), "mate of {v} is not {u}");
            assert!(graph.has_edge(u as Node, v), "({u}, {v}) is not an edge");
            matched += 1;
        }
    }

    let pairs = matcher.matching();
    assert!(graph.is_matching(&pairs));
    assert_eq!(matched, 2 * pairs.len());
    assert_eq!(matcher.cardinality() as usize, pairs.len());
    assert!(matcher.cardinality() <= n / 2);

    if n <= 12 {
        assert_eq!(matcher.cardinality(), brute_force_maximum_matching(graph));
    }
}
