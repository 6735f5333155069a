/*!
# Edmonds's Blossom Algorithm

[`BlossomMatcher`] computes a **maximum cardinality matching** in a general undirected graph.

For every vertex that is still unmatched (in index order), a BFS grows an *alternating tree*
rooted at that vertex. Whenever the search closes an odd cycle (a *blossom*) the cycle is
contracted **virtually**: all its vertices get the same `base` label and are treated as a single
vertex for the rest of the search. If the search reaches an unmatched vertex, the matching is
flipped along the found augmenting path and grows by one.

Contraction state is local to one search; only the matching itself survives between searches.
A single pass over all vertices suffices: a vertex that has no augmenting path never gains one
through later augmentations.

The running time is `O(n^2 * m)` in the worst case.

```
use ublossom::{prelude::*, algo::*};

// a pentagon: any maximum matching leaves exactly one node unmatched
let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);

let mut matcher = BlossomMatcher::new(&graph);
assert_eq!(matcher.run(), 2);
assert_eq!(matcher.mates().filter(|m| m.is_none()).count(), 1);
```
*/

use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// Computes a maximum cardinality matching of an undirected graph.
///
/// The matcher borrows the graph and owns all search state, so independent matchers never
/// interfere with each other. See the [module documentation](self) for the algorithm.
pub struct BlossomMatcher<'a, G> {
    graph: &'a G,
    /// Seed the matching with a greedy maximal matching before searching
    greedy_init: bool,

    /// Partner of every vertex or `INVALID_NODE`; persists across searches
    mate: Vec<Node>,
    /// Predecessor in the current alternating tree or `INVALID_NODE`
    parent: Vec<Node>,
    /// Representative of the (virtual) blossom every vertex currently belongs to
    base: Vec<Node>,
    /// Vertices that were enqueued in the current search
    used: NodeBitSet,
    /// Blossom labels that are merged by the current contraction
    blossom: NodeBitSet,
    /// Ancestors marked during a single LCA computation
    ancestors: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BlossomMatcher<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    /// Creates a new matcher on the given graph. Nothing is computed before [`Self::run`].
    pub fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            greedy_init: false,
            mate: vec![INVALID_NODE; n as usize],
            parent: vec![INVALID_NODE; n as usize],
            base: (0..n).collect(),
            used: NodeBitSet::new(n),
            blossom: NodeBitSet::new(n),
            ancestors: NodeBitSet::new(n),
            queue: VecDeque::with_capacity(n as usize),
        }
    }

    /// If *true*, the matching is initialized with a greedy maximal matching and augmenting
    /// paths are only searched from vertices the heuristic left unmatched. The result is still
    /// a maximum matching, but possibly a different one.
    pub fn greedy_init(mut self, greedy_init: bool) -> Self {
        self.greedy_init = greedy_init;
        self
    }

    /// Computes a maximum matching and returns its cardinality.
    ///
    /// Any matching of a previous run is discarded, so running twice yields the same result.
    pub fn run(&mut self) -> NumNodes {
        self.mate.fill(INVALID_NODE);

        if self.greedy_init {
            for (u, v) in self.graph.maximal_undirected_matching() {
                self.mate[u as usize] = v;
                self.mate[v as usize] = u;
            }
        }
        let initial = self.cardinality();

        for root in self.graph.vertices_range() {
            if self.mate[root as usize] != INVALID_NODE {
                continue;
            }

            if let Some(terminal) = self.find_augmenting_path(root) {
                trace!("augmenting path from {root} to {terminal}");
                self.augment(terminal);
            }
        }

        let cardinality = self.cardinality();
        debug!(
            "maximum matching on {} nodes: {} pairs ({} from greedy initialization)",
            self.graph.number_of_nodes(),
            cardinality,
            initial
        );
        cardinality
    }

    /// Returns the number of matched pairs
    pub fn cardinality(&self) -> NumNodes {
        let matched = self.mate.iter().filter(|&&m| m != INVALID_NODE).count();
        debug_assert!(matched % 2 == 0);
        (matched / 2) as NumNodes
    }

    /// Returns the partner of `u` or `None` if `u` is unmatched.
    /// ** Panics if `u >= n` **
    pub fn mate_of(&self, u: Node) -> Option<Node> {
        node_or_none(self.mate[u as usize])
    }

    /// Returns an iterator over the partners of all vertices in index order
    pub fn mates(&self) -> impl Iterator<Item = Option<Node>> + '_ {
        self.mate.iter().map(|&m| node_or_none(m))
    }

    /// Returns every matched pair once as `(u, v)` with `u < v` in lexicographic order
    pub fn matching(&self) -> Vec<(Node, Node)> {
        self.mate
            .iter()
            .enumerate()
            .filter_map(|(u, &v)| {
                let u = u as Node;
                (v != INVALID_NODE && u < v).then_some((u, v))
            })
            .collect_vec()
    }

    /// Consumes the matcher and returns the compact partner vector
    pub fn into_mates(self) -> Vec<Option<OptionalNode>> {
        self.mate.into_iter().map(OptionalNode::new).collect_vec()
    }

    /// BFS over alternating paths starting at the unmatched vertex `src`.
    /// Returns the unmatched endpoint of an augmenting path; the path itself is encoded in
    /// `parent` (odd vertices) and `mate` (even vertices).
    fn find_augmenting_path(&mut self, src: Node) -> Option<Node> {
        debug_assert_eq!(self.mate[src as usize], INVALID_NODE);

        self.parent.fill(INVALID_NODE);
        for (u, b) in self.base.iter_mut().enumerate() {
            *b = u as Node;
        }
        self.used.clear_all();
        self.queue.clear();

        self.used.set_bit(src);
        self.queue.push_back(src);

        let graph = self.graph;
        while let Some(curr) = self.queue.pop_front() {
            for next in graph.neighbors_of(curr) {
                if self.base[curr as usize] == self.base[next as usize]
                    || self.mate[curr as usize] == next
                {
                    continue;
                }

                let next_mate = self.mate[next as usize];
                if next == src
                    || (next_mate != INVALID_NODE
                        && self.parent[next_mate as usize] != INVALID_NODE)
                {
                    self.contract_blossom(curr, next);
                } else if self.parent[next as usize] == INVALID_NODE {
                    self.parent[next as usize] = curr;

                    if next_mate == INVALID_NODE {
                        return Some(next);
                    }

                    self.used.set_bit(next_mate);
                    self.queue.push_back(next_mate);
                }
            }
        }

        None
    }

    /// The edge `{curr, next}` closes an odd cycle: merge both tree paths up to their lowest
    /// common ancestor into one blossom and enqueue its vertices that were not searched yet.
    fn contract_blossom(&mut self, curr: Node, next: Node) {
        let new_base = self.lowest_common_ancestor(curr, next);

        self.blossom.clear_all();
        self.mark_path(curr, new_base, next);
        self.mark_path(next, new_base, curr);

        for u in self.graph.vertices_range() {
            if !self.blossom.get_bit(self.base[u as usize]) {
                continue;
            }

            self.base[u as usize] = new_base;
            if !self.used.get_bit(u) {
                self.used.set_bit(u);
                self.queue.push_back(u);
            }
        }

        trace!("contracted blossom at edge ({curr}, {next}) with base {new_base}");
    }

    /// Walks two levels at a time from `i` and `j` towards the root and returns the first
    /// blossom label on both walks.
    fn lowest_common_ancestor(&mut self, i: Node, j: Node) -> Node {
        self.ancestors.clear_all();

        let mut i = i;
        loop {
            i = self.base[i as usize];
            self.ancestors.set_bit(i);

            let partner = self.mate[i as usize];
            if partner == INVALID_NODE {
                break;
            }
            i = self.parent[partner as usize];
        }

        let mut j = j;
        loop {
            j = self.base[j as usize];
            if self.ancestors.get_bit(j) {
                return j;
            }
            j = self.parent[self.mate[j as usize] as usize];
        }
    }

    /// Flags all blossom labels between `v` and `new_base` and redirects the tree parents of
    /// the even vertices on the way so that the path can be traversed through the blossom.
    fn mark_path(&mut self, v: Node, new_base: Node, child: Node) {
        let mut v = v;
        let mut child = child;

        while self.base[v as usize] != new_base {
            let partner = self.mate[v as usize];
            self.blossom.set_bit(self.base[v as usize]);
            self.blossom.set_bit(self.base[partner as usize]);

            self.parent[v as usize] = child;
            child = partner;
            v = self.parent[partner as usize];
        }
    }

    /// Flips the matching along the augmenting path ending in the unmatched vertex `v`
    fn augment(&mut self, v: Node) {
        let mut v = v;
        while v != INVALID_NODE {
            let pv = self.parent[v as usize];
            let ppv = self.mate[pv as usize];

            self.mate[v as usize] = pv;
            self.mate[pv as usize] = v;
            v = ppv;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn matcher_size(n: NumNodes, edges: &[(Node, Node)]) -> NumNodes {
        let graph = AdjArrayUndir::from_edges(n, edges);
        let mut matcher = BlossomMatcher::new(&graph);
        let size = matcher.run();
        assert_valid_maximum(&graph, &matcher);
        size
    }

    #[test]
    fn small_scenarios() {
        assert_eq!(matcher_size(0, &[]), 0);
        assert_eq!(matcher_size(5, &[]), 0);
        assert_eq!(matcher_size(2, &[(0, 1)]), 1);
        assert_eq!(matcher_size(3, &[(0, 1), (1, 2), (2, 0)]), 1);
        assert_eq!(matcher_size(4, &[(0, 1), (2, 3)]), 2);
        assert_eq!(
            matcher_size(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
            2
        );
    }

    #[test]
    fn single_edge_mates() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let mut matcher = BlossomMatcher::new(&graph);
        assert_eq!(matcher.run(), 1);
        assert_eq!(matcher.mate_of(0), Some(1));
        assert_eq!(matcher.mate_of(1), Some(0));
        assert_eq!(matcher.matching(), vec![(0, 1)]);
    }

    #[test]
    fn triangle_with_stem_and_tail() {
        //   0 - 1
        //       | \
        //       2 - 3 - 4 - 5
        let edges = [(0, 1), (1, 2), (2, 3), (1, 3), (3, 4), (4, 5)];
        assert_eq!(matcher_size(6, &edges), 3);
    }

    #[test]
    fn pentagon_contracts_blossom() {
        // 0-1 and 2-3 get matched first; the search from 4 closes the odd cycle at (2, 1)
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let mut matcher = BlossomMatcher::new(&graph);
        matcher.run();

        assert_eq!(matcher.matching(), vec![(0, 1), (2, 3)]);
        assert_eq!(matcher.mate_of(4), None);
        assert_eq!(matcher.base, vec![4; 5]);
    }

    #[test]
    fn blossom_with_matched_stem() {
        // Classic example where a plain alternating BFS fails: the flower 2-3-4-5-6 has
        // its base at 2, matched to 1, and the only free neighbour 7 hangs off 5.
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 2),
            (5, 7),
        ];
        assert_eq!(matcher_size(8, &edges), 4);
    }

    #[test]
    fn nested_blossoms() {
        // two triangles sharing vertex 2 plus pendant edges on both sides
        let edges = [
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 4),
            (4, 2),
            (0, 5),
            (4, 6),
            (1, 7),
        ];
        assert_eq!(matcher_size(8, &edges), 4);
    }

    #[test]
    fn paths_cycles_and_cliques() {
        for n in 1..12 as NumNodes {
            let mut path = AdjArrayUndir::new(n);
            path.connect_path(0..n);
            assert_eq!(path.maximum_matching_size(), n / 2);

            if n >= 3 {
                let mut cycle = AdjArrayUndir::new(n);
                cycle.connect_cycle(0..n);
                assert_eq!(cycle.maximum_matching_size(), n / 2);
            }

            let mut clique = AdjArrayUndir::new(n);
            clique.connect_clique(0..n);
            assert_eq!(clique.maximum_matching_size(), n / 2);
        }
    }

    #[test]
    fn petersen_graph_has_perfect_matching() {
        let mut graph = AdjArrayUndir::new(10);
        graph.connect_cycle(0..5);
        graph.connect_cycle([5, 7, 9, 6, 8]);
        graph.add_edges((0..5 as Node).map(|u| (u, u + 5)));

        let mut matcher = BlossomMatcher::new(&graph);
        assert_eq!(matcher.run(), 5);
        assert!(matcher.mates().all(|m| m.is_some()));
    }

    #[test]
    fn random_graphs_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        for n in 1..=10 as NumNodes {
            for p in [0.1, 0.25, 0.4, 0.7] {
                for _ in 0..20 {
                    let graph = AdjArrayUndir::gnp(rng, n, p);
                    let expected = brute_force_maximum_matching(&graph);

                    for greedy in [false, true] {
                        let mut matcher = BlossomMatcher::new(&graph).greedy_init(greedy);
                        assert_eq!(matcher.run(), expected);
                        assert_valid_maximum(&graph, &matcher);
                    }
                }
            }
        }
    }

    #[test]
    fn larger_random_graphs_are_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [30 as NumNodes, 60, 100] {
            for avg_deg in [1.0, 2.5, 6.0] {
                let graph = SparseAdjArrayUndir::gnp_avg_deg(rng, n, avg_deg);

                let mut plain = BlossomMatcher::new(&graph);
                let mut greedy = BlossomMatcher::new(&graph).greedy_init(true);
                assert_eq!(plain.run(), greedy.run());

                assert_valid_maximum(&graph, &plain);
                assert_valid_maximum(&graph, &greedy);
            }
        }
    }

    #[test]
    fn deterministic_reruns() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let graph = AdjArrayUndir::gnp(rng, 40, 0.1);

        let mut matcher = BlossomMatcher::new(&graph);
        let first = matcher.run();
        let first_pairs = matcher.matching();

        assert_eq!(matcher.run(), first);
        assert_eq!(matcher.matching(), first_pairs);

        let mut other = BlossomMatcher::new(&graph);
        assert_eq!(other.run(), first);
        assert_eq!(other.matching(), first_pairs);
    }

    #[test]
    fn into_mates_is_compact() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1)]);
        let mut matcher = BlossomMatcher::new(&graph);
        matcher.run();

        let mates = matcher
            .into_mates()
            .into_iter()
            .map(|m| m.map(|x| x.get()))
            .collect_vec();
        assert_eq!(mates, vec![Some(1), Some(0), None]);
    }
}
