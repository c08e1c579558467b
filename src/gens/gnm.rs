use fxhash::FxHashMap;

use rand_distr::Distribution;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with random edge weights.
///
/// Produces `m` distinct undirected non-loop edges on the nodes `1..=n`.
/// If `m` exceeds the number of possible edges `n(n-1)/2`, the complete graph is produced.
#[derive(Debug, Clone)]
pub struct WeightedGnm {
    n: NumNodes,
    m: NumArcs,
    weights: RangeInclusive<Weight>,
}

impl Default for WeightedGnm {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: 1..=1,
        }
    }
}

impl WeightedGnm {
    /// Creates a new empty `G(n,m)` generator with unit weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges.
    pub fn edges(mut self, m: NumArcs) -> Self {
        self.m = m;
        self
    }
}

impl NumNodesGen for WeightedGnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightsGen for WeightedGnm {
    fn set_weights(&mut self, weights: RangeInclusive<Weight>) {
        self.weights = weights;
    }
}

impl GraphGenerator for WeightedGnm {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let end = n * n.saturating_sub(1) / 2;

        GnmEdges {
            n,
            rem: end.min(self.m as u64),
            cur: 0,
            end,
            map: FxHashMap::default(),
            weight_gen: weight_distribution(&self.weights),
            rng,
        }
    }
}

/// Draws distinct edge indices from `0..end` without replacement and maps them to edges.
///
/// The sampling emulates a Fisher-Yates shuffle of `0..end` and only stores the swapped
/// positions in a hash map, following
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
pub struct GnmEdges<'a, R>
where
    R: Rng,
{
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    weight_gen: Uniform<Weight>,
    rng: &'a mut R,
}

impl<'a, R> GnmEdges<'a, R>
where
    R: Rng,
{
    fn next_index(&mut self) -> Option<u64> {
        if self.rem == 0 {
            return None;
        }

        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        let replacement = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, replacement);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }
}

impl<'a, R> Iterator for GnmEdges<'a, R>
where
    R: Rng,
{
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let (u, v) = pair_from_index(self.next_index()?, self.n);
        Some(WeightedEdge(u, v, self.weight_gen.sample(self.rng)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<'a, R> ExactSizeIterator for GnmEdges<'a, R> where R: Rng {}

/// Bijection from `0..(n choose 2)` to all normalized non-loop pairs `(u, v)` of `1..=n`.
///
/// Every node `u` is assigned the next `(n - 1) / 2` nodes modulo `n` (one more for the
/// upper half of the nodes if `n` is even).
fn pair_from_index(mut x: u64, n: u64) -> (Node, Node) {
    debug_assert!(x < n * (n - 1) / 2);

    let mut num_neighbors = (n - 1) / 2;
    let (u, v) = if n & 1 == 1 {
        let u = x / num_neighbors;
        (u, (u + 1 + (x % num_neighbors)) % n)
    } else {
        let half_n = n / 2;
        let lower_half = num_neighbors * half_n;

        if x < lower_half {
            let u = x / num_neighbors;
            (u, (u + 1 + (x % num_neighbors)) % n)
        } else {
            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            (u, (u + 1 + (x % num_neighbors)) % n)
        }
    };

    ((u.min(v) + 1) as Node, (u.max(v) + 1) as Node)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn pair_index_is_bijective() {
        for n in 2..30u64 {
            let pairs = (0..n * (n - 1) / 2)
                .map(|x| pair_from_index(x, n))
                .sorted()
                .collect_vec();

            let expected = (1..=n as Node)
                .tuple_combinations()
                .collect_vec();

            assert_eq!(pairs, expected);
        }
    }

    #[test]
    fn gnm_edges_are_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 5, 20, 100] {
            for m in [0, n / 2, n, 3 * n] {
                let edges = WeightedGnm::new()
                    .nodes(n)
                    .edges(m)
                    .weights(0..=4)
                    .generate(rng);

                let max_edges = n * (n - 1) / 2;
                assert_eq!(edges.len(), m.min(max_edges) as usize);

                assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
                assert!(edges.iter().all(|e| node_range(n).contains(&e.1)));
                assert!(edges.iter().all(|e| e.weight() <= 4));

                let distinct = edges.iter().map(|e| (e.0, e.1)).unique().count();
                assert_eq!(distinct, edges.len());
            }
        }
    }

    #[test]
    fn complete_graph_when_m_too_large() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let graph = Graph::gnm(rng, 6, 100, 1..=1);

        assert_eq!(graph.number_of_arcs(), 30);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 5));
    }

    #[test]
    fn degenerate_sizes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        assert!(WeightedGnm::new().nodes(0).edges(5).generate(rng).is_empty());
        assert!(WeightedGnm::new().nodes(1).edges(5).generate(rng).is_empty());
    }
}
