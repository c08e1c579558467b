/*!
Single-source shortest paths with Dijkstra's algorithm.

The implementation uses a binary heap with *lazy deletion*: whenever the tentative
distance of a node improves, the node is pushed again with its new key and stale heap
entries are skipped when popped. This runs in `O((n + m) log n)`.

Weights are unsigned, hence the non-negativity precondition of Dijkstra is enforced by the
type system. Ties between nodes of equal distance are broken arbitrarily; the computed
distances do not depend on it.

# Unreachable nodes

Unreachable nodes are reported as `None` by [`Distances::get`]. Internally the value
[`UNREACHABLE`] (`u64::MAX`) is used as a niche, which no finite distance can reach:
a shortest path has at most `n - 1 < 2^32` arcs, each of weight below `2^32`.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Raw sentinel used for unreachable nodes in [`Distances::to_sentinel_vec`]
pub const UNREACHABLE: Cost = Cost::MAX;

/// Shortest distances from a single source node, indexable by node id `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    source: Node,
    distances: Vec<Option<OptionalU64>>,
}

impl Distances {
    /// The node the distances were computed from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        (self.distances.len() - 1) as NumNodes
    }

    /// Returns the shortest distance from the source to `v`, or `None` if `v` is
    /// unreachable or not a node of the graph.
    pub fn get(&self, v: Node) -> Option<Cost> {
        self.distances
            .get(v as usize)
            .copied()
            .flatten()
            .map(|d| d.get())
    }

    /// Returns *true* if `v` is reachable from the source
    pub fn is_reachable(&self, v: Node) -> bool {
        self.get(v).is_some()
    }

    /// Iterates over all nodes `1..=n` together with their distance
    pub fn iter(&self) -> impl Iterator<Item = (Node, Option<Cost>)> + '_ {
        node_range(self.number_of_nodes()).map(|v| (v, self.get(v)))
    }

    /// Iterates over all reachable nodes together with their (finite) distance
    pub fn reachable(&self) -> impl Iterator<Item = (Node, Cost)> + '_ {
        self.iter().filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Number of nodes reachable from the source, the source included
    pub fn reachable_count(&self) -> NumNodes {
        self.distances.iter().filter(|d| d.is_some()).count() as NumNodes
    }

    /// Sum of all finite distances. Unreachable nodes do not contribute.
    pub fn total_distance(&self) -> u128 {
        self.distances
            .iter()
            .flatten()
            .map(|d| d.get() as u128)
            .sum()
    }

    /// Returns the distances as a plain vector of length `n + 1` where unreachable
    /// nodes (and the reserved slot `0`) hold [`UNREACHABLE`].
    pub fn to_sentinel_vec(&self) -> Vec<Cost> {
        self.distances
            .iter()
            .map(|d| d.map_or(UNREACHABLE, |d| d.get()))
            .collect()
    }
}

/// Sum of all finite distances, see [`Distances::total_distance`]
pub fn total_distance(distances: &Distances) -> u128 {
    distances.total_distance()
}

/// Dijkstra's algorithm on a borrowed graph.
///
/// # Example
/// ```
/// use wgraphs::{algo::*, prelude::*};
///
/// let graph = Graph::from_undirected_edges(3, [(1, 2, 4), (2, 3, 1)]);
/// let distances = Dijkstra::new(&graph).run(1).unwrap();
///
/// assert_eq!(distances.get(3), Some(5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'a, G> {
    graph: &'a G,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares Dijkstra's algorithm on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes the shortest distances from `source` to all nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `source` is not in `1..=n`.
    pub fn run(&self, source: Node) -> Result<Distances> {
        self.graph.check_node(source)?;

        let mut best = vec![UNREACHABLE; self.graph.len() + 1];
        best[source as usize] = 0;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0 as Cost, source)));

        let mut settled: NumNodes = 0;
        while let Some(Reverse((dist, u))) = heap.pop() {
            if dist > best[u as usize] {
                continue;
            }
            settled += 1;

            for WeightedArc(v, w) in self.graph.arcs_of(u) {
                let candidate = dist + w as Cost;
                if candidate < best[v as usize] {
                    best[v as usize] = candidate;
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        tracing::debug!(source, settled, "dijkstra finished");

        Ok(Distances {
            source,
            distances: best.into_iter().map(OptionalU64::new).collect(),
        })
    }
}

/// Shortest-path queries directly on a graph
pub trait ShortestPath: WeightedAdjacencyList {
    /// Computes the shortest distances from `source` to all nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `source` is not in `1..=n`.
    fn dijkstra(&self, source: Node) -> Result<Distances> {
        Dijkstra::new(self).run(source)
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::RandomWeightedGraph, repr::Graph, testing::*};

    #[test]
    fn example_distances() {
        let graph = example_graph();
        let distances = graph.dijkstra(1).unwrap();

        assert_eq!(distances.source(), 1);
        assert_eq!(
            distances.iter().collect_vec(),
            vec![
                (1, Some(0)),
                (2, Some(2)),
                (3, Some(3)),
                (4, Some(5)),
                (5, Some(7))
            ]
        );
        assert_eq!(distances.reachable_count(), 5);
        assert_eq!(total_distance(&distances), 17);
    }

    #[test]
    fn invalid_sources_are_rejected() {
        let graph = example_graph();

        for source in [0, 6, Node::MAX] {
            assert!(matches!(
                graph.dijkstra(source),
                Err(GraphError::InvalidVertex { vertex, n: 5 }) if vertex == source
            ));
        }

        assert!(matches!(
            Graph::new(0).dijkstra(1),
            Err(GraphError::InvalidVertex { .. })
        ));
    }

    #[test]
    fn unreachable_nodes_are_excluded() {
        let graph = Graph::from_undirected_edges(6, [(1, 2, 3), (2, 3, 4), (4, 5, 1)]);
        let distances = graph.dijkstra(2).unwrap();

        assert_eq!(distances.get(2), Some(0));
        assert_eq!(distances.get(1), Some(3));
        assert_eq!(distances.get(3), Some(4));
        for v in [4, 5, 6] {
            assert!(!distances.is_reachable(v));
        }
        assert_eq!(distances.get(0), None);
        assert_eq!(distances.get(7), None);

        assert_eq!(distances.reachable_count(), 3);
        assert_eq!(distances.total_distance(), 7);
        assert_eq!(
            distances.reachable().collect_vec(),
            vec![(1, 3), (2, 0), (3, 4)]
        );
        assert_eq!(
            distances.to_sentinel_vec(),
            vec![UNREACHABLE, 3, 0, 4, UNREACHABLE, UNREACHABLE, UNREACHABLE]
        );
    }

    #[test]
    fn respects_arc_direction() {
        let graph = Graph::from_directed_edges(3, [(1, 2, 1), (3, 2, 1)]);

        let distances = graph.dijkstra(1).unwrap();
        assert_eq!(distances.get(2), Some(1));
        assert_eq!(distances.get(3), None);

        let distances = graph.dijkstra(2).unwrap();
        assert_eq!(distances.reachable_count(), 1);
    }

    #[test]
    fn heavy_weights_do_not_overflow() {
        let n = 10;
        let graph = Graph::from_undirected_edges(n, (1..n).map(|u| (u, u + 1, Weight::MAX)));
        let distances = graph.dijkstra(1).unwrap();

        assert_eq!(distances.get(n), Some((n - 1) as Cost * Weight::MAX as Cost));
        assert_eq!(
            distances.total_distance(),
            (0..n as u128).map(|i| i * Weight::MAX as u128).sum::<u128>()
        );
    }

    #[test]
    fn zero_weights_and_parallel_arcs() {
        let graph = Graph::from_undirected_edges(
            4,
            [(1, 2, 0), (2, 3, 0), (1, 3, 5), (1, 3, 2), (3, 4, 1), (3, 4, 0)],
        );
        let distances = graph.dijkstra(1).unwrap();

        assert_eq!(
            distances.iter().collect_vec(),
            vec![(1, Some(0)), (2, Some(0)), (3, Some(0)), (4, Some(0))]
        );
    }

    #[test]
    fn matches_reference_and_is_optimal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 10, 40, 100] {
            for m in [n / 2, n, n * 3] {
                for _ in 0..5 {
                    let graph = Graph::gnm(rng, n, m, 0..=20);
                    let source = rng.random_range(1..=n);

                    let distances = graph.dijkstra(source).unwrap();
                    assert_eq!(distances.get(source), Some(0));

                    let reference = reference_distances(&graph, source);
                    for v in graph.vertices() {
                        assert_eq!(distances.get(v), reference[v as usize]);
                    }

                    for WeightedEdge(u, v, w) in graph.arcs() {
                        if let Some(du) = distances.get(u) {
                            let dv = distances.get(v).unwrap();
                            assert!(dv <= du + w as Cost);
                        }
                    }
                }
            }
        }
    }
}
