/*!
Minimum spanning trees and forests.

- [`Kruskal`] sorts all edges by weight and greedily accepts those joining two different
  components. It spans **every** component of the graph, ie. it computes a minimum spanning
  *forest*.
- [`Prim`] grows a single tree from a source node using a heap of frontier arcs. It only
  ever sees the component of its source.

On a connected graph both compute the same cost. On a disconnected graph Kruskal's cost is
the sum over all components while Prim's cost covers only the component of the source; use
[`Distances::reachable_count`] or [`Connectivity`] to tell the cases apart.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;

use super::*;

/// Edges of a spanning tree or forest together with their total weight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningForest {
    cost: Cost,
    edges: Vec<WeightedEdge>,
}

impl SpanningForest {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cost: 0,
            edges: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, edge: WeightedEdge) {
        self.cost += edge.weight() as Cost;
        self.edges.push(edge);
    }

    /// Total weight of all edges
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Edges in the order they were accepted
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Number of edges
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Consumes the forest and returns its edges
    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }
}

/// Kruskal's algorithm on a borrowed graph.
///
/// Every undirected edge is stored as two arcs. For symmetric graphs only arcs `u -> v`
/// with `u < v` are considered, so each edge is sorted once. Graphs containing directed
/// arcs are treated as their underlying undirected graph.
#[derive(Debug, Clone, Copy)]
pub struct Kruskal<'a, G> {
    graph: &'a G,
}

impl<'a, G> Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares Kruskal's algorithm on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Collects every edge of the underlying undirected graph, loops excluded
    fn candidate_edges(&self) -> Vec<WeightedEdge> {
        if self.graph.is_symmetric() {
            self.graph.arcs().filter(|e| e.0 < e.1).collect_vec()
        } else {
            self.graph
                .arcs()
                .filter(|e| !e.is_loop())
                .map(|e| e.normalized())
                .collect_vec()
        }
    }

    /// Computes a minimum spanning forest over all components
    pub fn run(&self) -> SpanningForest {
        let n = self.graph.number_of_nodes();

        let mut edges = self.candidate_edges();
        edges.sort_unstable_by_key(|e| e.weight());

        let mut components = UnionFind::new(n);
        let mut forest = SpanningForest::with_capacity(n.saturating_sub(1) as usize);

        for edge in edges {
            if components.number_of_sets() <= 1 {
                break;
            }

            if components.union(edge.0, edge.1) {
                forest.push(edge);
            }
        }

        tracing::debug!(
            cost = forest.cost(),
            edges = forest.number_of_edges(),
            components = components.number_of_sets(),
            "kruskal finished"
        );

        forest
    }
}

/// Prim's algorithm on a borrowed graph.
///
/// Follows outgoing arcs only; on symmetric graphs this is the component of the source.
#[derive(Debug, Clone, Copy)]
pub struct Prim<'a, G> {
    graph: &'a G,
}

impl<'a, G> Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares Prim's algorithm on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes a minimum spanning tree of the component containing `source`.
    /// Tree edges are reported as `WeightedEdge(parent, child, weight)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `source` is not in `1..=n`.
    pub fn run(&self, source: Node) -> Result<SpanningForest> {
        self.graph.check_node(source)?;

        let mut in_tree = self.graph.vertex_flags_unset();
        let mut forest = SpanningForest::default();

        // (weight, child, parent) so that the heap is keyed by weight first
        let mut frontier: BinaryHeap<Reverse<(Weight, Node, Node)>> = BinaryHeap::new();

        in_tree[source as usize] = true;
        for WeightedArc(v, w) in self.graph.arcs_of(source) {
            if !in_tree[v as usize] {
                frontier.push(Reverse((w, v, source)));
            }
        }

        while let Some(Reverse((w, v, parent))) = frontier.pop() {
            if in_tree[v as usize] {
                continue;
            }

            in_tree[v as usize] = true;
            forest.push(WeightedEdge(parent, v, w));

            for WeightedArc(x, wx) in self.graph.arcs_of(v) {
                if !in_tree[x as usize] {
                    frontier.push(Reverse((wx, x, v)));
                }
            }
        }

        tracing::debug!(
            source,
            cost = forest.cost(),
            spanned = forest.number_of_edges() + 1,
            "prim finished"
        );

        Ok(forest)
    }
}

/// Spanning tree/forest computations directly on a graph
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Minimum spanning forest over all components (Kruskal)
    fn kruskal_forest(&self) -> SpanningForest {
        Kruskal::new(self).run()
    }

    /// Cost of the minimum spanning forest over all components (Kruskal)
    fn kruskal_cost(&self) -> Cost {
        self.kruskal_forest().cost()
    }

    /// Minimum spanning tree of the component containing `source` (Prim)
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `source` is not in `1..=n`.
    fn prim_tree(&self, source: Node) -> Result<SpanningForest> {
        Prim::new(self).run(source)
    }

    /// Cost of the minimum spanning tree of the component containing `source` (Prim)
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `source` is not in `1..=n`.
    fn prim_cost(&self, source: Node) -> Result<Cost> {
        Ok(self.prim_tree(source)?.cost())
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::RandomWeightedGraph, repr::Graph, testing::*};

    #[test]
    fn example_costs() {
        let graph = example_graph();

        assert_eq!(graph.kruskal_cost(), 8);
        for source in graph.vertices() {
            assert_eq!(graph.prim_cost(source).unwrap(), 8);
        }

        let forest = graph.kruskal_forest();
        assert_eq!(forest.number_of_edges(), 4);
        assert_eq!(
            forest.edges().iter().map(|e| e.weight()).sorted().collect_vec(),
            vec![1, 2, 2, 3]
        );

        let tree = graph.prim_tree(1).unwrap();
        assert_eq!(tree.edges()[0], WeightedEdge(1, 2, 2));
        assert_eq!(tree.number_of_edges(), 4);
    }

    #[test]
    fn prim_rejects_invalid_sources() {
        let graph = example_graph();
        for source in [0, 6] {
            assert!(matches!(
                graph.prim_cost(source),
                Err(GraphError::InvalidVertex { .. })
            ));
        }
    }

    #[test]
    fn trivial_graphs() {
        let graph = Graph::new(0);
        assert_eq!(graph.kruskal_cost(), 0);

        let graph = Graph::new(1);
        assert_eq!(graph.kruskal_cost(), 0);
        assert_eq!(graph.prim_cost(1).unwrap(), 0);

        let graph = Graph::from_undirected_edges(2, [(1, 1, 5), (2, 2, 1)]);
        assert_eq!(graph.kruskal_cost(), 0);
        assert_eq!(graph.prim_cost(2).unwrap(), 0);
    }

    #[test]
    fn disconnected_graph_forest_vs_tree() {
        // {1,2,3} costs 3, {4,5} costs 7, 6 is isolated
        let graph = Graph::from_undirected_edges(
            6,
            [(1, 2, 1), (2, 3, 2), (1, 3, 9), (4, 5, 7)],
        );

        assert_eq!(graph.kruskal_cost(), 10);
        assert_eq!(graph.kruskal_forest().number_of_edges(), 3);

        assert_eq!(graph.prim_cost(1).unwrap(), 3);
        assert_eq!(graph.prim_cost(3).unwrap(), 3);
        assert_eq!(graph.prim_cost(5).unwrap(), 7);
        assert_eq!(graph.prim_cost(6).unwrap(), 0);
    }

    #[test]
    fn parallel_edges_take_cheapest() {
        let graph = Graph::from_undirected_edges(3, [(1, 2, 5), (2, 1, 2), (2, 3, 4), (3, 2, 4)]);

        assert_eq!(graph.kruskal_cost(), 6);
        assert_eq!(graph.prim_cost(3).unwrap(), 6);
    }

    #[test]
    fn kruskal_on_directed_arcs_uses_underlying_graph() {
        let graph = Graph::from_directed_edges(4, [(2, 1, 3), (1, 3, 1), (4, 3, 2), (3, 2, 7)]);

        assert!(!graph.is_symmetric());
        assert_eq!(graph.kruskal_cost(), 6);
    }

    #[test]
    fn kruskal_is_invariant_to_insertion_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [5 as NumNodes, 20, 60] {
            for _ in 0..5 {
                let graph = Graph::gnm(rng, n, 2 * n, 1..=10);
                let expected = graph.kruskal_cost();

                let mut edges = graph.undirected_edges().collect_vec();
                for _ in 0..5 {
                    edges.shuffle(rng);
                    let reordered = Graph::from_undirected_edges(
                        n,
                        edges.iter().map(|e| if rng.random_bool(0.5) { e.reverse() } else { *e }),
                    );
                    assert_eq!(reordered.kruskal_cost(), expected);
                }
            }
        }
    }

    #[test]
    fn connected_graphs_agree_with_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 10, 30, 80] {
            for extra in [0, n, n * 4] {
                for _ in 0..5 {
                    let graph = random_connected_graph(rng, n, extra, 50);
                    let expected = reference_forest_cost(&graph);

                    let forest = graph.kruskal_forest();
                    assert_eq!(forest.cost(), expected);
                    assert_eq!(forest.number_of_edges(), (n - 1) as usize);

                    for source in graph.vertices() {
                        let tree = graph.prim_tree(source).unwrap();
                        assert_eq!(tree.cost(), expected);
                        assert_eq!(tree.number_of_edges(), (n - 1) as usize);
                    }
                }
            }
        }
    }

    #[test]
    fn disconnected_graphs_agree_with_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [10 as NumNodes, 40, 100] {
            for m in [n / 4, n / 2, n] {
                for _ in 0..5 {
                    let graph = Graph::gnm(rng, n, m, 0..=30);

                    assert_eq!(graph.kruskal_cost(), reference_forest_cost(&graph));

                    let source = rng.random_range(1..=n);
                    assert_eq!(
                        graph.prim_cost(source).unwrap(),
                        reference_tree_cost(&graph, source)
                    );
                }
            }
        }
    }
}
