//! Fixtures and naive reference implementations shared by the unit tests

use rand::Rng;

use crate::{gens::*, ops::*, repr::*, *};

/// Five nodes, seven edges; shortest distances from `1` are `{2: 2, 3: 3, 4: 5, 5: 7}`
/// and every spanning tree of minimum weight costs `8`.
pub(crate) const EXAMPLE_EDGES: [(Node, Node, Weight); 7] = [
    (1, 2, 2),
    (1, 3, 4),
    (2, 3, 1),
    (2, 4, 3),
    (3, 4, 5),
    (3, 5, 7),
    (4, 5, 2),
];

pub(crate) fn example_graph() -> Graph {
    Graph::from_undirected_edges(5, EXAMPLE_EDGES)
}

/// A connected random graph: a random spanning tree plus `extra` random edges
pub(crate) fn random_connected_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra: NumArcs,
    max_weight: Weight,
) -> Graph {
    Graph::connected_gnm(rng, n, extra, 0..=max_weight)
}

/// Bellman-Ford relaxation until fixpoint; `None` marks unreachable nodes
pub(crate) fn reference_distances<G: WeightedAdjacencyList>(
    graph: &G,
    source: Node,
) -> Vec<Option<Cost>> {
    let mut dist: Vec<Option<Cost>> = vec![None; graph.len() + 1];
    dist[source as usize] = Some(0);

    loop {
        let mut changed = false;
        for WeightedEdge(u, v, w) in graph.arcs() {
            if let Some(du) = dist[u as usize] {
                let candidate = du + w as Cost;
                if dist[v as usize].is_none_or(|dv| candidate < dv) {
                    dist[v as usize] = Some(candidate);
                    changed = true;
                }
            }
        }

        if !changed {
            return dist;
        }
    }
}

/// Grows a minimum spanning tree from `source` by scanning all arcs for the cheapest one
/// leaving the tree in every round. Quadratic, only meant for small graphs.
pub(crate) fn reference_tree_cost<G: WeightedAdjacencyList>(graph: &G, source: Node) -> Cost {
    let mut in_tree = graph.vertex_flags_unset();
    in_tree[source as usize] = true;
    let mut cost = 0;

    loop {
        let cheapest = graph
            .arcs()
            .filter(|e| in_tree[e.0 as usize] && !in_tree[e.1 as usize])
            .min_by_key(|e| e.weight());

        match cheapest {
            Some(WeightedEdge(_, v, w)) => {
                in_tree[v as usize] = true;
                cost += w as Cost;
            }
            None => return cost,
        }
    }
}

/// Sum of [`reference_tree_cost`] over all components of a symmetric graph
pub(crate) fn reference_forest_cost<G: WeightedAdjacencyList>(graph: &G) -> Cost {
    let mut covered = graph.vertex_flags_unset();
    let mut cost = 0;

    for u in graph.vertices() {
        if covered[u as usize] {
            continue;
        }

        cost += reference_tree_cost(graph, u);

        let mut stack = vec![u];
        covered[u as usize] = true;
        while let Some(x) = stack.pop() {
            for WeightedArc(y, _) in graph.arcs_of(x) {
                if !covered[y as usize] {
                    covered[y as usize] = true;
                    stack.push(y);
                }
            }
        }
    }

    cost
}
