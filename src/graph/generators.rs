use crate::graph::{LabeledGraph, MutableGraph, NodeId};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Creates nodes labelled `"0"..n` in order
fn numbered_nodes(graph: &mut LabeledGraph<OrderedFloat<f64>>, n: usize) -> Vec<NodeId> {
    (0..n).map(|i| graph.add_node(&i.to_string())).collect()
}

/// Generates a chain `0 -> 1 -> ... -> n-1` with unit weights
pub fn chain(n: usize) -> LabeledGraph<OrderedFloat<f64>> {
    let mut graph = LabeledGraph::with_capacity(n);
    let nodes = numbered_nodes(&mut graph, n);

    for pair in nodes.windows(2) {
        graph
            .add_directed_edge(pair[0], pair[1], OrderedFloat(1.0))
            .expect("chain nodes exist and unit weights are valid");
    }

    graph
}

/// Generates a `width * height` grid with 4-connectivity in both directions
///
/// Node `y * width + x` sits at column `x`, row `y`.
pub fn grid(width: usize, height: usize) -> LabeledGraph<OrderedFloat<f64>> {
    let mut graph = LabeledGraph::with_capacity(width * height);
    let nodes = numbered_nodes(&mut graph, width * height);

    for y in 0..height {
        for x in 0..width {
            let current = nodes[y * width + x];
            if x + 1 < width {
                let right = nodes[y * width + x + 1];
                graph
                    .add_undirected_edge(current, right, OrderedFloat(1.0))
                    .expect("grid nodes exist and unit weights are valid");
            }
            if y + 1 < height {
                let below = nodes[(y + 1) * width + x];
                graph
                    .add_undirected_edge(current, below, OrderedFloat(1.0))
                    .expect("grid nodes exist and unit weights are valid");
            }
        }
    }

    graph
}

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Weights are uniform in `[1, 100)`, self-loops are skipped. The same seed
/// always yields the same graph.
pub fn random(n: usize, edge_factor: f64, seed: u64) -> LabeledGraph<OrderedFloat<f64>> {
    let mut graph = LabeledGraph::with_capacity(n);
    let nodes = numbered_nodes(&mut graph, n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph
                .add_directed_edge(nodes[u], nodes[v], weight)
                .expect("random nodes exist and weights lie in [1, 100)");
        }
    }

    graph
}
