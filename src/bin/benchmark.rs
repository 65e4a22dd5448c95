use std::time::{Duration, Instant};
use shortest_paths::graph::generators;
use shortest_paths::graph::{Graph, NodeId};
use shortest_paths::{Dijkstra, LabeledGraph, ShortestPathAlgorithm, ShortestPaths, Weight};

// Function to benchmark one computation from node 0
fn benchmark_compute(graph: &LabeledGraph<Weight>) -> shortest_paths::Result<(Duration, usize)> {
    let mut sp = ShortestPaths::new(graph);

    let start = Instant::now();
    sp.compute(NodeId(0))?;
    let duration = start.elapsed();

    let reachable = sp.result().map_or(0, |result| result.reachable().count());
    Ok((duration, reachable))
}

fn main() -> shortest_paths::Result<()> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000, 500_000];

    // Edge factor: average number of edges per node
    let edge_factor = 4.0;
    let name =
        <Dijkstra as ShortestPathAlgorithm<Weight, LabeledGraph<Weight>>>::name(&Dijkstra::new());

    println!("=====================================================");
    println!("Benchmark: {} on seeded random graphs", name);
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        let graph = generators::random(size, edge_factor, seed as u64);
        let (duration, reachable) = benchmark_compute(&graph)?;

        println!(
            "{} nodes, {} edges: {} reachable in {:?}",
            graph.node_count(),
            graph.edge_count(),
            reachable,
            duration
        );
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n{:<10} | {:<10} | {:<12} | {:<12}", "Nodes", "Edges", "Time (ms)", "ns / edge");
    println!("-----------------------------------------------------");
    for (size, edges, duration) in &results {
        let per_edge = duration.as_nanos() as f64 / (*edges).max(1) as f64;
        println!(
            "{:<10} | {:<10} | {:<12.2} | {:<12.1}",
            size,
            edges,
            duration.as_secs_f64() * 1000.0,
            per_edge
        );
    }

    Ok(())
}
