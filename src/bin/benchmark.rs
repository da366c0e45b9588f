use std::time::{Duration, Instant};

use bmssp::graph::generators::random_sparse;
use bmssp::{BmsspSolver, CsrGraph, Dijkstra, ShortestPathAlgorithm, SolveOptions};

fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &CsrGraph, source: usize) -> Duration
where
    A: ShortestPathAlgorithm,
{
    println!(
        "Running {} on graph with {} vertices...",
        name,
        graph.vertex_count()
    );

    let options = SolveOptions::new(source);
    let start = Instant::now();
    let result = algorithm.solve(graph, &options).unwrap();
    let duration = start.elapsed();

    let reachable = result.dist.iter().filter(|d| d.is_finite()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000, 500_000];

    // Average number of edges per vertex.
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs BMSSP");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bmssp = BmsspSolver::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_sparse(size, size * edge_factor, size as u64)
            .build()
            .unwrap();
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source);
        let bmssp_time = benchmark_algorithm("BMSSP", &bmssp, &graph, source);

        results.push((size, dijkstra_time, bmssp_time));

        let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64();
        println!("Speedup - BMSSP vs Dijkstra: {:.2}x", speedup);
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Dijkstra (ms)", "BMSSP (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bmssp_time) in &results {
        let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64();
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            bmssp_time.as_millis(),
            speedup
        );
    }
}
