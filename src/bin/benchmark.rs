use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use transit_sssp::graph::generators::generate_simple_random;
use transit_sssp::graph::{DirectedGraph, Graph};
use transit_sssp::{Distance, Strategy};

// Run every ordered pair through one strategy, returning elapsed time and distances
fn benchmark_strategy(
    strategy: Strategy,
    graph: &DirectedGraph<String, u32>,
) -> Result<(Duration, Vec<Distance<u32>>), transit_sssp::Error> {
    let n = graph.vertex_count();
    println!("Running {} strategy on graph with {} vertices...", strategy, n);

    let mut distances = Vec::with_capacity(n * n);
    let start = Instant::now();
    for origin in 0..n {
        for destination in 0..n {
            distances.push(graph.shortest_path(strategy, origin, destination)?.distance);
        }
    }
    let duration = start.elapsed();

    let reachable = distances.iter().filter(|d| d.is_finite()).count();
    println!("  - {} of {} pairs reachable, {:?}", reachable, n * n, duration);

    Ok((duration, distances))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test; the dense strategy is quadratic per pair
    let graph_sizes = vec![50, 100, 200, 400];

    // Edge factor: average number of arcs per vertex
    let edge_factor = 3.0;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("=====================================================");
    println!("Benchmark: dense matrix scan vs sparse memoized Dijkstra");
    println!("Edge factor: {} arcs per vertex (on average)", edge_factor);
    println!("=====================================================");

    // Results storage
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        // At most one arc per pair, so both strategies see the same arcs
        let graph = generate_simple_random(size, edge_factor / size as f64, 100, &mut rng)?;
        println!("Graph has {} vertices and {} arcs", graph.vertex_count(), graph.edge_count());

        let (dense_time, dense) = benchmark_strategy(Strategy::Dense, &graph)?;
        let (sparse_time, sparse) = benchmark_strategy(Strategy::Sparse, &graph)?;

        let mismatches = dense.iter().zip(&sparse).filter(|(d, s)| d != s).count();
        if mismatches > 0 {
            return Err(format!(
                "{} of {} pairs have different distances on the {}-vertex graph",
                mismatches,
                dense.len(),
                size
            )
            .into());
        }

        let speedup = dense_time.as_secs_f64() / sparse_time.as_secs_f64();
        println!("Speedup - sparse vs dense: {:.2}x", speedup);

        results.push((size, dense_time, sparse_time, speedup));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Dense (ms)", "Sparse (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, dense_time, sparse_time, speedup) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            dense_time.as_millis(),
            sparse_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
