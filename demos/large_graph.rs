//! Bulk construction and query timing demo.

use std::time::Instant;

use rand::Rng;

use relgraph::{Graph, DEFAULT_KEY};

fn main() {
    let vertex_count = 10_000i64;
    let edge_count = 50_000usize;
    let mut rng = rand::thread_rng();

    println!("Building graph with {} relationships...", edge_count);
    let start = Instant::now();

    let mut graph = Graph::default();
    for _ in 0..edge_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        graph.set_dir(i, j, DEFAULT_KEY, rng.gen_range(0.1..10.0));
    }
    println!(
        "  Built in {:?} ({} vertices)",
        start.elapsed(),
        graph.size()
    );

    let start = Instant::now();
    let mut degree_total = 0;
    for i in graph.vertices() {
        degree_total += graph.nbrs_from(i).len();
    }
    println!(
        "  Enumerated {} outgoing adjacencies in {:?}",
        degree_total,
        start.elapsed()
    );

    let start = Instant::now();
    let mut hits = 0;
    for _ in 0..100_000 {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if graph.contains_undir(i, j, DEFAULT_KEY) {
            hits += 1;
        }
    }
    println!("  100k random probes in {:?} ({} hits)", start.elapsed(), hits);

    let start = Instant::now();
    for i in 0..1_000i64 {
        graph.clear_vertex(i);
    }
    println!(
        "  Cleared 1k vertices in {:?} ({} remain)",
        start.elapsed(),
        graph.size()
    );
}
