//! Basic build -> query -> clear flow.

use relgraph::cli::render::render_text;
use relgraph::{Graph, DEFAULT_KEY};

fn main() {
    // A directed graph with the default 0.0 absence sentinel.
    let mut graph = Graph::default();

    // A one-directional relationship and a keyed undirected one.
    graph.set(0, 1, DEFAULT_KEY, 30.0);
    graph.set_undir(0, 1, "hi", 0.9);
    graph.set(3, 1, DEFAULT_KEY, 0.5);

    println!("{}", render_text(&graph));

    // Reading a directed edge from the far end reports the negated value.
    println!("get(0, 1) = {}", graph.get(0, 1, DEFAULT_KEY));
    println!("get(1, 0) = {}", graph.get(1, 0, DEFAULT_KEY));

    println!("vertices: {:?}", graph.vertices());
    println!("nbrs_to(1): {:?}", graph.nbrs_to(1));
    println!("keys_of(1): {:?}", graph.keys_of(1));

    // Removing vertex 1 prunes 0 and 3 with it: neither has any other
    // relationship.
    graph.clear_vertex(1);
    println!("after clear_vertex(1): {} vertices", graph.size());
}
