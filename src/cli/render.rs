//! Text rendering of a graph for humans. Built entirely on the public
//! query surface.

use std::fmt::Write as _;

use crate::graph::Graph;

/// Render every vertex and its outgoing relationships as plain text.
///
/// Undirected relationships are outward on both sides, so they show up
/// once per direction; a vertex with only incoming relationships is listed
/// bare.
pub fn render_text(graph: &Graph) -> String {
    let mut out = String::new();
    let vertices = graph.vertices();
    let _ = writeln!(
        out,
        "{} graph, {} vertices",
        if graph.directed { "directed" } else { "undirected" },
        vertices.len()
    );
    for &i in &vertices {
        let targets = graph.nbrs_from(i);
        if targets.is_empty() {
            let _ = writeln!(out, "  {i}");
            continue;
        }
        for &j in &targets {
            for key in graph.keys_between(i, j) {
                if graph.contains_dir(i, j, &key) {
                    let _ = writeln!(out, "  {} -> {}  [{:?}] {}", i, j, key, graph.get(i, j, &key));
                }
            }
        }
    }
    out
}
