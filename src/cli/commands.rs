//! CLI command implementations and the edge-list loader.

use std::path::Path;

use serde::Serialize;

use crate::graph::{Direction, Graph};
use crate::types::{RelError, RelResult, VertexId, DEFAULT_KEY};

use super::render::render_text;

/// One real (outward) relationship, for JSON export.
#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub source: VertexId,
    pub target: VertexId,
    pub key: String,
    pub value: f64,
}

fn parse_vertex(token: &str, line: usize) -> RelResult<VertexId> {
    token.parse().map_err(|_| RelError::Parse {
        line,
        reason: format!("bad vertex id `{token}`"),
    })
}

fn parse_weight(token: &str, line: usize) -> RelResult<f64> {
    token.parse().map_err(|_| RelError::Parse {
        line,
        reason: format!("bad weight `{token}`"),
    })
}

/// Load a graph from a plain-text edge list.
///
/// Blank lines and `#` comments are skipped. Header directives `directed`,
/// `undirected`, and `sentinel <x>` adjust the graph configuration. Every
/// other line is `[dir|undir] i j weight [key]`: an optional leading token
/// forcing the write direction, then the vertex pair, the weight, and an
/// optional key (default empty).
pub fn load_graph(path: &Path, directed: bool) -> RelResult<Graph> {
    let text = std::fs::read_to_string(path)?;
    let mut graph = Graph::new(directed, 0.0);

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();

        match tokens.as_slice() {
            ["directed"] => {
                graph.directed = true;
                continue;
            }
            ["undirected"] => {
                graph.directed = false;
                continue;
            }
            ["sentinel", value] => {
                graph.no_relationship = parse_weight(value, line)?;
                continue;
            }
            _ => {}
        }

        let forced = match tokens.first().copied() {
            Some("dir") => {
                tokens.remove(0);
                Some(true)
            }
            Some("undir") => {
                tokens.remove(0);
                Some(false)
            }
            _ => None,
        };

        if tokens.len() < 3 || tokens.len() > 4 {
            return Err(RelError::Parse {
                line,
                reason: format!(
                    "expected `[dir|undir] i j weight [key]`, got {} fields",
                    tokens.len()
                ),
            });
        }

        let i = parse_vertex(tokens[0], line)?;
        let j = parse_vertex(tokens[1], line)?;
        let x = parse_weight(tokens[2], line)?;
        let key = tokens.get(3).copied().unwrap_or(DEFAULT_KEY);

        match forced {
            Some(true) => graph.set_dir(i, j, key, x),
            Some(false) => graph.set_undir(i, j, key, x),
            None => graph.set(i, j, key, x),
        }
    }

    log::debug!(
        "loaded {} with {} vertices",
        path.display(),
        graph.size()
    );
    Ok(graph)
}

/// Collect every real relationship via the query surface.
pub fn edge_rows(graph: &Graph) -> Vec<EdgeRow> {
    let mut rows = Vec::new();
    for i in graph.vertices() {
        for j in graph.nbrs_from(i) {
            for key in graph.keys_between(i, j) {
                if graph.contains_dir(i, j, &key) {
                    rows.push(EdgeRow {
                        source: i,
                        target: j,
                        key: key.clone(),
                        value: graph.get(i, j, &key),
                    });
                }
            }
        }
    }
    rows
}

/// Summarize an edge-list file.
pub fn cmd_info(path: &Path, directed: bool, json: bool) -> RelResult<()> {
    let graph = load_graph(path, directed)?;
    let keys = graph.keys();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.directed,
            "sentinel": graph.no_relationship,
            "vertices": graph.size(),
            "relationships": edge_rows(&graph).len(),
            "keys": keys,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.directed);
        println!("Sentinel: {}", graph.no_relationship);
        println!("Vertices: {}", graph.size());
        println!("Relationships: {}", edge_rows(&graph).len());
        println!("Keys: {}", keys.len());
        for key in &keys {
            println!("  {key:?}");
        }
    }
    Ok(())
}

/// Render the full graph as text.
pub fn cmd_show(path: &Path, directed: bool) -> RelResult<()> {
    let graph = load_graph(path, directed)?;
    print!("{}", render_text(&graph));
    Ok(())
}

/// Look up one relationship value.
pub fn cmd_get(
    path: &Path,
    directed: bool,
    i: VertexId,
    j: VertexId,
    key: &str,
    json: bool,
) -> RelResult<()> {
    let graph = load_graph(path, directed)?;
    let value = graph.get(i, j, key);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "source": i,
                "target": j,
                "key": key,
                "value": value,
                "outward": graph.contains_dir(i, j, key),
                "present": graph.contains_undir(i, j, key),
            })
        );
    } else if graph.contains_undir(i, j, key) {
        let kind = if graph.contains_dir(i, j, key) {
            "outward"
        } else {
            "shadow"
        };
        println!("{} -> {} [{:?}] = {} ({})", i, j, key, value, kind);
    } else {
        println!("{} -> {} [{:?}] = {} (absent)", i, j, key, value);
    }
    Ok(())
}

/// List a vertex's neighbors.
pub fn cmd_nbrs(
    path: &Path,
    directed: bool,
    i: VertexId,
    key: Option<&str>,
    direction: Option<&str>,
    json: bool,
) -> RelResult<()> {
    let graph = load_graph(path, directed)?;

    let nbrs = match direction {
        None => match key {
            Some(k) => graph.nbrs_keyed(i, k),
            None => graph.nbrs(i),
        },
        Some(name) => {
            let dir = Direction::from_name(name)
                .ok_or_else(|| RelError::UnknownDirection(name.to_string()))?;
            match (dir, key) {
                (Direction::Outgoing, Some(k)) => graph.nbrs_from_keyed(i, k),
                (Direction::Outgoing, None) => graph.nbrs_from(i),
                (Direction::Incoming, Some(k)) => graph.nbrs_to_keyed(i, k),
                (Direction::Incoming, None) => graph.nbrs_to(i),
                (Direction::Either, Some(k)) => {
                    let mut out = graph.nbrs_from_keyed(i, k);
                    out.extend(graph.nbrs_to_keyed(i, k));
                    out
                }
                (Direction::Either, None) => {
                    let mut out = graph.nbrs_from(i);
                    out.extend(graph.nbrs_to(i));
                    out
                }
            }
        }
    };

    if json {
        println!("{}", serde_json::json!({ "vertex": i, "nbrs": nbrs }));
    } else if nbrs.is_empty() {
        println!("{i}: no neighbors");
    } else {
        let list: Vec<String> = nbrs.iter().map(|n| n.to_string()).collect();
        println!("{}: {}", i, list.join(" "));
    }
    Ok(())
}

/// List keys, either graph-wide or for one vertex.
pub fn cmd_keys(path: &Path, directed: bool, vertex: Option<VertexId>, json: bool) -> RelResult<()> {
    let graph = load_graph(path, directed)?;
    let keys = match vertex {
        Some(i) => graph.keys_of(i),
        None => graph.keys(),
    };

    if json {
        println!("{}", serde_json::json!({ "keys": keys }));
    } else if keys.is_empty() {
        println!("no keys");
    } else {
        for key in &keys {
            println!("{key:?}");
        }
    }
    Ok(())
}

/// Export every real relationship as JSON.
pub fn cmd_export(path: &Path, directed: bool, pretty: bool) -> RelResult<()> {
    let graph = load_graph(path, directed)?;
    let rows = edge_rows(&graph);
    let text = if pretty {
        serde_json::to_string_pretty(&rows).unwrap_or_default()
    } else {
        serde_json::to_string(&rows).unwrap_or_default()
    };
    println!("{text}");
    Ok(())
}
