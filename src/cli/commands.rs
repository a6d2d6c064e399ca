//! CLI command implementations.

use std::io::Write;

use serde::Serialize;

use crate::graph::{sample_graph, Graph, GraphBuilder};
use crate::queue::Queue;
use crate::types::{GraphError, GraphResult, TraversalKind, TreeEdges};

/// One traversal as emitted by `--format json`.
#[derive(Serialize)]
struct TraversalReport<'a> {
    kind: TraversalKind,
    origin: &'a str,
    order: &'a Queue<String>,
    tree_edges: &'a TreeEdges<String>,
}

/// Parse a `SOURCE:TARGET` edge argument.
pub fn parse_edge(spec: &str) -> GraphResult<(String, String)> {
    match spec.split_once(':') {
        Some((source, target)) if !source.trim().is_empty() && !target.trim().is_empty() => {
            Ok((source.trim().to_string(), target.trim().to_string()))
        }
        _ => Err(GraphError::InvalidArgument(format!(
            "edge must look like SOURCE:TARGET, got {:?}",
            spec
        ))),
    }
}

/// Split a comma-separated vertex list, dropping empty entries.
pub fn parse_vertices(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run both traversals over the sample graph.
pub fn cmd_demo<W: Write>(out: &mut W, origin: &str, json: bool) -> GraphResult<()> {
    let mut graph = sample_graph()?;
    run_traversals(
        out,
        &mut graph,
        origin,
        &[TraversalKind::Bfs, TraversalKind::Dfs],
        json,
    )
}

/// Build a graph from command-line vertices and edges, then traverse it.
pub fn cmd_traverse<W: Write>(
    out: &mut W,
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
    origin: &str,
    kinds: &[TraversalKind],
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphBuilder::new().vertices(vertices).edges(edges).build()?;
    run_traversals(out, &mut graph, origin, kinds, json)
}

fn run_traversals<W: Write>(
    out: &mut W,
    graph: &mut Graph<String>,
    origin: &str,
    kinds: &[TraversalKind],
    json: bool,
) -> GraphResult<()> {
    let origin = origin.to_string();
    let mut results = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let order = match kind {
            TraversalKind::Bfs => graph.breadth_first(&origin)?,
            TraversalKind::Dfs => graph.depth_first(&origin)?,
        };
        results.push((kind, order));
    }
    let graph = &*graph;

    if json {
        let reports: Vec<TraversalReport<'_>> = results
            .iter()
            .map(|(kind, order)| TraversalReport {
                kind: *kind,
                origin: &origin,
                order,
                tree_edges: tree_edges_of(graph, *kind),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    } else {
        for (kind, order) in results {
            let labels: Vec<String> = order.into_iter().collect();
            writeln!(out, "{} Traversal Result: {}", kind.title(), labels.join(" "))?;
            writeln!(out, "{} Tree edges: {}", kind, tree_edges_of(graph, kind))?;
        }
    }
    Ok(())
}

fn tree_edges_of<E>(graph: &Graph<E>, kind: TraversalKind) -> &TreeEdges<E> {
    match kind {
        TraversalKind::Bfs => graph.bfs_tree_edges(),
        TraversalKind::Dfs => graph.dfs_tree_edges(),
    }
}
