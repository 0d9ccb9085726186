//! Aggregate edge statistics.

use crate::{graph::Graph, mst::Edge};

/// Returns every present edge `(i, j)` with `i < j` in ascending pair order.
///
/// Only the upper triangle is scanned, so for a directed graph edges stored
/// from a larger to a smaller index are not reported.
#[must_use]
pub fn edges<G: Graph + ?Sized>(graph: &G) -> Vec<Edge> {
    let n = graph.num_vertices();
    let mut edges = Vec::new();
    for source in 0..n {
        for target in (source + 1)..n {
            if let Some(weight) = graph.weight(source, target) {
                edges.push(Edge::new(source, target, weight));
            }
        }
    }
    edges
}

/// Sums the weights of every present edge `(i, j)` with `i < j`.
///
/// # Examples
/// ```
/// use revdel_core::{MatrixGraph, total_edge_weight};
///
/// let graph = MatrixGraph::from_edges(3, &[(0, 1, 1.5), (1, 2, 2.0)])?;
/// assert_eq!(total_edge_weight(&graph), 3.5);
/// # Ok::<(), revdel_core::GraphError>(())
/// ```
#[must_use]
pub fn total_edge_weight<G: Graph + ?Sized>(graph: &G) -> f64 {
    edges(graph).iter().map(Edge::weight).sum()
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}
