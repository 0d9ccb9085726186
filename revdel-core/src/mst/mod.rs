//! Reverse-delete minimum spanning tree (MST) reduction.
//!
//! The engine starts from the full edge set of a connected undirected graph
//! and visits edges from heaviest to lightest. Each edge is deleted and the
//! graph re-probed for connectivity; an edge whose removal disconnects the
//! graph is a bridge of the remaining subgraph and is restored. What is left
//! once every edge has been visited is a minimum spanning tree of the input.
//!
//! The reduction mutates the caller's graph in place. Each probe costs
//! O(V²) on a dense graph, giving O(V⁴) overall for complete inputs.

use std::cmp::Ordering;

use tracing::{debug, instrument, trace, warn};

use crate::{
    connectivity::{is_connected, reachable_count},
    error::MstError,
    graph::{Graph, GraphMut},
    stats,
};

/// An undirected weighted edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge, ordering the endpoints so that `source <= target`.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::Edge;
    ///
    /// let edge = Edge::new(4, 1, 2.5);
    /// assert_eq!((edge.source(), edge.target()), (1, 4));
    /// assert_eq!(edge.weight(), 2.5);
    /// ```
    #[must_use]
    pub fn new(left: usize, right: usize, weight: f64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

impl Eq for Edge {}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of a [`reverse_delete`] reduction.
#[derive(Clone, Debug, PartialEq)]
pub struct ReverseDeleteSummary {
    removed: usize,
    retained: Vec<Edge>,
    total_weight: f64,
    connectivity_checks: usize,
}

impl ReverseDeleteSummary {
    /// Returns how many edges were deleted for good.
    #[must_use]
    #[rustfmt::skip]
    pub fn removed(&self) -> usize { self.removed }

    /// Returns the spanning tree edges in ascending `(source, target)` order.
    #[must_use]
    #[rustfmt::skip]
    pub fn retained(&self) -> &[Edge] { &self.retained }

    /// Returns the summed weight of the spanning tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns how many post-deletion connectivity probes were run, one per
    /// candidate edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn connectivity_checks(&self) -> usize { self.connectivity_checks }
}

/// Collects every present edge `(i, j)` with `i < j`, heaviest first.
///
/// Equal weights are ordered by ascending `(source, target)` so the visit
/// order, and hence the resulting tree, is deterministic.
///
/// # Errors
/// Returns [`MstError::NonFiniteWeight`] when a stored weight is NaN or
/// infinite.
pub fn candidate_edges<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Edge>, MstError> {
    let mut edges = stats::edges(graph);
    if let Some(edge) = edges.iter().find(|edge| !edge.weight.is_finite()) {
        return Err(MstError::NonFiniteWeight {
            left: edge.source,
            right: edge.target,
        });
    }
    edges.sort_unstable_by(heaviest_first);
    Ok(edges)
}

fn heaviest_first(left: &Edge, right: &Edge) -> Ordering {
    right
        .weight
        .total_cmp(&left.weight)
        .then_with(|| left.source.cmp(&right.source))
        .then_with(|| left.target.cmp(&right.target))
}

/// Reduces `graph` in place to a minimum spanning tree using reverse-delete.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices,
/// [`MstError::DirectedGraph`] for directed graphs,
/// [`MstError::NonFiniteWeight`] when an edge weight is NaN or infinite, and
/// [`MstError::Disconnected`] when not every vertex is reachable from vertex
/// 0. The graph is left untouched on error.
///
/// # Examples
/// ```
/// use revdel_core::{Graph, MatrixGraph, reverse_delete};
///
/// let mut graph = MatrixGraph::from_edges(
///     4,
///     &[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0), (1, 3, 4.0), (2, 3, 5.0)],
/// )?;
/// let summary = reverse_delete(&mut graph)?;
/// assert_eq!(summary.total_weight(), 7.0);
/// assert_eq!(summary.removed(), 2);
/// assert_eq!(graph.num_edges(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.reverse_delete",
    err,
    skip(graph),
    fields(vertices = graph.num_vertices(), edges = tracing::field::Empty),
)]
pub fn reverse_delete<G: GraphMut + ?Sized>(
    graph: &mut G,
) -> Result<ReverseDeleteSummary, MstError> {
    let vertex_count = graph.num_vertices();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    if graph.is_directed() {
        return Err(MstError::DirectedGraph);
    }

    let candidates = candidate_edges(graph)?;
    tracing::Span::current().record("edges", candidates.len());

    let reachable = reachable_count(graph, 0);
    if reachable != vertex_count {
        warn!(reachable, vertex_count, "refusing to reduce a disconnected graph");
        return Err(MstError::Disconnected {
            reachable,
            vertex_count,
        });
    }

    let mut removed: usize = 0;
    for edge in &candidates {
        graph.delete_edge(edge.source, edge.target);
        if is_connected(graph) {
            removed += 1;
        } else {
            trace!(
                source = edge.source,
                target = edge.target,
                weight = edge.weight,
                "restoring bridge"
            );
            graph.add_edge(edge.source, edge.target, edge.weight);
        }
    }

    let retained = stats::edges(graph);
    let total_weight: f64 = retained.iter().map(Edge::weight).sum();
    debug!(
        removed,
        retained = retained.len(),
        total_weight,
        "reverse-delete completed"
    );

    Ok(ReverseDeleteSummary {
        removed,
        retained,
        total_weight,
        connectivity_checks: candidates.len(),
    })
}
