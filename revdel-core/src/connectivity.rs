//! Reachability queries over the current state of a [`Graph`].
//!
//! The reverse-delete engine probes connectivity once per candidate edge, so
//! the traversal keeps to a plain `Vec` worklist and a visited bitmap. A
//! vertex is marked when it is first pushed, so no vertex is queued twice.

use crate::graph::Graph;

/// Returns the visited flags of a traversal started at `start`.
///
/// # Panics
/// Panics when `start` is out of range.
///
/// # Examples
/// ```
/// use revdel_core::{GraphMut, MatrixGraph, reachable_from};
///
/// let mut graph = MatrixGraph::new(3);
/// graph.add_edge(0, 1, 1.0);
/// assert_eq!(reachable_from(&graph, 0), [true, true, false]);
/// ```
#[must_use]
pub fn reachable_from<G: Graph + ?Sized>(graph: &G, start: usize) -> Vec<bool> {
    let n = graph.num_vertices();
    assert!(
        start < n,
        "start vertex {start} is out of range for a graph with {n} vertices"
    );
    let mut visited = vec![false; n];
    let mut worklist = Vec::with_capacity(n);
    visited[start] = true;
    worklist.push(start);

    while let Some(vertex) = worklist.pop() {
        for neighbour in graph.neighbours(vertex) {
            if !visited[neighbour] {
                visited[neighbour] = true;
                worklist.push(neighbour);
            }
        }
    }
    visited
}

/// Returns how many vertices are reachable from `start`, `start` included.
///
/// # Panics
/// Panics when `start` is out of range.
#[must_use]
pub fn reachable_count<G: Graph + ?Sized>(graph: &G, start: usize) -> usize {
    reachable_from(graph, start)
        .into_iter()
        .filter(|&seen| seen)
        .count()
}

/// Returns `true` when every vertex is reachable from vertex 0.
///
/// A graph without vertices has nothing left unvisited and is reported as
/// connected.
///
/// # Examples
/// ```
/// use revdel_core::{GraphMut, MatrixGraph, is_connected};
///
/// let mut graph = MatrixGraph::new(3);
/// graph.add_edge(0, 1, 1.0);
/// assert!(!is_connected(&graph));
/// graph.add_edge(1, 2, 1.0);
/// assert!(is_connected(&graph));
/// ```
#[must_use]
pub fn is_connected<G: Graph + ?Sized>(graph: &G) -> bool {
    if graph.num_vertices() == 0 {
        return true;
    }
    reachable_from(graph, 0).into_iter().all(|seen| seen)
}
