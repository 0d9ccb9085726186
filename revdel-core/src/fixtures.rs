//! Fixed example graphs with known minimum spanning tree weights.

use crate::graph::{GraphMut, MatrixGraph};

/// MST weight of [`example_graph`].
pub const EXAMPLE_MST_WEIGHT: f64 = 23.0;

/// MST weight of [`four_vertex_graph`].
pub const FOUR_VERTEX_MST_WEIGHT: f64 = 7.0;

const EXAMPLE_EDGES: &[(usize, usize, f64)] = &[
    (0, 1, 4.0),
    (0, 2, 3.0),
    (1, 2, 1.0),
    (1, 3, 2.0),
    (2, 3, 4.5),
    (2, 4, 7.0),
    (3, 4, 6.5),
    (3, 5, 5.0),
    (4, 5, 8.0),
    (4, 6, 2.5),
    (5, 6, 9.0),
    (5, 7, 3.5),
    (6, 7, 6.0),
];

// A = 0, B = 1, C = 2, D = 3.
const FOUR_VERTEX_EDGES: &[(usize, usize, f64)] = &[
    (0, 1, 1.0),
    (0, 2, 2.0),
    (1, 2, 3.0),
    (1, 3, 4.0),
    (2, 3, 5.0),
];

/// Returns the 8-vertex, 13-edge example graph.
///
/// # Examples
/// ```
/// use revdel_core::{EXAMPLE_MST_WEIGHT, example_graph, reverse_delete};
///
/// let mut graph = example_graph();
/// let summary = reverse_delete(&mut graph)?;
/// assert_eq!(summary.total_weight(), EXAMPLE_MST_WEIGHT);
/// # Ok::<(), revdel_core::MstError>(())
/// ```
#[must_use]
pub fn example_graph() -> MatrixGraph {
    build(8, EXAMPLE_EDGES)
}

/// Returns the four-vertex graph `AB=1, AC=2, BC=3, BD=4, CD=5`.
#[must_use]
pub fn four_vertex_graph() -> MatrixGraph {
    build(4, FOUR_VERTEX_EDGES)
}

fn build(vertex_count: usize, edges: &[(usize, usize, f64)]) -> MatrixGraph {
    let mut graph = MatrixGraph::new(vertex_count);
    for &(source, target, weight) in edges {
        graph.add_edge(source, target, weight);
    }
    graph
}
