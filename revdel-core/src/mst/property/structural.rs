//! Property 2: Structural invariant verification.
//!
//! For every connected input, the reduced graph must be a spanning tree:
//!
//! - **Edge count**: `V - 1` edges.
//! - **Acyclicity**: no retained edge closes a cycle.
//! - **Connectivity**: every vertex is reachable from vertex 0.
//! - **Subset**: each retained edge exists in the input with the same weight.
//! - **Consistency**: the summary lists exactly the edges left in the graph.

use proptest::test_runner::TestCaseResult;

use crate::{
    connectivity::is_connected,
    graph::Graph,
    mst::{Edge, reverse_delete},
    stats,
};

use super::helpers::{fail, find_root, weights_match};
use super::types::{MstFixture, WeightDistribution};

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    if fixture.distribution == WeightDistribution::Disconnected {
        return Ok(());
    }

    let mut graph = fixture.graph.clone();
    let summary = reverse_delete(&mut graph)
        .map_err(|e| fail(fixture, format!("reverse_delete failed: {e}")))?;
    let retained = summary.retained();
    let vertex_count = graph.num_vertices();

    if retained.len() != vertex_count - 1 {
        return Err(fail(
            fixture,
            format!(
                "expected {} tree edges, found {}",
                vertex_count - 1,
                retained.len()
            ),
        ));
    }
    validate_acyclicity(fixture, vertex_count, retained)?;
    if !is_connected(&graph) {
        return Err(fail(fixture, "reduced graph is disconnected"));
    }
    validate_subset(fixture, retained)?;

    if stats::edges(&graph) != retained {
        return Err(fail(fixture, "summary disagrees with the reduced graph"));
    }
    let removed = fixture.graph.num_edges() - graph.num_edges();
    if summary.removed() != removed {
        return Err(fail(
            fixture,
            format!("summary reports {} removals, graph lost {removed}", summary.removed()),
        ));
    }
    let weight: f64 = retained.iter().map(Edge::weight).sum();
    if !weights_match(summary.total_weight(), weight) {
        return Err(fail(fixture, "summary weight disagrees with retained edges"));
    }
    Ok(())
}

fn validate_acyclicity(fixture: &MstFixture, vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        if edge.source() >= edge.target() {
            return Err(fail(fixture, format!("edge {edge:?} is not canonical")));
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(fail(fixture, format!("edge {edge:?} closes a cycle")));
        }
        parent[left.max(right)] = left.min(right);
    }
    Ok(())
}

fn validate_subset(fixture: &MstFixture, edges: &[Edge]) -> TestCaseResult {
    for edge in edges {
        if fixture.graph.weight(edge.source(), edge.target()) != Some(edge.weight()) {
            return Err(fail(
                fixture,
                format!("edge {edge:?} is not present in the input"),
            ));
        }
    }
    Ok(())
}
