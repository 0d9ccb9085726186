//! Property 1: Equivalence with the sequential oracle.
//!
//! On connected inputs the reduced tree must have the oracle's total weight
//! and edge count. On disconnected inputs the engine must refuse the graph,
//! report how many vertices vertex 0 reaches, and leave it untouched.

use proptest::test_runner::TestCaseResult;

use crate::{
    connectivity::reachable_count,
    error::MstError,
    graph::{Graph, MatrixGraph},
    mst::{ReverseDeleteSummary, reverse_delete},
    stats,
};

use super::helpers::{fail, weights_match};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let vertex_count = fixture.graph.num_vertices();
    let oracle = sequential_kruskal(vertex_count, &stats::edges(&fixture.graph));
    let mut graph = fixture.graph.clone();
    let result = reverse_delete(&mut graph);

    if oracle.component_count > 1 {
        return check_rejected(fixture, &graph, result);
    }

    let summary = result.map_err(|e| fail(fixture, format!("reverse_delete failed: {e}")))?;
    if !weights_match(summary.total_weight(), oracle.total_weight) {
        return Err(fail(
            fixture,
            format!(
                "total weight mismatch: reverse_delete={}, oracle={}",
                summary.total_weight(),
                oracle.total_weight
            ),
        ));
    }
    if summary.retained().len() != oracle.edge_count {
        return Err(fail(
            fixture,
            format!(
                "edge count mismatch: reverse_delete={}, oracle={}",
                summary.retained().len(),
                oracle.edge_count
            ),
        ));
    }
    Ok(())
}

fn check_rejected(
    fixture: &MstFixture,
    graph: &MatrixGraph,
    result: Result<ReverseDeleteSummary, MstError>,
) -> TestCaseResult {
    let vertex_count = fixture.graph.num_vertices();
    let expected = MstError::Disconnected {
        reachable: reachable_count(&fixture.graph, 0),
        vertex_count,
    };
    match result {
        Err(error) if error == expected => {}
        other => {
            return Err(fail(
                fixture,
                format!("expected {expected:?} for disconnected input, got {other:?}"),
            ));
        }
    }
    if *graph != fixture.graph {
        return Err(fail(fixture, "rejected graph was mutated"));
    }
    Ok(())
}
