//! Strategy builders for MST property-based tests.
//!
//! Every generator works on a seeded [`SmallRng`] so rstest cases can pin a
//! distribution and seed while proptest samples both. Vertex counts stay
//! small because each reduction probes connectivity once per edge.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{GraphMut, MatrixGraph};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 16;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 12;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Unique => {
            let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            connected_graph(rng, n, (0.2, 0.6), continuous_weight)
        }
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let n = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            connected_graph(rng, n, (0.7, 0.95), continuous_weight)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    MstFixture {
        graph,
        distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Builds a connected graph over `0..n`: a random spanning tree first, then
/// every other pair with a probability drawn from `edge_prob_range`.
fn connected_graph(
    rng: &mut SmallRng,
    n: usize,
    edge_prob_range: (f64, f64),
    weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MatrixGraph {
    let mut graph = MatrixGraph::new(n);
    add_component(&mut graph, rng, 0..n, edge_prob_range, weight_generator);
    graph
}

/// Connects the vertices of `range` to each other and never to anything
/// outside it.
fn add_component(
    graph: &mut MatrixGraph,
    rng: &mut SmallRng,
    range: std::ops::Range<usize>,
    edge_prob_range: (f64, f64),
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) {
    for vertex in (range.start + 1)..range.end {
        let parent = rng.gen_range(range.start..vertex);
        let weight = weight_generator(rng);
        graph.add_edge(parent, vertex, weight);
    }

    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    for source in range.clone() {
        for target in (source + 1)..range.end {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng);
                graph.add_edge(source, target, weight);
            }
        }
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> MatrixGraph {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    connected_graph(rng, n, (0.3, 0.7), move |r| pool[r.gen_range(0..pool.len())])
}

fn generate_sparse(rng: &mut SmallRng) -> MatrixGraph {
    let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = connected_graph(rng, n, (0.0, 0.0), continuous_weight);

    let extra_count = rng.gen_range(n / 2..=n);
    for _ in 0..extra_count {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        if source != target {
            graph.add_edge(source, target, continuous_weight(rng));
        }
    }
    graph
}

/// Splits `4..=MAX_VERTICES` vertices into two or three contiguous,
/// mutually unreachable components.
fn generate_disconnected(rng: &mut SmallRng) -> MatrixGraph {
    let n = rng.gen_range(4..=MAX_VERTICES);
    let component_count = rng.gen_range(2..=3);
    let mut cuts: Vec<usize> = (0..component_count - 1)
        .map(|_| rng.gen_range(1..n))
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut graph = MatrixGraph::new(n);
    let mut start = 0;
    for end in cuts.into_iter().chain(std::iter::once(n)) {
        add_component(&mut graph, rng, start..end, (0.3, 0.8), continuous_weight);
        start = end;
    }
    graph
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
        ]
    }
}
