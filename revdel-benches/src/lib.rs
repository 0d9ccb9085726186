//! Benchmark support crate for revdel.
//!
//! Provides seeded graph workloads and parameter types used by the
//! Criterion benchmarks of the reverse-delete engine, the connectivity
//! probe and batch orchestration.

pub mod error;
pub mod params;
pub mod workload;
