//! Shared test utilities used across revdel crates.

pub mod ci;
pub mod tracing;
