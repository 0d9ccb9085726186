//! Command-line interface for the reverse-delete MST driver.
//!
//! `run example` reduces the built-in example graph; `run random` reduces a
//! batch of random complete graphs and reports their mean MST weight.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RandomArgs, RunCommand, RunSource, render_summary,
    run_cli,
};
