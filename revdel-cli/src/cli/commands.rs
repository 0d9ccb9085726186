//! Command implementations and argument parsing for the `revdel` binary.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use revdel_core::{
    BatchBuilder, BatchError, BatchReport, DEFAULT_GRAPH_COUNT, DEFAULT_VERTEX_COUNT, Graph,
    MstError, example_graph, reverse_delete,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "revdel",
    about = "Compute minimum spanning trees with the reverse-delete algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Reduce one or more graphs and report their MST weights.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graphs to reduce.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph sources supported by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Reduce the built-in 8-vertex example graph.
    Example,
    /// Reduce a batch of random complete graphs.
    Random(RandomArgs),
}

/// Random batch arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of vertices in each graph.
    #[arg(
        long,
        default_value_t = DEFAULT_VERTEX_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub vertices: usize,

    /// Number of graphs in the batch.
    #[arg(
        long,
        default_value_t = DEFAULT_GRAPH_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub graphs: usize,

    /// Seed for reproducible runs; drawn from OS entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Batch configuration or execution failed.
    #[error(transparent)]
    Batch(#[from] BatchError),
    /// Reducing a single graph failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable error code and, when a reduction failed, the
    /// underlying MST error code.
    #[must_use]
    pub fn codes(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            Self::Batch(error) => (
                Some(error.code().as_str()),
                error.mst_code().map(|code| code.as_str()),
            ),
            Self::Mst(error) => (Some(error.code().as_str()), Some(error.code().as_str())),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Label of the graph source (`example` or `random`).
    pub source: String,
    /// MST weights observed for every reduced graph.
    pub report: BatchReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the batch configuration is invalid or a
/// reduction fails.
///
/// # Examples
/// ```
/// # use revdel_cli::cli::{Cli, Command, RunCommand, RunSource, run_cli};
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         source: RunSource::Example,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.weights(), [23.0]);
/// # Ok::<(), revdel_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match command.source {
        RunSource::Example => {
            span.record("source", field::display("example"));
            run_example()?
        }
        RunSource::Random(args) => {
            span.record("source", field::display("random"));
            run_random(args)?
        }
    };

    info!(
        source = summary.source.as_str(),
        graphs = summary.report.weights().len(),
        mean_weight = summary.report.mean_weight(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn run_example() -> Result<ExecutionSummary, CliError> {
    let mut graph = example_graph();
    let vertex_count = graph.num_vertices();
    let tree = reverse_delete(&mut graph)?;
    Ok(ExecutionSummary {
        source: "example".to_owned(),
        report: BatchReport::new(vertex_count, vec![tree.total_weight()]),
    })
}

#[instrument(
    name = "cli.run_random",
    err,
    skip(args),
    fields(vertices = args.vertices, graphs = args.graphs, seed = ?args.seed),
)]
pub(super) fn run_random(args: RandomArgs) -> Result<ExecutionSummary, CliError> {
    let RandomArgs {
        vertices,
        graphs,
        seed,
    } = args;
    let mut builder = BatchBuilder::new()
        .with_vertex_count(vertices)
        .with_graph_count(graphs);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let report = builder.build()?.run()?;
    Ok(ExecutionSummary {
        source: "random".to_owned(),
        report,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use revdel_cli::cli::{ExecutionSummary, render_summary};
/// # use revdel_core::BatchReport;
/// let summary = ExecutionSummary {
///     source: "random".into(),
///     report: BatchReport::new(10, vec![4.0, 6.5]),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8");
/// assert_eq!(
///     text,
///     "source: random\nvertices: 10\ngraphs: 2\n0\t4.00\n1\t6.50\nmean weight: 5.25\n",
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = &summary.report;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "vertices: {}", report.vertex_count())?;
    writeln!(writer, "graphs: {}", report.weights().len())?;
    for (index, weight) in report.weights().iter().enumerate() {
        writeln!(writer, "{index}\t{weight:.2}")?;
    }
    writeln!(writer, "mean weight: {:.2}", report.mean_weight())?;
    Ok(())
}
