//! wgraphs - shortest paths and spanning trees of DIMACS road networks
//!
//! Analyzes every given `.gr` file (optionally gzip-compressed) and prints one record per file.
//! Files that cannot be analyzed are reported and skipped.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use wgraphs::{
    GraphError, Node, NumNodes,
    analysis::{AnalysisConfig, analyze_batch},
    io::ArcMode,
    logging,
};

/// Output format of the analysis records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One readable line per file
    Human,
    /// One JSON object per line
    Json,
}

/// Dijkstra, Kruskal and Prim on DIMACS `.gr` graphs
#[derive(Parser, Debug)]
#[command(name = "wgraphs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph files to analyze (`.gz` files are decompressed on the fly)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Source node of Dijkstra and Prim
    #[arg(long, short, default_value_t = 1)]
    source: Node,

    /// Insert every arc line as a single directed arc instead of an undirected edge
    #[arg(long)]
    directed: bool,

    /// Skip files declaring more nodes than this
    #[arg(long)]
    max_nodes: Option<NumNodes>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Do not report failing files
    #[arg(long, short)]
    quiet: bool,

    /// Log the result and duration of every phase
    #[arg(long, short)]
    verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `wgraphs::io=trace`)
    #[arg(long, env = "WGRAPHS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// An explicit level wins; `--quiet` hides the warnings of skipped files
    fn effective_log_level(&self) -> Option<&str> {
        self.log_level
            .as_deref()
            .or(self.quiet.then_some("error"))
    }
}

/// Result line of a file that could not be analyzed, `None` if it should not be printed.
/// Human output relies on the `warn` event of the batch for failures.
fn failure_line(path: &Path, err: &GraphError, format: OutputFormat, quiet: bool) -> Option<String> {
    match format {
        OutputFormat::Json if !quiet => Some(
            serde_json::json!({ "file": path.display().to_string(), "error": err.to_string() })
                .to_string(),
        ),
        _ => None,
    }
}

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.effective_log_level(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut config = AnalysisConfig::new().source(cli.source).arc_mode(if cli.directed {
        ArcMode::Directed
    } else {
        ArcMode::Undirected
    });
    if let Some(limit) = cli.max_nodes {
        config = config.node_limit(limit);
    }

    let mut failures = 0usize;
    for (path, result) in analyze_batch(&cli.files, &config) {
        match (result, cli.format) {
            (Ok(analysis), OutputFormat::Human) => println!("{}", analysis.record),
            (Ok(analysis), OutputFormat::Json) => match serde_json::to_string(&analysis.record) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    failures += 1;
                    eprintln!("error: cannot serialize record of {}: {}", path.display(), e);
                }
            },
            (Err(e), format) => {
                failures += 1;
                if let Some(line) = failure_line(&path, &e, format, cli.quiet) {
                    println!("{line}");
                }
            }
        }
    }

    tracing::debug!(
        files = cli.files.len(),
        failures,
        elapsed = ?start.elapsed(),
        "batch finished"
    );

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
