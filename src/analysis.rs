/*!
# Analysis

Runs every algorithm of the crate on a graph and condenses the outcome into an
[`AnalysisRecord`]: graph size, shortest-path totals, both spanning costs and the
wall-clock time of each phase.

```no_run
use wgraphs::analysis::*;

let config = AnalysisConfig::new().source(1);
for (path, result) in analyze_batch(["a.gr", "b.gr.gz"], &config) {
    match result {
        Ok(analysis) => println!("{}", analysis.record),
        Err(err) => eprintln!("{}: {err}", path.display()),
    }
}
```
*/

use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
    time::Instant,
};

use serde::Serialize;

use crate::{
    algo::*,
    error::*,
    io::{ArcMode, DimacsReader, GraphReader},
    prelude::*,
};

/// Settings shared by all analyses of a batch
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    source: Node,
    reader: DimacsReader,
}

impl Default for AnalysisConfig {
    /// Source `1`, default [`DimacsReader`]
    fn default() -> Self {
        Self {
            source: 1,
            reader: DimacsReader::default(),
        }
    }
}

impl AnalysisConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source node of Dijkstra and Prim
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Replaces the reader used by [`analyze_file`]
    pub fn reader(mut self, reader: DimacsReader) -> Self {
        self.reader = reader;
        self
    }

    /// Sets how arc lines are interpreted by the reader
    pub fn arc_mode(mut self, mode: ArcMode) -> Self {
        self.reader = self.reader.arc_mode(mode);
        self
    }

    /// Rejects files declaring more than `limit` nodes
    pub fn node_limit(mut self, limit: NumNodes) -> Self {
        self.reader = self.reader.node_limit(limit);
        self
    }

    /// Returns the configured source node
    pub fn get_source(&self) -> Node {
        self.source
    }
}

/// Summary of all algorithms run on a single graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    /// Name of the input file (without directories)
    pub file_name: String,
    /// Number of nodes
    pub n: NumNodes,
    /// Number of stored arcs (twice the number of undirected edges)
    pub arc_count: NumArcs,
    /// Time spent loading the graph (`0` if it was not loaded from a file)
    pub read_secs: f64,
    /// Source node of Dijkstra and Prim
    pub source: Node,
    /// Sum of all finite shortest distances from `source`
    pub dijkstra_cost: u128,
    pub dijkstra_secs: f64,
    /// Cost of the minimum spanning forest
    pub kruskal_cost: Cost,
    pub kruskal_secs: f64,
    /// Cost of the minimum spanning tree of the component of `source`
    pub prim_cost: Cost,
    pub prim_secs: f64,
    /// Number of nodes with a finite distance from `source` (itself included)
    pub reachable_count: NumNodes,
    /// `arc_count / n`
    pub density: f64,
    /// Number of connected components of the underlying undirected graph
    pub components: NumNodes,
    /// *true* iff Kruskal and Prim report the same cost
    pub mst_agree: bool,
}

impl Display for AnalysisRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} n={} arcs={} read={:.3}s dijkstra={} ({:.3}s) kruskal={} ({:.3}s) prim={} ({:.3}s) reachable={} density={:.2} components={}",
            self.file_name,
            self.n,
            self.arc_count,
            self.read_secs,
            self.dijkstra_cost,
            self.dijkstra_secs,
            self.kruskal_cost,
            self.kruskal_secs,
            self.prim_cost,
            self.prim_secs,
            self.reachable_count,
            self.density,
            self.components,
        )?;

        if !self.mst_agree {
            write!(f, " [kruskal != prim]")?;
        }
        Ok(())
    }
}

/// Outcome of [`analyze_graph`]
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    pub record: AnalysisRecord,
    pub distances: Distances,
}

/// Outcome of [`analyze_file`]; keeps the loaded graph for further queries
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub record: AnalysisRecord,
    pub graph: Graph,
    pub distances: Distances,
}

/// Runs `f` and returns its result with the elapsed time in seconds
fn timed<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}

/// Runs Dijkstra, Kruskal and Prim on `graph`.
///
/// If the spanning costs differ, a warning with the reachable count and the number of
/// components is logged and the record is marked with `mst_agree = false`.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `source` is not a node of `graph`.
pub fn analyze_graph<G>(name: &str, graph: &G, source: Node) -> Result<GraphAnalysis>
where
    G: WeightedAdjacencyList,
{
    graph.check_node(source)?;

    let (distances, dijkstra_secs) = timed(|| graph.dijkstra(source));
    let distances = distances?;
    let dijkstra_cost = distances.total_distance();
    tracing::debug!(dijkstra_cost, dijkstra_secs, "shortest paths computed");

    let (kruskal_cost, kruskal_secs) = timed(|| graph.kruskal_cost());
    tracing::debug!(kruskal_cost, kruskal_secs, "kruskal finished");

    let (prim_cost, prim_secs) = timed(|| graph.prim_cost(source));
    let prim_cost = prim_cost?;
    tracing::debug!(prim_cost, prim_secs, "prim finished");

    let n = graph.number_of_nodes();
    let reachable_count = distances.reachable_count();
    let components = graph.number_of_connected_components();
    let mst_agree = kruskal_cost == prim_cost;

    if !mst_agree {
        tracing::warn!(
            file = name,
            kruskal_cost,
            prim_cost,
            reachable_count,
            n,
            components,
            "spanning costs differ"
        );
    }

    let record = AnalysisRecord {
        file_name: name.to_string(),
        n,
        arc_count: graph.number_of_arcs(),
        read_secs: 0.0,
        source,
        dijkstra_cost,
        dijkstra_secs,
        kruskal_cost,
        kruskal_secs,
        prim_cost,
        prim_secs,
        reachable_count,
        density: if n == 0 {
            0.0
        } else {
            graph.number_of_arcs() as f64 / n as f64
        },
        components,
        mst_agree,
    };

    Ok(GraphAnalysis { record, distances })
}

/// Loads a `.gr` file (gzip-compressed if it ends in `.gz`) and analyzes it.
///
/// # Errors
/// - [`GraphError::NotFound`] if the file does not exist,
/// - [`GraphError::MalformedInput`] if it is not a valid `.gr` file,
/// - [`GraphError::InvalidVertex`] if the configured source is not a node of the graph.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), source = config.source))]
pub fn analyze_file<P: AsRef<Path>>(path: P, config: &AnalysisConfig) -> Result<FileAnalysis> {
    let path = path.as_ref();

    let (graph, read_secs) = timed(|| -> Result<Graph> { config.reader.try_read_graph_file(path) });
    let mut graph = graph?;
    graph.shrink_to_fit();
    tracing::debug!(
        n = graph.number_of_nodes(),
        arcs = graph.number_of_arcs(),
        read_secs,
        "graph loaded"
    );

    let GraphAnalysis {
        mut record,
        distances,
    } = analyze_graph(&display_name(path), &graph, config.source)?;
    record.read_secs = read_secs;

    Ok(FileAnalysis {
        record,
        graph,
        distances,
    })
}

/// Analyzes every path in order, one graph in memory at a time.
///
/// A failing file is logged and reported in its slot; the remaining files are still processed.
pub fn analyze_batch<'a, I, P>(
    paths: I,
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = (PathBuf, Result<FileAnalysis>)> + 'a
where
    I: IntoIterator<Item = P>,
    I::IntoIter: 'a,
    P: AsRef<Path>,
{
    paths.into_iter().map(move |path| {
        let path = path.as_ref().to_path_buf();
        let result = analyze_file(&path, config);

        if let Err(err) = &result {
            tracing::warn!(path = %path.display(), error = %err, "skipping file");
        }

        (path, result)
    })
}

/// File name used in records; falls back to the full path
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::RandomWeightedGraph, io::DimacsWrite, testing::*};

    #[test]
    fn example_record() {
        let graph = example_graph();
        let GraphAnalysis { record, distances } = analyze_graph("example", &graph, 1).unwrap();

        assert_eq!(record.file_name, "example");
        assert_eq!(record.n, 5);
        assert_eq!(record.arc_count, 14);
        assert_eq!(record.read_secs, 0.0);
        assert_eq!(record.dijkstra_cost, 17);
        assert_eq!(record.kruskal_cost, 8);
        assert_eq!(record.prim_cost, 8);
        assert_eq!(record.reachable_count, 5);
        assert_eq!(record.density, 2.8);
        assert_eq!(record.components, 1);
        assert!(record.mst_agree);
        assert_eq!(distances.get(5), Some(7));
    }

    #[test]
    fn disconnected_graph_disagrees() {
        let graph = Graph::from_undirected_edges(
            6,
            [(1, 2, 1), (2, 3, 2), (4, 5, 3), (5, 6, 4)],
        );

        let record = analyze_graph("split", &graph, 4).unwrap().record;
        assert_eq!(record.kruskal_cost, 10);
        assert_eq!(record.prim_cost, 7);
        assert_eq!(record.reachable_count, 3);
        assert_eq!(record.dijkstra_cost, 3 + 7);
        assert_eq!(record.components, 2);
        assert!(!record.mst_agree);
        assert!(record.to_string().ends_with("[kruskal != prim]"));
    }

    #[test]
    fn invalid_source() {
        let graph = example_graph();
        for source in [0, 6] {
            assert!(matches!(
                analyze_graph("example", &graph, source),
                Err(GraphError::InvalidVertex { vertex, n: 5 }) if vertex == source
            ));
        }
    }

    #[test]
    fn analyze_written_files() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let dir = tempfile::tempdir().unwrap();

        let graph = Graph::connected_gnm(rng, 200, 300, 1..=50);
        let path = dir.path().join("random.gr.gz");
        graph.try_write_dimacs_file(&path).unwrap();

        let analysis = analyze_file(&path, &AnalysisConfig::new().source(7)).unwrap();
        let record = &analysis.record;

        assert_eq!(record.file_name, "random.gr.gz");
        assert_eq!(record.source, 7);
        assert_eq!(record.n, 200);
        assert_eq!(record.arc_count, graph.number_of_arcs());
        assert_eq!(record.reachable_count, 200);
        assert_eq!(record.kruskal_cost, reference_tree_cost(&graph, 1));
        assert!(record.mst_agree);
        assert!(record.read_secs >= 0.0);
        assert_eq!(analysis.graph.number_of_arcs(), graph.number_of_arcs());
        assert_eq!(analysis.distances.total_distance(), record.dijkstra_cost);
    }

    #[test]
    fn directed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.gr");
        std::fs::write(&path, "p sp 3 2\na 1 2 5\na 2 3 1\n").unwrap();

        let config = AnalysisConfig::new().source(2).arc_mode(ArcMode::Directed);
        let record = analyze_file(&path, &config).unwrap().record;

        assert_eq!(record.arc_count, 2);
        assert_eq!(record.reachable_count, 2);
        assert_eq!(record.dijkstra_cost, 1);
        assert_eq!(record.kruskal_cost, 6);
        assert_eq!(record.prim_cost, 1);
        assert_eq!(record.components, 1);
        assert!(!record.mst_agree);
    }

    #[test]
    fn oversized_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();

        let huge = dir.path().join("huge.gr");
        std::fs::write(&huge, "p sp 4000000000 0\n").unwrap();
        let good = dir.path().join("good.gr");
        example_graph().try_write_dimacs_file(&good).unwrap();

        let config = AnalysisConfig::new().node_limit(1000);
        let results = analyze_batch([&huge, &good], &config).collect_vec();

        assert!(matches!(results[0].1, Err(GraphError::MalformedInput { line: 1, .. })));
        assert_eq!(results[1].1.as_ref().unwrap().record.kruskal_cost, 8);
    }

    #[test]
    fn batch_skips_failing_files() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.gr");
        example_graph().try_write_dimacs_file(&good).unwrap();
        let malformed = dir.path().join("malformed.gr");
        std::fs::write(&malformed, "a 1 2 3\n").unwrap();
        let missing = dir.path().join("missing.gr");

        let config = AnalysisConfig::default();
        let results = analyze_batch([&missing, &malformed, &good, &good], &config).collect_vec();

        assert_eq!(results.len(), 4);
        assert!(matches!(results[0].1, Err(GraphError::NotFound { .. })));
        assert!(matches!(results[1].1, Err(GraphError::MalformedInput { line: 1, .. })));
        assert_eq!(results[0].0, missing);

        for (path, result) in &results[2..] {
            assert_eq!(path, &good);
            let record = &result.as_ref().unwrap().record;
            assert_eq!((record.kruskal_cost, record.prim_cost), (8, 8));
        }
    }

    #[test]
    fn record_serializes_to_json() {
        let record = analyze_graph("example", &example_graph(), 1).unwrap().record;
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["file_name"], "example");
        assert_eq!(json["n"], 5);
        assert_eq!(json["dijkstra_cost"], 17);
        assert_eq!(json["kruskal_cost"], 8);
        assert_eq!(json["mst_agree"], true);
    }
}
