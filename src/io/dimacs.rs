//! # DIMACS
//!
//! The `.gr` format of the 9th DIMACS Implementation Challenge consists of
//! - comment lines starting with `c`,
//! - exactly one problem line `p sp {n} {m}` preceding all arc lines,
//! - arc lines `a {u} {v} {w}` with 1-based endpoints and a non-negative integer weight.
//!
//! Blank lines are skipped, every other line is an error.
//! By default, each arc line is inserted as an **undirected** edge (two arcs), see [`ArcMode`].

use std::{
    io::{BufRead, Write},
    path::Path,
};

use super::*;

/// How arc lines `a u v w` are inserted into the graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ArcMode {
    /// Insert `u -> v` and `v -> u`
    #[default]
    Undirected,
    /// Insert `u -> v` only
    Directed,
}

/// A GraphReader for the DIMACS `.gr` format
#[derive(Debug, Clone)]
pub struct DimacsReader {
    /// Format of the problem line
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// First token of arc lines
    arc_identifier: String,
    /// Interpretation of arc lines
    arc_mode: ArcMode,
    /// Largest number of nodes a problem line may declare
    node_limit: Option<NumNodes>,
}

impl Default for DimacsReader {
    /// `p sp n m` header, `c` comments, `a` arcs inserted as undirected edges
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
            arc_identifier: "a".to_string(),
            arc_mode: ArcMode::default(),
            node_limit: None,
        }
    }
}

impl DimacsReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the arc identifier
    pub fn arc_identifier<S: Into<String>>(mut self, a: S) -> Self {
        self.arc_identifier = a.into();
        self
    }

    /// Updates how arc lines are inserted
    pub fn arc_mode(mut self, mode: ArcMode) -> Self {
        self.arc_mode = mode;
        self
    }

    /// Rejects problem lines declaring more than `limit` nodes before anything is allocated
    pub fn node_limit(mut self, limit: NumNodes) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns the configured arc mode
    pub fn get_arc_mode(&self) -> ArcMode {
        self.arc_mode
    }
}

impl<G> GraphReader<G> for DimacsReader
where
    G: GraphNew + WeightedEdgeEditing,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut arcs = DimacsArcsReader::try_new(reader, self)?;
        let mut graph = G::try_new(arcs.number_of_nodes())?;

        let mut arc_lines: u64 = 0;
        while let Some(WeightedEdge(u, v, w)) = arcs.next_arc()? {
            match self.arc_mode {
                ArcMode::Undirected => graph.try_add_undirected_edge(u, v, w)?,
                ArcMode::Directed => graph.try_add_directed_edge(u, v, w)?,
            }
            arc_lines += 1;
        }

        if arc_lines != arcs.number_of_arcs() {
            tracing::debug!(
                declared = arcs.number_of_arcs(),
                read = arc_lines,
                "number of arc lines differs from problem line"
            );
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from the DIMACS format.
/// Used as shorthand for default DimacsReader settings
pub trait DimacsRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given (possibly gzip-compressed) file
    fn try_read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<G> DimacsRead for G
where
    G: GraphNew + WeightedEdgeEditing,
{
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self> {
        DimacsReader::default().try_read_graph(reader)
    }

    fn try_read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DimacsReader::default().try_read_graph_file(path)
    }
}

/// Streaming reader over the arc lines of a DIMACS input.
///
/// The problem line is parsed on construction; arcs are then produced one line at a time.
pub struct DimacsArcsReader<'a, R> {
    reader: R,
    /// Current line
    buffer: String,
    /// 1-based number of the line in `buffer`
    line_number: usize,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of arcs declared in header
    number_of_arcs: u64,
    format: &'a DimacsReader,
    failed: bool,
}

impl<'a, R: BufRead> DimacsArcsReader<'a, R> {
    /// Creates a new reader and parses the first non-comment-line as the problem line
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if there is no problem line, if an arc line
    /// precedes it, or if it does not match the header format.
    pub fn try_new(reader: R, format: &'a DimacsReader) -> Result<Self> {
        let mut arcs_reader = Self {
            reader,
            buffer: String::new(),
            line_number: 0,
            number_of_nodes: 0,
            number_of_arcs: 0,
            format,
            failed: false,
        };

        raise_error_unless!(
            arcs_reader.next_content_line()?,
            arcs_reader.line_number + 1,
            "missing problem line"
        );

        let line = arcs_reader.buffer.as_str();
        let first = line.split_whitespace().next().unwrap_or_default();
        raise_error_unless!(
            first != format.arc_identifier,
            arcs_reader.line_number,
            "arc line before problem line"
        );
        raise_error_unless!(
            format.header.identifier().is_none_or(|id| id == first),
            arcs_reader.line_number,
            "expected problem line, found line starting with `{}`",
            first
        );

        let (n, m) = format.header.parse_header(line, arcs_reader.line_number)?;
        if let Some(limit) = format.node_limit {
            raise_error_unless!(
                n <= limit,
                arcs_reader.line_number,
                "problem line declares {} nodes, at most {} are allowed",
                n,
                limit
            );
        }
        tracing::debug!(n, m, "parsed problem line");

        arcs_reader.number_of_nodes = n;
        arcs_reader.number_of_arcs = m;
        Ok(arcs_reader)
    }

    /// Returns the number of nodes parsed from the problem line
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the number of arcs declared in the problem line
    pub fn number_of_arcs(&self) -> u64 {
        self.number_of_arcs
    }

    /// Reads the next line that is neither blank nor a comment into `buffer`.
    /// Returns *false* at the end of the input.
    fn next_content_line(&mut self) -> Result<bool> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .map_err(|err| GraphError::from_read(self.line_number + 1, err))?;

            if read == 0 {
                return Ok(false);
            }
            self.line_number += 1;

            if self.buffer.starts_with(self.format.comment_identifier.as_str())
                || self.buffer.trim().is_empty()
            {
                continue;
            }

            return Ok(true);
        }
    }

    /// Tries to parse an arc from the next non-comment-line
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if the line is not a valid arc line.
    pub fn next_arc(&mut self) -> Result<Option<WeightedEdge>> {
        if !self.next_content_line()? {
            return Ok(None);
        }

        let line_number = self.line_number;
        let n = self.number_of_nodes;
        let mut parts = self.buffer.split_whitespace();
        let kind = parts.next().unwrap_or_default();

        if kind != self.format.arc_identifier {
            return Err(match self.format.header.identifier() {
                Some(id) if id == kind => malformed!(line_number, "duplicate problem line"),
                _ => malformed!(line_number, "unexpected line starting with `{}`", kind),
            });
        }

        let u: Node = parse_next_value!(parts, line_number, "source node");
        let v: Node = parse_next_value!(parts, line_number, "target node");
        let w: Weight = parse_next_value!(parts, line_number, "arc weight");
        raise_error_unless!(
            parts.next().is_none(),
            line_number,
            "arc line has more than four tokens"
        );

        for node in [u, v] {
            raise_error_unless!(
                node_range(n).contains(&node),
                line_number,
                "arc endpoint {} outside of 1..={}",
                node,
                n
            );
        }

        Ok(Some(WeightedEdge(u, v, w)))
    }
}

impl<'a, R: BufRead> Iterator for DimacsArcsReader<'a, R> {
    type Item = Result<WeightedEdge>;

    /// Yields every arc line; stops after the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let next = self.next_arc().transpose();
        self.failed = matches!(next, Some(Err(_)));
        next
    }
}

/// A writer for the DIMACS `.gr` format
#[derive(Debug, Clone, Default)]
pub struct DimacsWriter {
    /// HeaderFormat
    header: Header,
    /// Whether every undirected edge is written once or every arc is written
    arc_mode: ArcMode,
    /// Comment lines written before the problem line
    comments: Vec<String>,
}

impl DimacsWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Updates how arcs are written.
    ///
    /// With [`ArcMode::Undirected`] (default), every undirected edge of a symmetric graph is
    /// written as one arc line. With [`ArcMode::Directed`], every stored arc is written.
    pub fn arc_mode(mut self, mode: ArcMode) -> Self {
        self.arc_mode = mode;
        self
    }

    /// Adds a comment line
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comments.push(comment.into());
        self
    }
}

impl<G: WeightedAdjacencyList> GraphWriter<G> for DimacsWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for comment in &self.comments {
            writeln!(writer, "c {comment}")?;
        }

        match self.arc_mode {
            ArcMode::Undirected => {
                if !graph.is_symmetric() {
                    return Err(GraphError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "graph contains directed arcs and cannot be written as undirected edges",
                    )));
                }

                let m = graph.undirected_edges().count() as u64;
                self.header
                    .write_header(&mut writer, graph.number_of_nodes(), m)?;

                for WeightedEdge(u, v, w) in graph.undirected_edges() {
                    writeln!(writer, "a {u} {v} {w}")?;
                }
            }
            ArcMode::Directed => {
                self.header.write_header(
                    &mut writer,
                    graph.number_of_nodes(),
                    graph.number_of_arcs() as u64,
                )?;

                for WeightedEdge(u, v, w) in graph.arcs() {
                    writeln!(writer, "a {u} {v} {w}")?;
                }
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the DIMACS format.
/// Shorthand for default settings.
pub trait DimacsWrite {
    /// Tries to write the graph to a writer
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file (gzip-compressed if the name ends in `.gz`)
    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G: WeightedAdjacencyList> DimacsWrite for G {
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()> {
        DimacsWriter::default().try_write_graph(self, writer)
    }

    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        DimacsWriter::default().try_write_graph_file(self, path)
    }
}
