//! # Headers
//!
//! The problem line of a graph file is defined by a series of whitespace-separated tokens
//! declaring the size of the graph and the problem it was created for.
//!
//! For example, the DIMACS shortest-path challenge defines its problem line as
//!     "p sp {n} {m}"
//! where n is the number of nodes and m the number of arcs in the graph.

use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of arcs
    NumArcs,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format. The default is the DIMACS format:
/// ```
/// use wgraphs::io::*;
///
/// let format = HeaderFormat::new()
///     .str("p").str("sp").number_of_nodes().number_of_arcs().end();
/// assert_eq!(format, Header::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of arcs was set
    const ARCS_SET: bool = false,
    // Set to *true* once the format was closed by `HeaderToken::End | HeaderToken::Rest`
    const END: bool = false,
>(SmallVec<[HeaderToken; 6]>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for Header {
    /// `p sp {n} {m}` as used by the DIMACS shortest-path challenge
    fn default() -> Self {
        Self::new_problem("sp")
    }
}

impl Header {
    /// Creates a DIMACS-style header `p {problem} {n} {m}`
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumArcs,
            HeaderToken::End,
        ])
    }

    /// The token that identifies a problem line, if the format starts with a fixed string
    pub fn identifier(&self) -> Option<&str> {
        match self.0.first() {
            Some(HeaderToken::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Parses a header line and extracts the number of nodes and arcs.
    ///
    /// `line_number` is only used for error reporting.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if a token does not match the format,
    /// a number cannot be parsed, or the line is shorter/longer than the format.
    pub fn parse_header(&self, line: &str, line_number: usize) -> Result<(NumNodes, u64)> {
        let mut number_of_nodes = None;
        let mut number_of_arcs = None;

        let mut parts = line.split_whitespace();

        for token in &self.0 {
            match token {
                HeaderToken::Any => {
                    raise_error_unless!(
                        parts.next().is_some(),
                        line_number,
                        "problem line is shorter than expected"
                    );
                }
                HeaderToken::Str(expected) => {
                    let entry = parts.next();
                    raise_error_unless!(
                        entry == Some(expected.as_str()),
                        line_number,
                        "expected `{}` in problem line, found `{}`",
                        expected,
                        entry.unwrap_or_default()
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = Some(parse_next_value!(parts, line_number, "number of nodes"));
                }
                HeaderToken::NumArcs => {
                    number_of_arcs = Some(parse_next_value!(parts, line_number, "number of arcs"));
                }
                HeaderToken::End => {
                    raise_error_unless!(
                        parts.next().is_none(),
                        line_number,
                        "problem line is longer than expected"
                    );
                }
                HeaderToken::Rest => break,
            }
        }

        match (number_of_nodes, number_of_arcs) {
            (Some(n), Some(m)) => Ok((n, m)),
            _ => Err(malformed!(line_number, "header format lacks node or arc count")),
        }
    }

    /// Writes the header for a graph with `n` nodes and `m` arcs
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: u64) -> Result<()> {
        let tokens: Vec<String> = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some("0".to_string()),
                HeaderToken::Str(s) => Some(s.clone()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumArcs => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .collect();
        writeln!(writer, "{}", tokens.join(" "))?;

        Ok(())
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(smallvec![])
    }
}

impl<const NODES_SET: bool, const ARCS_SET: bool> HeaderFormat<NODES_SET, ARCS_SET, false> {
    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }
}

impl<const ARCS_SET: bool> HeaderFormat<false, ARCS_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, ARCS_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of arcs token onto the stack
    pub fn number_of_arcs(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumArcs);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> Header {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> Header {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}
