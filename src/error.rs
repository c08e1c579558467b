//! Error types for loading and analyzing graphs
//!
//! Every fallible operation of the crate reports one of the variants of [`GraphError`]
//! to its immediate caller. Nothing is retried or swallowed inside the library; batch
//! drivers decide whether to skip a failing input (see [`crate::analysis::analyze_batch`]).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised by the graph loader and the algorithms
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input file does not exist
    #[error("graph file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input violates the `.gr` grammar
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A vertex id outside `1..=n` was passed to an algorithm or an edge insertion
    #[error("invalid vertex {vertex}: expected a value in 1..={n}")]
    InvalidVertex { vertex: Node, n: NumNodes },

    /// The graph does not fit into memory or its arc count overflows `NumArcs`
    #[error("graph too large: {reason}")]
    TooLarge { reason: String },

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Classifies an error raised while opening `path`
    pub(crate) fn from_open(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => GraphError::NotFound {
                path: path.to_path_buf(),
            },
            _ => GraphError::Io(err),
        }
    }

    /// Classifies an error raised while reading line `line` of an opened input.
    ///
    /// Undecodable bytes (broken gzip stream, invalid UTF-8) are a property of
    /// the input, not of the environment.
    pub(crate) fn from_read(line: usize, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
                GraphError::MalformedInput {
                    line,
                    reason: err.to_string(),
                }
            }
            _ => GraphError::Io(err),
        }
    }

    /// Returns *true* for [`GraphError::MalformedInput`]
    pub fn is_malformed(&self) -> bool {
        matches!(self, GraphError::MalformedInput { .. })
    }
}

/// Result type alias for wgraphs operations
pub type Result<T> = std::result::Result<T, GraphError>;
