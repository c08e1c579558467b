/*!
# IO

Utilities for reading and writing weighted graphs in the DIMACS `.gr` format.

```text
c <comment text>
p sp <n> <m>
a <u> <v> <w>
```

## Compression

Files whose name ends in `.gz` are transparently decompressed when reading and compressed
when writing. All other files are read and written as plain text.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format
  ([`DimacsReader`], [`DimacsWriter`]).
- [`load_graph`] reads a file with the default [`DimacsReader`].

Input files and decoders only live for the duration of a single read or write call.
*/

pub mod dimacs;
pub mod header;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use flate2::{Compression as GzLevel, read::MultiGzDecoder, write::GzEncoder};

use crate::{error::*, prelude::*};

pub use dimacs::*;
pub use header::*;

/// Compression of a graph file, determined by its extension
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Plain text
    None,
    /// gzip (`.gz`)
    Gzip,
}

impl Compression {
    /// Detects the compression from the file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Compression::Gzip,
            _ => Compression::None,
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from (possibly compressed) files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Files ending in `.gz` are decompressed on the fly.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if the file does not exist and any error of
    /// [`GraphReader::try_read_graph`] if its contents are invalid.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(open_lines(path)?)
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Files ending in `.gz` are gzip-compressed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path)?;

        match Compression::from_path(path) {
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(BufWriter::new(file), GzLevel::default());
                self.try_write_graph(graph, &mut encoder)?;
                encoder.finish()?.flush()?;
            }
            Compression::None => {
                let mut writer = BufWriter::new(file);
                self.try_write_graph(graph, &mut writer)?;
                writer.flush()?;
            }
        }

        Ok(())
    }
}

/// Opens a file for line-oriented reading, decompressing `.gz` files
///
/// # Errors
/// Returns [`GraphError::NotFound`] if the file does not exist.
pub fn open_lines<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| GraphError::from_open(path, err))?;

    Ok(match Compression::from_path(path) {
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Compression::None => Box::new(BufReader::new(file)),
    })
}

/// Loads a `.gr` file (optionally gzip-compressed) with the default [`DimacsReader`]:
/// every arc line is inserted as an undirected edge.
///
/// # Errors
/// - [`GraphError::NotFound`] if `path` does not exist,
/// - [`GraphError::MalformedInput`] if the contents violate the format.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let mut graph: Graph = DimacsReader::default().try_read_graph_file(path)?;
    graph.shrink_to_fit();
    Ok(graph)
}

/// Creates a [`GraphError::MalformedInput`] for a given line
macro_rules! malformed {
    ($line: expr, $($info: tt)+) => {
        $crate::error::GraphError::MalformedInput {
            line: $line,
            reason: format!($($info)+),
        }
    };
}

/// Shorthand for returning `Err(GraphError::MalformedInput)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($info: tt)+) => {
        if !($cond) {
            return Err(malformed!($line, $($info)+));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $line: expr, $name: expr) => {{
        let token = $iterator
            .next()
            .ok_or_else(|| malformed!($line, "premature end of line when parsing {}", $name))?;

        token
            .parse()
            .map_err(|_| malformed!($line, "cannot parse {} from `{}`", $name, token))?
    }};
}

use malformed;
use parse_next_value;
use raise_error_unless;
