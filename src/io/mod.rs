/*!
# IO

Ingestion of matching instances and reporting of computed matchings.

## Input

Instances are given as an **EdgeList**: a header line containing the number of nodes and
edges followed by one `u v` line per edge (see [`EdgeListReader`]). The header is described
by a [`Header`] which defaults to the bare `"{n} {m}"` form.

All validation of the input happens here: the matching algorithms assume a well-formed graph
and do not check indices themselves.

## Output

[`MatchingWriter`] writes the cardinality of a matching, optionally followed by its pairs.

Errors are reported as [`std::io::Error`] with kind `InvalidData` for malformed files.
*/

pub mod edge_list;
pub mod header;
pub mod matching;

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;
pub use matching::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
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
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{next}` found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

pub(crate) use io_error;
pub(crate) use parse_next_value;
pub(crate) use raise_error_unless;
