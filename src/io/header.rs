//! # Headers
//!
//! A header(-line) for a graph file is a series of tokens separated by whitespace that
//! defines the size of the graph and possibly the problem the graph was created for.
//!
//! Classic matching inputs simply start with
//!     "{n} {m}"
//! while PACE-style instances use
//!     "p {problem} {n} {m}"

use itertools::Itertools;
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
    /// Parse number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

impl HeaderToken {
    /// When writing a header, this is the representation for HeaderToken::Any
    fn any_string() -> String {
        "0".to_string()
    }
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format.
/// The following defines the PACE-style format for matching instances:
/// ```
/// use ublossom::io::*;
///
/// let format = HeaderFormat::new()
///     .str("p").str("mm").number_of_nodes().number_of_edges().end();
/// assert_eq!(format, Header::new_problem("mm"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of edges was set
    const EDGES_SET: bool = false,
    // Set to *true* if `NODES_SET = true & EDGES_SET = true` and
    // the last entry matches `HeaderToken::End | HeaderToken::Rest`
    const END: bool = false,
>(SmallVec<[HeaderToken; 6]>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for HeaderFormat<true, true, true> {
    /// The bare `"{n} {m}"` header of classic matching inputs
    fn default() -> Self {
        Self(smallvec![
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }
}

impl Header {
    /// Creates a new HeaderFormat in the Pace-Style which is always valid
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// Tries to parse a header line and extract the number of nodes and edges.
    ///
    /// # Errors
    /// Returns an `InvalidData`-error if the line does not match the format.
    pub fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut number_of_nodes = 0;
        let mut number_of_edges = 0;

        let mut parts = line.split_whitespace();

        for token in &self.0 {
            match token {
                HeaderToken::Any => {
                    raise_error_unless!(
                        parts.next().is_some(),
                        ErrorKind::InvalidData,
                        "Header is shorter than expected"
                    );
                }
                HeaderToken::Str(p) => {
                    raise_error_unless!(
                        parts.next() == Some(p.as_str()),
                        ErrorKind::InvalidData,
                        format!("Invalid header found: expected `{p}`")
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
                }
                HeaderToken::NumEdges => {
                    number_of_edges = parse_next_value!(parts, "Header>Number of edges");
                }
                HeaderToken::End => {
                    raise_error_unless!(
                        parts.next().is_none(),
                        ErrorKind::InvalidData,
                        "Header is longer than expected"
                    );
                }
                // We don't care about the rest
                HeaderToken::Rest => break,
            }
        }

        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header_str = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some(HeaderToken::any_string()),
                HeaderToken::Str(s) => Some(s.to_string()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header_str}")?;

        Ok(())
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(smallvec![])
    }
}

impl<const NODES_SET: bool, const EDGES_SET: bool> HeaderFormat<NODES_SET, EDGES_SET, false> {
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

impl<const EDGES_SET: bool> HeaderFormat<false, EDGES_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, EDGES_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumEdges);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}
