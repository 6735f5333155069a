//! # EdgeList
//!
//! The EdgeList-Format consists of a header (see [`Header`]), followed by `m` non-comment-lines
//! `u v` each representing the undirected edge `{u, v}`. Nodes are 1-based by default, i.e.
//! the line `1 2` denotes `Edge(0, 1)`.
//!
//! ```
//! use ublossom::{prelude::*, io::*};
//!
//! let input = "c a path on three nodes\n3 2\n1 2\n2 3\n";
//! let graph: AdjArrayUndir = EdgeListReader::new().try_read_graph(input.as_bytes()).unwrap();
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert_eq!(graph.ordered_edges(true).collect::<Vec<_>>(), vec![Edge(0, 1), Edge(1, 2)]);
//! ```

use std::io::Lines;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Index of the first node in the file (usually `1`)
    index_base: Node,
}

impl Default for EdgeListReader {
    /// Bare `"{n} {m}"` header, `c`-comments and 1-based nodes
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
            index_base: 1,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// If *true*, nodes in the file are numbered `0..n` instead of `1..=n`
    pub fn zero_based(mut self, zero_based: bool) -> EdgeListReader {
        self.index_base = if zero_based { 0 } else { 1 };
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(
            reader,
            &self.header,
            &self.comment_identifier,
            self.index_base,
        )?;

        let edges = edges_reader.by_ref().collect::<Result<Vec<Edge>>>()?;
        raise_error_unless!(
            edges.len() == edges_reader.number_of_edges() as usize,
            ErrorKind::InvalidData,
            format!(
                "Header announced {} edges but {} were found",
                edges_reader.number_of_edges(),
                edges.len()
            )
        );

        Ok(G::from_edges(edges_reader.number_of_nodes(), edges))
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Streams validated, 0-based edges from an EdgeList-input after its header was consumed
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the line read last (1-based) for error messages
    line_number: usize,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
    /// Index of the first node in the input
    index_base: Node,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(
        reader: R,
        header_format: &Header,
        comment_identifier: &'a str,
        index_base: Node,
    ) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
            index_base,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        (
            edge_list_reader.number_of_nodes,
            edge_list_reader.number_of_edges,
        ) = header_format.parse_header(&header)?;

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Line {}: too many tokens in edge line", self.line_number)
        );

        let (Some(u), Some(v)) = (self.to_node(from), self.to_node(dest)) else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!(
                    "Line {}: edge ({from}, {dest}) has an endpoint outside of the {} nodes \
                     starting at {}",
                    self.line_number, self.number_of_nodes, self.index_base
                )
            ));
        };
        raise_error_unless!(
            u != v,
            ErrorKind::InvalidData,
            format!("Line {}: self-loop at node {from}", self.line_number)
        );

        Ok(Some(Edge(u, v)))
    }

    /// Maps a node of the input to `0..n` or returns `None` if it is out of range
    fn to_node(&self, x: Node) -> Option<Node> {
        x.checked_sub(self.index_base)
            .filter(|&u| u < self.number_of_nodes)
    }
}

impl<'a, R: BufRead> Iterator for EdgeListEdgesReader<'a, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}
