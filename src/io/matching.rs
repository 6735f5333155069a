//! # Matching output
//!
//! A matching is reported as a single line holding its cardinality, optionally followed by one
//! `u v` line per matched pair using the same index base as the [`EdgeListReader`].

use super::*;

/// A writer for matchings
#[derive(Debug, Clone)]
pub struct MatchingWriter {
    /// Whether to write the pairs after the cardinality
    write_pairs: bool,
    /// Index of the first node in the output
    index_base: Node,
}

impl Default for MatchingWriter {
    /// Only the cardinality, 1-based pairs if enabled
    fn default() -> Self {
        Self {
            write_pairs: false,
            index_base: 1,
        }
    }
}

impl MatchingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, every matched pair is written on its own line after the cardinality
    pub fn pairs(mut self, write_pairs: bool) -> Self {
        self.write_pairs = write_pairs;
        self
    }

    /// If *true*, nodes are written as `0..n` instead of `1..=n`
    pub fn zero_based(mut self, zero_based: bool) -> Self {
        self.index_base = if zero_based { 0 } else { 1 };
        self
    }

    /// Writes the matching given by its pairs to the writer
    pub fn try_write_matching<W, I>(&self, pairs: I, mut writer: W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (Node, Node)>,
        I::IntoIter: ExactSizeIterator,
    {
        let pairs = pairs.into_iter();
        writeln!(writer, "{}", pairs.len())?;

        if self.write_pairs {
            for (u, v) in pairs {
                writeln!(writer, "{} {}", u + self.index_base, v + self.index_base)?;
            }
        }

        writer.flush()
    }
}
