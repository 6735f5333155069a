//! Reads an undirected graph as an edge list and prints the size of a maximum matching.
//!
//! ```text
//! $ printf '5 5\n1 2\n2 3\n3 4\n4 5\n5 1\n' | max-matching --pairs
//! 2
//! 1 2
//! 3 4
//! ```

use std::{
    io::{Result, stdin, stdout},
    path::PathBuf,
};

use clap::Parser;
use log::info;
use ublossom::{algo::*, io::*, prelude::*};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Edge list to read; reads from stdin if omitted
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// Nodes in the input (and output) are numbered from 0 instead of 1
    #[clap(short, long)]
    zero_based: bool,

    /// Seed the search with a greedy maximal matching
    #[clap(short, long)]
    greedy_init: bool,

    /// Print every matched pair after the cardinality
    #[clap(short, long)]
    pairs: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader = EdgeListReader::new().zero_based(args.zero_based);
    let graph: AdjArrayUndir = match &args.input {
        Some(path) => reader.try_read_graph_file(path)?,
        None => reader.try_read_graph(stdin().lock())?,
    };
    info!(
        "read graph with {} nodes and {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let mut matcher = BlossomMatcher::new(&graph).greedy_init(args.greedy_init);
    matcher.run();

    MatchingWriter::new()
        .pairs(args.pairs)
        .zero_based(args.zero_based)
        .try_write_matching(matcher.matching(), stdout().lock())
}
