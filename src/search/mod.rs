//! Game-tree search.
//!
//! Depth-limited alpha-beta over the two-player pawn game, with the best
//! root move returned alongside the score.

pub mod alphabeta;

use std::io::Write;

pub use alphabeta::{search, search_window, Rules, SearchContext, SearchResult};

/// Search statistics emitted via `info` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub score: i32,
    pub elapsed_ms: u64,
}

impl SearchInfo {
    /// Writes the `info` line for this search.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "info depth {} nodes {} score {} time {}",
            self.depth, self.nodes, self.score, self.elapsed_ms
        )
    }
}
