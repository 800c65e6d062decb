//! Move history.
//!
//! An append-only record of the moves played so far and the positions they
//! produced. Owned by the host; the search and evaluator only read it.

use super::moves::Move;
use super::position::Position;
use super::side::Side;

/// A single played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub side: Side,
    pub mv: Move,
    pub position: Position,
}

/// Append-only game record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Records that `side` played `mv`, reaching `position`.
    pub fn push(&mut self, side: Side, mv: Move, position: Position) {
        self.entries.push(HistoryEntry { side, mv, position });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Moves in play order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().map(|e| e.mv)
    }
}
