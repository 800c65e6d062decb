//! Game rules.
//!
//! The search and evaluator consume rules only through the two traits
//! below. `PawnRules` is the standard implementation: pawn pushes, double
//! pushes from the home row, diagonal captures, and a win for the first
//! pawn to reach the far edge.

pub mod movegen;
pub mod winner;

use crate::board::{History, Move, Position, Side};

pub use movegen::{legal_moves, successors};
pub use winner::pawn_winner;

/// Enumerates legal moves together with the positions they reach.
pub trait MoveGenerator {
    /// Every legal move of `side` in `position`, captures included, each
    /// paired with the resulting position. Order must be deterministic.
    fn successors(&self, position: &Position, side: Side) -> Vec<(Move, Position)>;
}

/// Decides whether a game has ended.
pub trait WinCondition {
    /// Returns the winner of `position`, if the game is over.
    ///
    /// `mover` is the side that produced `position`; the side to move next
    /// is `mover.opponent()`.
    fn winner(&self, position: &Position, history: &History, mover: Side) -> Option<Side>;
}

/// Standard pawn-chess rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnRules;

impl MoveGenerator for PawnRules {
    fn successors(&self, position: &Position, side: Side) -> Vec<(Move, Position)> {
        successors(position, side)
    }
}

impl WinCondition for PawnRules {
    fn winner(&self, position: &Position, _history: &History, mover: Side) -> Option<Side> {
        pawn_winner(position, mover)
    }
}
