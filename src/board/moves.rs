//! Moves and the apply/undo adapter.
//!
//! The search never mutates a position: applying a move yields a new
//! `Position` together with any captured piece, and undoing rebuilds the
//! parent from the child by moving back and reinstating the capture.

use std::fmt;

use super::coord::Coord;
use super::position::Position;
use super::side::Piece;

/// A move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub position: Position,
    pub captured: Option<Piece>,
}

/// Applies `mv` to `position`, removing an opposing piece on the destination first.
pub fn apply_move(position: &Position, mv: Move) -> Applied {
    let mover = position.side_at(mv.from);
    let captured = match position.piece_at(mv.to) {
        Some(p) if Some(p.side) != mover => Some(p),
        _ => None,
    };
    let base = if captured.is_some() {
        position.remove(mv.to)
    } else {
        *position
    };
    Applied {
        position: base.move_piece(mv.from, mv.to),
        captured,
    }
}

/// Reverses [`apply_move`]: moves the piece back and reinstates the capture.
pub fn undo_move(position: &Position, mv: Move, captured: Option<Piece>) -> Position {
    let back = position.move_piece(mv.to, mv.from);
    match captured {
        Some(piece) => back.place(mv.to, piece),
        None => back,
    }
}
