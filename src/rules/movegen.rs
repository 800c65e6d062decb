//! Pawn move generation.
//!
//! Moves are produced per piece in row-major scan order: single push,
//! double push, capture toward the lower column, capture toward the higher
//! column.

use crate::board::{apply_move, Coord, Move, Position, Side};

/// Legal moves of the pawn on `from` for `side`, appended to `out`.
fn pawn_moves(position: &Position, side: Side, from: Coord, out: &mut Vec<Move>) {
    let fwd = side.forward();

    if let Some(one) = from.offset(fwd, 0) {
        if position.is_empty(one) {
            out.push(Move::new(from, one));
            if from.row == side.home_row() {
                if let Some(two) = one.offset(fwd, 0) {
                    if position.is_empty(two) {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(fwd, dc) {
            if position.side_at(target) == Some(side.opponent()) {
                out.push(Move::new(from, target));
            }
        }
    }
}

/// All legal moves for `side`.
pub fn legal_moves(position: &Position, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(24);
    for from in position.pieces_of(side) {
        pawn_moves(position, side, from, &mut moves);
    }
    moves
}

/// All legal moves for `side`, each paired with the position it reaches.
pub fn successors(position: &Position, side: Side) -> Vec<(Move, Position)> {
    legal_moves(position, side)
        .into_iter()
        .map(|mv| (mv, apply_move(position, mv).position))
        .collect()
}

/// Returns true if `side` has at least one legal move.
pub fn has_legal_move(position: &Position, side: Side) -> bool {
    let mut scratch = Vec::with_capacity(4);
    position.pieces_of(side).any(|from| {
        scratch.clear();
        pawn_moves(position, side, from, &mut scratch);
        !scratch.is_empty()
    })
}
