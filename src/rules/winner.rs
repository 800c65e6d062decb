//! Win detection for pawn chess.

use crate::board::{Position, Side, ALL_SIDES};

use super::movegen::has_legal_move;

/// Returns the winner of `position` after `mover` has moved, if any.
///
/// In order: a pawn on its promotion row wins for its side (the mover is
/// checked first, since only the mover can have just arrived there); a side
/// with no pieces left loses; a side to move without a legal move loses.
pub fn pawn_winner(position: &Position, mover: Side) -> Option<Side> {
    for side in [mover, mover.opponent()] {
        if position
            .pieces_of(side)
            .any(|at| at.row == side.promotion_row())
        {
            return Some(side);
        }
    }

    for side in ALL_SIDES {
        if position.count(side) == 0 {
            return Some(side.opponent());
        }
    }

    let to_move = mover.opponent();
    if !has_legal_move(position, to_move) {
        return Some(mover);
    }

    None
}
