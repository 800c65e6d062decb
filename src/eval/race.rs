//! Passed-pawn race analysis.
//!
//! A pawn is passed when no opposing pawn stands ahead of it on its own
//! file or either neighbouring file. If one side's best passed pawn is
//! strictly closer to promotion than anything the other side can manage,
//! the race is decided.

use crate::board::{Coord, Position, Side, BOARD_SIZE};

use super::structure::FileStats;

/// Returns true if no opposing pawn can block or capture the pawn on `at`.
///
/// Each of the three files is scanned independently from the square ahead
/// of the pawn up to the promotion row, stopping at the first obstruction.
pub fn is_passed(position: &Position, at: Coord, side: Side) -> bool {
    let enemy = side.opponent();
    let fwd = side.forward();

    for dc in [-1i8, 0, 1] {
        let file = at.col as i8 + dc;
        if file < 0 || file >= BOARD_SIZE as i8 {
            continue;
        }
        let mut row = at.row as i8 + fwd;
        while let Some(sq) = Coord::try_new(row, file) {
            if position.side_at(sq) == Some(enemy) {
                return false;
            }
            row += fwd;
        }
    }
    true
}

/// Rows the pawn on `at` still has to travel.
#[inline]
pub fn distance_to_promotion(at: Coord, side: Side) -> i32 {
    (side.promotion_row() as i32 - at.row as i32).abs()
}

/// Distance of `side`'s most advanced passed pawn, or `None` if it has none.
pub fn best_passed_distance(position: &Position, side: Side) -> Option<i32> {
    position
        .pieces_of(side)
        .filter(|&at| is_passed(position, at, side))
        .map(|at| distance_to_promotion(at, side))
        .min()
}

/// `a < b`, where `None` stands for an unbounded distance.
#[inline]
fn strictly_closer(a: i32, b: Option<i32>) -> bool {
    b.map_or(true, |b| a < b)
}

/// Decides the promotion race, if either side wins it outright.
///
/// A side wins when its best passed pawn is strictly closer to promotion
/// than both the opponent's best passed pawn and the opponent's fastest
/// majority breakthrough.
pub fn race_winner(position: &Position, stats: &FileStats) -> Option<Side> {
    let first = best_passed_distance(position, Side::First);
    let second = best_passed_distance(position, Side::Second);
    if first.is_none() && second.is_none() {
        return None;
    }

    if let Some(d) = first {
        if strictly_closer(d, second) && strictly_closer(d, stats.min_moves_to_promote(Side::Second)) {
            return Some(Side::First);
        }
    }
    if let Some(d) = second {
        if strictly_closer(d, first) && strictly_closer(d, stats.min_moves_to_promote(Side::First)) {
            return Some(Side::Second);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn initial_position_has_no_passed_pawns() {
        let pos = Position::initial();
        for (sq, piece) in pos.pieces() {
            assert!(!is_passed(&pos, sq, piece.side));
        }
        assert_eq!(best_passed_distance(&pos, Side::First), None);
    }

    #[test]
    fn neighbouring_file_blocker_stops_a_passer() {
        let pos = Position::from_pieces([
            (at(3, 3), Side::First),
            (at(5, 4), Side::Second),
        ]);
        assert!(!is_passed(&pos, at(3, 3), Side::First));
        assert!(!is_passed(&pos, at(5, 4), Side::Second));
    }

    #[test]
    fn pawns_behind_do_not_count() {
        let pos = Position::from_pieces([
            (at(4, 3), Side::First),
            (at(3, 2), Side::Second),
            (at(2, 3), Side::Second),
        ]);
        assert!(is_passed(&pos, at(4, 3), Side::First));
        // Second's pawns are ahead of nothing: d5 is behind them.
        assert!(is_passed(&pos, at(2, 3), Side::Second));
    }

    #[test]
    fn distant_files_do_not_block() {
        let pos = Position::from_pieces([
            (at(2, 0), Side::First),
            (at(6, 2), Side::Second),
        ]);
        assert!(is_passed(&pos, at(2, 0), Side::First));
        assert!(is_passed(&pos, at(6, 2), Side::Second));
    }

    #[test]
    fn best_passed_distance_picks_most_advanced() {
        let pos = Position::from_pieces([
            (at(2, 0), Side::First),
            (at(5, 7), Side::First),
            (at(6, 3), Side::Second),
        ]);
        assert_eq!(best_passed_distance(&pos, Side::First), Some(2));
        assert_eq!(best_passed_distance(&pos, Side::Second), Some(6));
    }

    #[test]
    fn closer_passer_wins_race() {
        let pos = Position::from_pieces([
            (at(5, 0), Side::First),
            (at(3, 7), Side::Second),
        ]);
        let stats = FileStats::scan(&pos);
        assert_eq!(race_winner(&pos, &stats), Some(Side::First));
        assert_eq!(race_winner(&pos.mirror(), &FileStats::scan(&pos.mirror())), Some(Side::Second));
    }

    #[test]
    fn equal_passers_leave_race_open() {
        let pos = Position::from_pieces([
            (at(4, 0), Side::First),
            (at(3, 7), Side::Second),
        ]);
        let stats = FileStats::scan(&pos);
        assert_eq!(race_winner(&pos, &stats), None);
    }

    #[test]
    fn fast_majority_breakthrough_blocks_race() {
        // First's h-pawn needs 5 moves; Second's a/b majority needs 4.
        let pos = Position::from_pieces([
            (at(2, 7), Side::First),
            (at(1, 0), Side::First),
            (at(2, 0), Side::Second),
            (at(2, 1), Side::Second),
        ]);
        let stats = FileStats::scan(&pos);
        assert_eq!(best_passed_distance(&pos, Side::First), Some(5));
        assert_eq!(best_passed_distance(&pos, Side::Second), None);
        assert_eq!(stats.min_moves_to_promote(Side::Second), Some(4));
        assert_eq!(race_winner(&pos, &stats), None);

        // Without the b-pawn there is no majority and the passer wins.
        let pos = pos.remove(at(2, 1));
        let stats = FileStats::scan(&pos);
        assert_eq!(stats.min_moves_to_promote(Side::Second), None);
        assert_eq!(race_winner(&pos, &stats), Some(Side::First));
    }
}
